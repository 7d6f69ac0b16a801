//! Drives a slider over a [`VirtualStrip`] from a parsed script.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Context, bail};
use serde::Serialize;
use slidev_core::{
    DestroyOptions, Done, Hooks, MoveOptions, NavOptions, PointerPosition, Slider,
    SliderConfig, Surface, VirtualStrip,
};
use tracing::debug;

use crate::script::{Command, Line};

/// Upper bound on simulated time spent waiting for the slider to settle.
const SETTLE_LIMIT: Duration = Duration::from_secs(60);

type Strip = VirtualStrip<String>;
type Events = Rc<RefCell<Vec<String>>>;

/// State printed for every `state` command and at the end of a run.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub line: Option<usize>,
    pub elapsed_ms: u64,
    pub position: usize,
    pub slides_after_frame: usize,
    pub last_index: usize,
    pub offset: f32,
    pub visible: Vec<String>,
    pub moving: bool,
    pub active: bool,
    /// Callbacks and hooks that fired since the previous snapshot.
    pub events: Vec<String>,
}

pub struct Simulation {
    slider: Slider<Strip>,
    started: Instant,
    now: Instant,
    frame: Duration,
    events: Events,
}

impl Simulation {
    pub fn new(
        config: SliderConfig,
        panels: usize,
        container_width: f32,
        frame: Duration,
    ) -> anyhow::Result<Self> {
        let now = Instant::now();
        let labels: Vec<String> = (0..panels).map(|i| format!("p{i}")).collect();
        let strip = VirtualStrip::new_at(labels, container_width, config.frames_visible, now);

        let events: Events = Rc::new(RefCell::new(Vec::new()));
        let on_end = events.clone();
        let on_click = events.clone();
        let hooks = Hooks::new()
            .on_move_end(move || on_end.borrow_mut().push("move_end".into()))
            .on_slide_click(move |click| {
                on_click.borrow_mut().push(format!("click {}", click.index))
            });

        let slider =
            Slider::new(strip, config, hooks).context("failed to construct slider")?;
        Ok(Self {
            slider,
            started: now,
            now,
            frame: frame.max(Duration::from_millis(1)),
            events,
        })
    }

    /// Run every line, collecting the snapshots the script asked for plus a
    /// final one.
    pub fn run(&mut self, script: &[Line]) -> anyhow::Result<Vec<Snapshot>> {
        let mut snapshots = Vec::new();
        for line in script {
            debug!(line = line.number, command = %line.text, "script");
            if let Some(snapshot) = self
                .execute(line)
                .with_context(|| format!("line {}: {}", line.number, line.text))?
            {
                snapshots.push(snapshot);
            }
        }
        self.settle()?;
        snapshots.push(self.snapshot(None));
        Ok(snapshots)
    }

    fn execute(&mut self, line: &Line) -> anyhow::Result<Option<Snapshot>> {
        let done = self.done_callback(&line.text);
        match &line.command {
            Command::Next { step, instant } => {
                let options = nav(*step, *instant).then(done);
                self.slider.next(options);
            }
            Command::Prev { step, instant } => {
                let options = nav(*step, *instant).then(done);
                self.slider.prev(options);
            }
            Command::GoTo { index, instant } => {
                let mut options = MoveOptions::new().then(done);
                if *instant {
                    options = options.instant();
                }
                self.slider.go_to(*index, options);
            }
            Command::Append(label) => {
                self.slider.append(label.clone(), Done::then(done));
            }
            Command::Prepend(label) => {
                self.slider.prepend(label.clone(), Done::then(done));
            }
            Command::Insert { label, index } => {
                self.slider.insert(label.clone(), *index, Done::then(done));
            }
            Command::Remove(index) => {
                let events = self.events.clone();
                self.slider.remove(
                    *index,
                    Done::then(move |_, panel: Option<String>| {
                        let removed = panel.unwrap_or_else(|| "nothing".into());
                        events.borrow_mut().push(format!("removed {removed}"));
                    }),
                );
            }
            Command::Wait(ms) => self.advance(Duration::from_millis(*ms)),
            Command::Settle => self.settle()?,
            Command::Resize(width) => {
                self.slider.surface_mut().set_container_width(*width);
                let now = self.now;
                self.slider.on_resize(now);
            }
            Command::Drag { from, to, moves } => self.drag(*from, *to, *moves),
            Command::Click(index) => {
                let x = (*index as f32 + 0.5) * self.slider.surface().panel_width()
                    + self.slider.surface().current_offset();
                self.slider.pointer_down(PointerPosition::new(x, 0.0));
                self.slider.pointer_up(Some(*index));
            }
            Command::Destroy { restore } => {
                let mut options = DestroyOptions::new().then(done);
                if *restore {
                    options = options.restore_markup();
                }
                self.slider.destroy(options);
            }
            Command::State => return Ok(Some(self.snapshot(Some(line.number)))),
        }
        Ok(None)
    }

    fn done_callback(
        &self,
        text: &str,
    ) -> impl FnOnce(&mut Slider<Strip>, Option<String>) + 'static + use<> {
        let events = self.events.clone();
        let label = format!("done {text}");
        move |_, _| events.borrow_mut().push(label)
    }

    fn drag(&mut self, from: f32, to: f32, moves: usize) {
        self.slider.pointer_down(PointerPosition::new(from, 0.0));
        for i in 1..=moves {
            let x = from + (to - from) * i as f32 / moves as f32;
            self.advance(self.frame);
            self.slider.pointer_move(PointerPosition::new(x, 0.0));
        }
        self.slider.pointer_up(None);
    }

    /// Move the virtual clock forward frame by frame.
    fn advance(&mut self, total: Duration) {
        let deadline = self.now + total;
        while self.now < deadline {
            self.now = (self.now + self.frame).min(deadline);
            self.step_frame();
        }
    }

    fn step_frame(&mut self) {
        let now = self.now;
        if self.slider.surface_mut().advance(now) {
            self.slider.on_transition_end();
        }
        self.slider.tick(now);
    }

    fn settle(&mut self) -> anyhow::Result<()> {
        let limit = self.now + SETTLE_LIMIT;
        while self.slider.is_moving() || self.slider.next_deadline().is_some() {
            if self.now >= limit {
                bail!(
                    "slider still moving after {}s of simulated time",
                    SETTLE_LIMIT.as_secs()
                );
            }
            self.now += self.frame;
            self.step_frame();
        }
        Ok(())
    }

    fn snapshot(&self, line: Option<usize>) -> Snapshot {
        let state = self.slider.state();
        let strip = self.slider.surface();
        Snapshot {
            line,
            elapsed_ms: self.now.duration_since(self.started).as_millis() as u64,
            position: state.position,
            slides_after_frame: state.slides_after_frame,
            last_index: state.last_index,
            offset: strip.current_offset(),
            visible: strip.visible().to_vec(),
            moving: self.slider.is_moving(),
            active: self.slider.is_active(),
            events: self.events.borrow_mut().drain(..).collect(),
        }
    }
}

fn nav(step: Option<usize>, instant: bool) -> NavOptions<Strip> {
    let mut options = NavOptions::new();
    if let Some(step) = step {
        options = options.step(step);
    }
    if instant {
        options = options.instant();
    }
    options
}
