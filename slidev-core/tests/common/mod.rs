//! Test harness for driving a [`Slider`] over a [`VirtualStrip`] with a
//! virtual clock.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use slidev_core::{Hooks, Slider, SliderConfig, Surface, TimingFunction, VirtualStrip};

pub type Strip = VirtualStrip<char>;

/// Width of one panel in every harness strip.
pub const PANEL: f32 = 100.0;

/// Shared log that callbacks and hooks append to.
pub type Log = Rc<RefCell<Vec<String>>>;

pub fn log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn entries(log: &Log) -> Vec<String> {
    log.borrow().clone()
}

/// Callback that records `tag` and nothing else.
pub fn record(
    log: &Log,
    tag: &'static str,
) -> impl FnOnce(&mut Slider<Strip>, Option<char>) + 'static + use<> {
    let log = log.clone();
    move |_, _| log.borrow_mut().push(tag.to_string())
}

pub fn letters(count: usize) -> Vec<char> {
    (b'a'..).take(count).map(char::from).collect()
}

pub fn config(frames_visible: usize, step: usize) -> SliderConfig {
    SliderConfig {
        frames_visible,
        step,
        transition_timing: TimingFunction::Linear,
        ..SliderConfig::default()
    }
}

pub struct Harness {
    pub slider: Slider<Strip>,
    pub now: Instant,
}

impl Harness {
    pub fn new(panels: usize, config: SliderConfig) -> Self {
        Self::with_hooks(panels, config, Hooks::new())
    }

    pub fn with_hooks(panels: usize, config: SliderConfig, hooks: Hooks) -> Self {
        let now = Instant::now();
        let strip = VirtualStrip::new_at(
            letters(panels),
            PANEL * config.frames_visible as f32,
            config.frames_visible,
            now,
        );
        let slider = Slider::new(strip, config, hooks).expect("valid slider");
        Self { slider, now }
    }

    /// Move the clock forward, forwarding completions and timers the way a
    /// host event loop would.
    pub fn advance(&mut self, ms: u64) {
        self.now += Duration::from_millis(ms);
        if self.slider.surface_mut().advance(self.now) {
            self.slider.on_transition_end();
        }
        self.slider.tick(self.now);
    }

    /// Run frames until nothing is moving and no timer is pending.
    pub fn settle(&mut self) {
        for _ in 0..1_000 {
            if !self.slider.is_moving() && self.slider.next_deadline().is_none() {
                return;
            }
            self.advance(16);
        }
        panic!("slider never settled: {:?}", self.slider);
    }

    pub fn strip(&self) -> &Strip {
        self.slider.surface()
    }

    pub fn offset(&self) -> f32 {
        self.slider.surface().current_offset()
    }

    pub fn first_visible(&self) -> char {
        self.strip().visible()[0]
    }
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}
