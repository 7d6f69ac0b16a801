//! The slider controller.
//!
//! [`Slider`] turns every public call into an [`Operation`] and runs them one
//! at a time. An operation either completes synchronously (instant moves,
//! zero steps, structural changes) or leaves the slider in a non-idle
//! [`Phase`] until the host reports the end of the transition it commanded.
//! While not idle, new calls wait in the [`OperationQueue`].

mod gesture;
mod mutator;
mod relocator;
mod resize;
mod structure;

use std::fmt;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::config::SliderConfig;
use crate::drag::{DragSession, SlideClick};
use crate::error::Result;
use crate::frame::{FrameState, signed};
use crate::operation::{
    Callback, DestroyOptions, Done, InsertAt, MoveOptions, NavOptions, Operation,
};
use crate::queue::OperationQueue;
use crate::resize::PendingFinish;
use crate::surface::Surface;

/// Snapshot returned by [`Slider::state`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SliderState {
    /// Index of the leftmost fully visible panel.
    pub position: usize,
    /// Panels available for a forward step.
    pub slides_after_frame: usize,
    /// Index of the last panel in the strip.
    pub last_index: usize,
}

/// Notifications that are not tied to a particular call.
#[derive(Default)]
pub struct Hooks {
    on_move_end: Option<Box<dyn FnMut()>>,
    on_slide_click: Option<Box<dyn FnMut(SlideClick)>>,
}

impl Hooks {
    /// No hooks installed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Called after every animated step settles, before its callback.
    pub fn on_move_end<F>(mut self, hook: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.on_move_end = Some(Box::new(hook));
        self
    }

    /// Called when a pointer gesture on a panel stays within the click slop.
    pub fn on_slide_click<F>(mut self, hook: F) -> Self
    where
        F: FnMut(SlideClick) + 'static,
    {
        self.on_slide_click = Some(Box::new(hook));
        self
    }

    fn move_end(&mut self) {
        if let Some(hook) = self.on_move_end.as_mut() {
            hook();
        }
    }

    fn slide_click(&mut self, click: SlideClick) {
        if let Some(hook) = self.on_slide_click.as_mut() {
            hook(click);
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("on_move_end", &self.on_move_end.is_some())
            .field("on_slide_click", &self.on_slide_click.is_some())
            .finish()
    }
}

/// What the slider is waiting for. Anything but `Idle` counts as moving.
enum Phase<S: Surface> {
    Idle,
    /// An animated step was commanded; holds its callback until the
    /// transition ends.
    Stepping { callback: Option<Callback<S>> },
    /// A pointer drag is moving the strip.
    Dragging,
    /// A cancelled drag is animating back to its origin.
    CancellingDrag,
}

impl<S: Surface> Phase<S> {
    fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Stepping { .. } => "stepping",
            Phase::Dragging => "dragging",
            Phase::CancellingDrag => "cancelling_drag",
        }
    }
}

/// Carousel controller over a [`Surface`].
pub struct Slider<S: Surface> {
    surface: S,
    config: SliderConfig,
    hooks: Hooks,
    frame: FrameState,
    queue: OperationQueue<Operation<S>>,
    phase: Phase<S>,
    /// Runtime loop flag; cleared while a relocation burst runs.
    looping: bool,
    /// False once `destroy` executed.
    active: bool,
    pumping: bool,
    /// Step most recently resolved by a move or a drag.
    last_step: isize,
    /// Panel width measured when `last_step` was commanded.
    last_panel_width: f32,
    gesture: Option<DragSession>,
    pending_finish: Option<PendingFinish>,
}

impl<S: Surface> Slider<S> {
    /// Take over `surface` and position the strip at its first panel.
    ///
    /// Fails when the configuration is invalid or does not fit the panels the
    /// surface holds; the surface is dropped in that case.
    pub fn new(mut surface: S, config: SliderConfig, hooks: Hooks) -> Result<Self> {
        let panels = surface.panel_count();
        let panel_width = surface.panel_width();
        config.validate_for(panels, panel_width)?;

        surface.attach();
        surface.command_offset(0.0, None);

        let mut slider = Self {
            frame: FrameState::new(panels, config.frames_visible),
            looping: config.looping,
            surface,
            config,
            hooks,
            queue: OperationQueue::new(),
            phase: Phase::Idle,
            active: true,
            pumping: false,
            last_step: 0,
            last_panel_width: panel_width,
            gesture: None,
            pending_finish: None,
        };

        if slider.looping {
            let spare = panels - slider.config.frames_visible;
            if spare < 2 {
                warn!(
                    panels,
                    frames_visible = slider.config.frames_visible,
                    missing = 2 - spare,
                    "loop needs at least two panels outside the frame; looping will be degraded"
                );
            }
            // Pre-fill the buffer in front of the frame.
            slider.relocate(signed(slider.config.step).saturating_neg());
        }

        debug!(
            panels,
            frames_visible = slider.config.frames_visible,
            position = slider.frame.position(),
            "slider initialised"
        );
        Ok(slider)
    }

    /// Move forward by `options.step` (default: the configured step).
    pub fn next(&mut self, options: NavOptions<S>) -> &mut Self {
        let step = signed(options.step.unwrap_or(self.config.step));
        self.submit(Operation::Step {
            step,
            animated: options.animated,
            duration: None,
            callback: options.callback,
        })
    }

    /// Move backward by `options.step` (default: the configured step).
    pub fn prev(&mut self, options: NavOptions<S>) -> &mut Self {
        let step = signed(options.step.unwrap_or(self.config.step));
        self.submit(Operation::Step {
            step: step.saturating_neg(),
            animated: options.animated,
            duration: None,
            callback: options.callback,
        })
    }

    /// Move so that `index` becomes the leftmost visible panel, as far as the
    /// strip allows. The distance is measured when the operation executes.
    pub fn go_to(&mut self, index: usize, options: MoveOptions<S>) -> &mut Self {
        self.submit(Operation::GoTo {
            index,
            animated: options.animated,
            callback: options.callback,
        })
    }

    /// Add `panel` after the last panel.
    pub fn append(&mut self, panel: S::Panel, done: Done<S>) -> &mut Self {
        self.submit(Operation::Insert {
            panel,
            at: InsertAt::Tail,
            callback: done.callback,
        })
    }

    /// Add `panel` before the first panel. The frame keeps its position, so
    /// the visible panels shift by one.
    pub fn prepend(&mut self, panel: S::Panel, done: Done<S>) -> &mut Self {
        self.submit(Operation::Insert {
            panel,
            at: InsertAt::Head,
            callback: done.callback,
        })
    }

    /// Insert `panel` before the panel currently at `index`.
    pub fn insert(&mut self, panel: S::Panel, index: usize, done: Done<S>) -> &mut Self {
        self.submit(Operation::Insert {
            panel,
            at: InsertAt::Before(index),
            callback: done.callback,
        })
    }

    /// Remove the panel at `index`; the callback receives it.
    pub fn remove(&mut self, index: usize, done: Done<S>) -> &mut Self {
        self.submit(Operation::Remove {
            index,
            callback: done.callback,
        })
    }

    /// Tear the slider down once everything queued before it has run. Every
    /// call made afterwards is ignored.
    pub fn destroy(&mut self, options: DestroyOptions<S>) -> &mut Self {
        self.submit(Operation::Destroy {
            restore_markup: options.restore_markup,
            callback: options.callback,
        })
    }

    /// Current position and counters.
    pub fn state(&self) -> SliderState {
        SliderState {
            position: self.frame.position(),
            slides_after_frame: self.frame.slides_after_frame(),
            last_index: self.frame.total().saturating_sub(1),
        }
    }

    /// Configuration the slider was built with.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// The surface being driven.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for hosts that need to drive their surface (e.g. to
    /// advance a clock). Changing the panel structure behind the slider's
    /// back breaks its bookkeeping; use the structural API instead.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Whether a transition or drag is in flight.
    pub fn is_moving(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// False after `destroy` executed.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether looping is configured and no relocation burst is running.
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Operations waiting for the current one to finish.
    pub fn pending_operations(&self) -> usize {
        self.queue.len()
    }

    /// Queue `op`, then run it right away if nothing is in flight.
    fn submit(&mut self, op: Operation<S>) -> &mut Self {
        if !self.active {
            trace!(kind = op.kind(), "slider destroyed; call ignored");
            return self;
        }
        trace!(
            kind = op.kind(),
            phase = self.phase.name(),
            queued = self.queue.len(),
            "submit"
        );
        self.queue.push(op);
        self.pump();
        self
    }

    /// Run queued operations until one leaves the slider non-idle, a
    /// callback is collecting submissions, or the queue is empty.
    fn pump(&mut self) {
        if self.pumping {
            return;
        }
        self.pumping = true;
        while self.active
            && matches!(self.phase, Phase::Idle)
            && !self.queue.is_interrupted()
        {
            let Some(op) = self.queue.pop() else {
                break;
            };
            self.execute(op);
        }
        self.pumping = false;
    }

    fn execute(&mut self, op: Operation<S>) {
        trace!(?op, "execute");
        match op {
            Operation::Step {
                step,
                animated,
                duration,
                callback,
            } => self.take_step(step, animated, duration, callback),
            Operation::GoTo {
                index,
                animated,
                callback,
            } => {
                let step = signed(index).saturating_sub(signed(self.frame.position()));
                self.take_step(step, animated, None, callback);
            }
            Operation::Insert {
                panel,
                at,
                callback,
            } => self.insert_panel(panel, at, callback),
            Operation::Remove { index, callback } => {
                self.remove_panel(index, callback)
            }
            Operation::Relocate(relocation) => self.relocate_panel(relocation),
            Operation::RestoreLoop => self.looping = true,
            Operation::Destroy {
                restore_markup,
                callback,
            } => self.deactivate(restore_markup, callback),
        }
    }

    /// Run a completion callback. Calls it makes are collected and placed in
    /// front of everything already queued.
    fn fire(&mut self, callback: Option<Callback<S>>, panel: Option<S::Panel>) {
        let Some(callback) = callback else {
            return;
        };
        self.queue.begin_interrupt();
        callback(self, panel);
        self.queue.end_interrupt();
    }
}

impl<S: Surface> fmt::Debug for Slider<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("frame", &self.frame)
            .field("phase", &self.phase.name())
            .field("looping", &self.looping)
            .field("active", &self.active)
            .field("queued", &self.queue.len())
            .field("last_step", &self.last_step)
            .field("gesture", &self.gesture)
            .field("pending_finish", &self.pending_finish)
            .finish_non_exhaustive()
    }
}
