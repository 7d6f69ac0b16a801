//! In-memory [`Surface`] driven by a virtual clock.
//!
//! Behaves like a browser strip with a CSS `left` transition: panels share
//! the container width evenly across the visible frames, animated commands
//! are tweened by [`OffsetAnimator`], and an animated command that does not
//! change the offset (or has zero duration) never reports completion.

use std::time::Instant;

use tracing::trace;

use crate::animator::{Frame, OffsetAnimator};
use crate::error::SurfaceError;
use crate::surface::{Surface, Transition};

/// Panels in a `Vec`, rendered at a single offset.
#[derive(Debug, Clone)]
pub struct VirtualStrip<P> {
    panels: Vec<P>,
    container_width: f32,
    frames_visible: usize,
    offset: f32,
    animator: OffsetAnimator,
    clock: Instant,
    attached: bool,
    completions: usize,
}

impl<P> VirtualStrip<P> {
    /// A detached strip at offset 0 whose clock starts now.
    pub fn new(panels: Vec<P>, container_width: f32, frames_visible: usize) -> Self {
        Self::new_at(panels, container_width, frames_visible, Instant::now())
    }

    /// Like [`VirtualStrip::new`] with an explicit start time for the clock.
    pub fn new_at(
        panels: Vec<P>,
        container_width: f32,
        frames_visible: usize,
        now: Instant,
    ) -> Self {
        Self {
            panels,
            container_width,
            frames_visible: frames_visible.max(1),
            offset: 0.0,
            animator: OffsetAnimator::new(now),
            clock: now,
            attached: false,
            completions: 0,
        }
    }

    /// Advance the clock. Returns `true` when a transition completed, in
    /// which case the host forwards it to [`crate::Slider::on_transition_end`].
    pub fn advance(&mut self, now: Instant) -> bool {
        self.clock = now;
        match self.animator.sample(now) {
            Some(Frame::Moving(x)) => {
                self.offset = x;
                false
            }
            Some(Frame::Finished(x)) => {
                self.offset = x;
                self.completions += 1;
                true
            }
            None => false,
        }
    }

    /// Simulate a viewport resize. A running transition keeps heading for
    /// its old pixel target, exactly as a CSS transition would.
    pub fn set_container_width(&mut self, width: f32) {
        self.container_width = width;
    }

    /// All panels in strip order.
    pub fn panels(&self) -> &[P] {
        &self.panels
    }

    /// Panels currently inside the viewport, judged from the rendered offset.
    pub fn visible(&self) -> &[P] {
        let width = self.panel_width();
        if self.panels.is_empty() || width <= 0.0 {
            return &[];
        }
        let first = (-self.offset / width).round().max(0.0) as usize;
        let first = first.min(self.panels.len());
        let last = (first + self.frames_visible).min(self.panels.len());
        &self.panels[first..last]
    }

    /// Rendered offset.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Whether a transition is running.
    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    /// Offset a running transition is heading for.
    pub fn animation_target(&self) -> Option<f32> {
        self.animator.is_active().then(|| self.animator.target())
    }

    /// Whether a slider holds the strip's listeners.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Transitions completed so far.
    pub fn completions(&self) -> usize {
        self.completions
    }
}

impl<P> Surface for VirtualStrip<P> {
    type Panel = P;

    fn panel_count(&self) -> usize {
        self.panels.len()
    }

    fn panel_width(&self) -> f32 {
        self.container_width / self.frames_visible as f32
    }

    fn container_width(&self) -> f32 {
        self.container_width
    }

    fn current_offset(&self) -> f32 {
        self.offset
    }

    fn command_offset(&mut self, offset: f32, transition: Option<Transition>) {
        match transition {
            Some(t)
                if !t.duration.is_zero()
                    && (offset - self.offset).abs() > f32::EPSILON =>
            {
                trace!(from = self.offset, to = offset, ?t, "strip transition");
                self.animator
                    .start(self.offset, offset, t.duration, t.timing, self.clock);
            }
            _ => {
                self.animator.cancel();
                self.offset = offset;
            }
        }
    }

    fn move_head_to_tail(&mut self) {
        if !self.panels.is_empty() {
            self.panels.rotate_left(1);
        }
    }

    fn move_tail_to_head(&mut self) {
        if !self.panels.is_empty() {
            self.panels.rotate_right(1);
        }
    }

    fn insert_panel(&mut self, panel: P, index: usize) -> Result<(), SurfaceError> {
        if !self.attached {
            return Err(SurfaceError::Detached);
        }
        if index > self.panels.len() {
            return Err(SurfaceError::InsertRejected { index });
        }
        self.panels.insert(index, panel);
        Ok(())
    }

    fn remove_panel(&mut self, index: usize) -> Option<P> {
        (index < self.panels.len()).then(|| self.panels.remove(index))
    }

    fn attach(&mut self) {
        self.attached = true;
    }

    fn detach(&mut self, restore_markup: bool) {
        self.attached = false;
        if restore_markup {
            self.animator.cancel();
            self.offset = 0.0;
        }
    }
}
