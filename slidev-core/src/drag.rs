//! Drag gesture bookkeeping and release classification.
//!
//! A [`DragSession`] lives from pointer-down to pointer-up. It tracks the
//! displacement on both axes and memoizes the step / target offset for the
//! current drag direction, which is only recomputed when the direction flips.

use std::time::Duration;

use serde::Serialize;

use crate::frame::FrameState;

/// Displacement (px, per axis) under which a gesture counts as a click.
pub const CLICK_SLOP: f32 = 10.0;

/// Gap kept between a dragged strip and its target so the committed
/// transition still has distance to cover and reports completion.
pub const TARGET_EPSILON: f32 = 0.1;

/// Length of the animation returning a cancelled drag to its origin.
pub const CANCEL_DURATION: Duration = Duration::from_millis(100);

/// Pointer coordinate in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PointerPosition {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl PointerPosition {
    /// Point at `(x, y)`.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Reported to `on_slide_click` when a gesture stayed within the click slop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlideClick {
    /// Index of the clicked panel in the strip, as hit-tested by the host.
    pub index: usize,
}

/// What a released drag resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DropOutcome {
    /// Commit a forward step.
    Next,
    /// Commit a backward step.
    Prev,
    /// Animate back to where the drag started.
    Cancel,
}

/// Step and target offset memoized for one drag direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragTarget {
    /// Resolved step in the drag direction.
    pub step: isize,
    /// Offset the strip would rest at after that step.
    pub offset: f32,
}

/// One pointer gesture, from press to release.
#[derive(Debug, Clone)]
pub struct DragSession {
    origin: PointerPosition,
    origin_offset: f32,
    shift_x: f32,
    shift_y: f32,
    direction: Option<isize>,
    target: Option<DragTarget>,
}

impl DragSession {
    /// Start a gesture at `origin` over a strip resting at `origin_offset`.
    pub fn new(origin: PointerPosition, origin_offset: f32) -> Self {
        Self {
            origin,
            origin_offset,
            shift_x: 0.0,
            shift_y: 0.0,
            direction: None,
            target: None,
        }
    }

    /// Record the latest pointer position. Positive `shift_x` means the
    /// pointer moved left, i.e. towards the next slides.
    pub fn track(&mut self, point: PointerPosition) {
        self.shift_x = self.origin.x - point.x;
        self.shift_y = self.origin.y - point.y;
    }

    /// Returns the new direction when it differs from the one the memoized
    /// target was computed for.
    pub fn direction_change(&mut self) -> Option<isize> {
        let direction = sign(self.shift_x);
        if self.direction == Some(direction) {
            return None;
        }
        self.direction = Some(direction);
        Some(direction)
    }

    /// Memoize the target for the current direction.
    pub fn set_target(&mut self, target: DragTarget) {
        self.target = Some(target);
    }

    /// The memoized target, once the pointer has moved.
    pub fn target(&self) -> Option<DragTarget> {
        self.target
    }

    /// Strip offset when the gesture started.
    pub fn origin_offset(&self) -> f32 {
        self.origin_offset
    }

    /// Horizontal displacement; positive towards the next slides.
    pub fn shift_x(&self) -> f32 {
        self.shift_x
    }

    /// Whether the pointer stayed within [`CLICK_SLOP`] on both axes.
    pub fn is_click(&self) -> bool {
        self.shift_x.abs() < CLICK_SLOP && self.shift_y.abs() < CLICK_SLOP
    }

    /// Offset the strip should be rendered at for the current displacement.
    ///
    /// Past either end of the strip the displacement is damped by
    /// `edge_damping`. Elsewhere it is scaled so a full-container drag covers
    /// the memoized step, and clamped to stop [`TARGET_EPSILON`] short of the
    /// target.
    pub fn live_offset(&self, frame: &FrameState, edge_damping: f32) -> f32 {
        let direction = self.direction.unwrap_or(0);
        let at_edge = (frame.position() == 0 && direction == -1)
            || (frame.slides_after_frame() == 0 && direction == 1);
        if at_edge {
            return self.origin_offset - self.shift_x * edge_damping;
        }

        let Some(target) = self.target else {
            return self.origin_offset;
        };
        let coefficient =
            target.step.unsigned_abs() as f32 / frame.frames_visible() as f32;
        let live = self.origin_offset - self.shift_x * coefficient;

        if direction == 1 && live < target.offset {
            return target.offset + TARGET_EPSILON;
        }
        if direction == -1 && live > target.offset {
            return target.offset - TARGET_EPSILON;
        }
        live
    }

    /// Scale the remembered offsets after the panel width changed.
    pub fn rescale(&mut self, ratio: f32) {
        self.origin_offset *= ratio;
        if let Some(target) = self.target.as_mut() {
            target.offset *= ratio;
        }
    }
}

/// Resolve a released drag of `shift_x` pixels.
pub fn classify(shift_x: f32, threshold: f32, frame: &FrameState) -> DropOutcome {
    if shift_x > threshold && frame.slides_after_frame() != 0 {
        DropOutcome::Next
    } else if shift_x < -threshold && frame.position() != 0 {
        DropOutcome::Prev
    } else {
        DropOutcome::Cancel
    }
}

fn sign(value: f32) -> isize {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}
