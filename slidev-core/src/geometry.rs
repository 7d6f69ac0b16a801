//! Conversions between slide indices and strip offsets.
//!
//! Offsets follow the rendering convention of a strip moved left inside its
//! viewport: position `p` with panel width `w` sits at `-(p * w)`.

use std::time::Duration;

/// Pixels subtracted from the drag threshold so a threshold of 1.0 can still
/// be reached by a full-width drag.
pub const DRAG_THRESHOLD_SLACK: f32 = 2.0;

/// Offset that puts `position` at the left edge of the frame.
#[inline]
pub fn offset_for(position: isize, panel_width: f32) -> f32 {
    -(position as f32) * panel_width
}

/// Offset an animated step of `step` slides starts from, given its end.
#[inline]
pub fn start_offset(end: f32, step: isize, panel_width: f32) -> f32 {
    end + step as f32 * panel_width
}

/// How far `current` already travelled from the step's start offset towards
/// `end` (0 = not moved, 1 = arrived). A degenerate span counts as arrived.
pub fn progress_coefficient(
    current: f32,
    end: f32,
    step: isize,
    panel_width: f32,
) -> f32 {
    let start = start_offset(end, step, panel_width);
    let span = end - start;
    if span.abs() <= f32::EPSILON {
        return 1.0;
    }
    (current - start) / span
}

/// Fraction of the `start -> end` span still left to cover from `current`,
/// clamped to 0..=1.
pub fn remaining_fraction(current: f32, start: f32, end: f32) -> f32 {
    let span = end - start;
    if span.abs() <= f32::EPSILON {
        return 0.0;
    }
    ((end - current) / span).clamp(0.0, 1.0)
}

/// Displacement (px) a drag must exceed to commit a navigation.
#[inline]
pub fn drag_threshold(container_width: f32, fraction: f32) -> f32 {
    (container_width * fraction - DRAG_THRESHOLD_SLACK).max(0.0)
}

/// `duration` scaled by `fraction` (clamped to 0..=1).
pub fn scale_duration(duration: Duration, fraction: f32) -> Duration {
    duration.mul_f32(fraction.clamp(0.0, 1.0))
}
