//! Proportional offset correction when the panel width changes while a step
//! is animating.

use std::time::{Duration, Instant};

use crate::geometry::{offset_for, remaining_fraction, scale_duration, start_offset};

/// Quiet period after the last resize before the corrective animation runs.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(50);

/// Distance (px) under which a corrective finish is treated as arrived.
pub const ARRIVED_EPSILON: f32 = 0.05;

/// Where an in-flight step stands after a width change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InFlightCorrection {
    /// Rendered offset rescaled to the new width; applied instantly.
    pub current: f32,
    /// Offset the step must still end at.
    pub end: f32,
    /// Fraction of the step still ahead (0..=1).
    pub remaining: f32,
}

/// Rescale an animating step from `old_width` to `new_width`.
///
/// `position` is the already committed post-step position and `step` the
/// step being animated.
pub fn correct_in_flight(
    rendered: f32,
    old_width: f32,
    new_width: f32,
    position: usize,
    step: isize,
) -> InFlightCorrection {
    let end = offset_for(position as isize, new_width);
    let start = start_offset(end, step, new_width);
    let ratio = if old_width > 0.0 { new_width / old_width } else { 1.0 };
    let current = rendered * ratio;
    InFlightCorrection {
        current,
        end,
        remaining: remaining_fraction(current, start, end),
    }
}

/// Corrective finish waiting for the debounce to expire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingFinish {
    /// When the finish may be commanded.
    pub deadline: Instant,
    /// Offset the step settles at.
    pub end: f32,
    /// Time left for the remaining distance.
    pub duration: Duration,
}

impl PendingFinish {
    /// Debounce a finish from `now`, scaling `full_duration` by the distance
    /// still to cover.
    pub fn new(
        now: Instant,
        correction: InFlightCorrection,
        full_duration: Duration,
    ) -> Self {
        Self {
            deadline: now + RESIZE_DEBOUNCE,
            end: correction.end,
            duration: scale_duration(full_duration, correction.remaining),
        }
    }

    /// Whether the debounce expired at `now`.
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.deadline
    }
}
