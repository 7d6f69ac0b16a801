//! Simple time-based tween animator for moving the strip to a target offset

use std::time::{Duration, Instant};

use crate::config::TimingFunction;

/// Tweens a single offset between two values.
#[derive(Debug, Clone)]
pub struct OffsetAnimator {
    active: bool,
    start: f32,
    target: f32,
    started_at: Instant,
    duration: Duration,
    timing: TimingFunction,
}

/// One animator sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    /// Still travelling; render this offset.
    Moving(f32),
    /// Reached the target on this sample.
    Finished(f32),
}

impl OffsetAnimator {
    /// An idle animator.
    pub fn new(now: Instant) -> Self {
        Self {
            active: false,
            start: 0.0,
            target: 0.0,
            started_at: now,
            duration: Duration::ZERO,
            timing: TimingFunction::Linear,
        }
    }

    /// Whether a tween is running.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Offset the last tween was heading for.
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Begin tweening from `current` to `target`, replacing any running tween.
    pub fn start(
        &mut self,
        current: f32,
        target: f32,
        duration: Duration,
        timing: TimingFunction,
        now: Instant,
    ) {
        self.active = true;
        self.start = current;
        self.target = target;
        self.started_at = now;
        self.duration = duration;
        self.timing = timing;
    }

    /// Returns `None` when inactive.
    pub fn sample(&mut self, now: Instant) -> Option<Frame> {
        if !self.active {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            self.active = false;
            return Some(Frame::Finished(self.target));
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = self.timing.apply(t);
        Some(Frame::Moving(self.start + (self.target - self.start) * eased))
    }

    /// Cancel the current animation immediately.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}
