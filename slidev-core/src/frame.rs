//! Logical frame position and step resolution.
//!
//! `position + slides_after_frame + frames_visible == total` holds after
//! every mutation; all mutators go through this type so the counters can
//! never drift apart.

use serde::Serialize;

/// Index bookkeeping for the window of visible panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameState {
    position: usize,
    slides_after_frame: usize,
    frames_visible: usize,
}

impl FrameState {
    /// A frame at position 0 over `total` panels.
    ///
    /// `total` must be at least `frames_visible`; callers validate this
    /// through [`crate::SliderConfig::validate_for`].
    pub fn new(total: usize, frames_visible: usize) -> Self {
        debug_assert!(total >= frames_visible);
        Self {
            position: 0,
            slides_after_frame: total.saturating_sub(frames_visible),
            frames_visible,
        }
    }

    /// Index of the leftmost fully visible panel.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Panels available for a forward step.
    #[inline]
    pub fn slides_after_frame(&self) -> usize {
        self.slides_after_frame
    }

    /// Panels shown at once.
    #[inline]
    pub fn frames_visible(&self) -> usize {
        self.frames_visible
    }

    /// Panels in the strip.
    #[inline]
    pub fn total(&self) -> usize {
        self.position + self.slides_after_frame + self.frames_visible
    }

    /// Panels available in the direction of `step` (0 for a zero step).
    pub fn available(&self, step: isize) -> usize {
        match step.signum() {
            1 => self.slides_after_frame,
            -1 => self.position,
            _ => 0,
        }
    }

    /// Clamp a requested step to what the frame can actually travel.
    ///
    /// The sign is preserved and `|result| <= |requested|`. A zero request or
    /// a blocked direction resolves to 0.
    pub fn resolve_step(&self, requested: isize) -> isize {
        let available = self.available(requested);
        if requested.unsigned_abs() < available {
            requested
        } else {
            signed(available) * requested.signum()
        }
    }

    /// Commit an already resolved step.
    pub fn apply_step(&mut self, step: isize) {
        debug_assert_eq!(self.resolve_step(step), step);
        if step >= 0 {
            let step = step as usize;
            self.position += step;
            self.slides_after_frame -= step;
        } else {
            let step = step.unsigned_abs();
            self.position -= step;
            self.slides_after_frame += step;
        }
    }

    /// A panel was added anywhere in the strip. The frame keeps its position,
    /// so the new panel counts as available after the frame.
    pub fn grow(&mut self) {
        self.slides_after_frame += 1;
    }

    /// A panel was removed anywhere in the strip.
    ///
    /// Returns `true` when the frame had to step back by one because it was
    /// already at the far end; the caller re-applies the offset. Returns
    /// `None` when removal would leave fewer panels than are visible.
    pub fn shrink(&mut self) -> Option<bool> {
        if self.slides_after_frame > 0 {
            self.slides_after_frame -= 1;
            Some(false)
        } else if self.position > 0 {
            self.position -= 1;
            Some(true)
        } else {
            None
        }
    }
}

/// Convert a slide count into a step, saturating at `isize::MAX`.
pub fn signed(count: usize) -> isize {
    isize::try_from(count).unwrap_or(isize::MAX)
}
