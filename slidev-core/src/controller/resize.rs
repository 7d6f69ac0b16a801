use std::time::Instant;

use tracing::{debug, trace};

use super::{Phase, Slider};
use crate::geometry::offset_for;
use crate::resize::{ARRIVED_EPSILON, PendingFinish, correct_in_flight};
use crate::surface::{Surface, Transition};

impl<S: Surface> Slider<S> {
    /// Report that the container was resized. `now` anchors the debounce of
    /// the corrective animation for a step in flight; drive it with
    /// [`Slider::tick`].
    pub fn on_resize(&mut self, now: Instant) {
        if !self.active {
            return;
        }
        let old_width = self.last_panel_width;
        let new_width = self.surface.panel_width();
        let ratio = if old_width > 0.0 { new_width / old_width } else { 1.0 };
        self.last_panel_width = new_width;
        debug!(old_width, new_width, phase = self.phase.name(), "resize");

        match self.phase {
            Phase::Idle | Phase::Dragging => {
                if let Some(session) = self.gesture.as_mut() {
                    session.rescale(ratio);
                }
                let offset = match (&self.phase, self.gesture.as_ref()) {
                    (Phase::Dragging, Some(session)) => {
                        session.live_offset(&self.frame, self.config.edge_damping)
                    }
                    _ => offset_for(self.frame.position() as isize, new_width),
                };
                self.surface.command_offset(offset, None);
            }
            Phase::Stepping { .. } => {
                let correction = correct_in_flight(
                    self.surface.current_offset(),
                    old_width,
                    new_width,
                    self.frame.position(),
                    self.last_step,
                );
                trace!(?correction, "freezing step for resize");
                self.surface.command_offset(correction.current, None);
                self.pending_finish = Some(PendingFinish::new(
                    now,
                    correction,
                    self.config.transition_duration(),
                ));
            }
            Phase::CancellingDrag => {
                let origin = offset_for(self.frame.position() as isize, new_width);
                self.cancel_drag(origin);
                if !self.is_moving() {
                    self.pump();
                }
            }
        }
    }

    /// Advance time-based work. Commands the corrective finish of a resized
    /// step once the debounce expired.
    pub fn tick(&mut self, now: Instant) {
        let Some(pending) = self.pending_finish else {
            return;
        };
        if !pending.is_due(now) {
            return;
        }
        self.pending_finish = None;
        if !matches!(self.phase, Phase::Stepping { .. }) {
            return;
        }

        let remaining = (pending.end - self.surface.current_offset()).abs();
        if remaining < ARRIVED_EPSILON || pending.duration.is_zero() {
            self.surface.command_offset(pending.end, None);
            self.on_transition_end();
            return;
        }
        trace!(end = pending.end, duration_ms = pending.duration.as_millis() as u64, "resuming step");
        self.surface.command_offset(
            pending.end,
            Some(Transition::new(pending.duration, self.config.transition_timing)),
        );
    }

    /// When [`Slider::tick`] next has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending_finish.map(|pending| pending.deadline)
    }
}
