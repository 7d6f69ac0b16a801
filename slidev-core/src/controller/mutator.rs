use std::time::Duration;

use tracing::{debug, trace};

use super::{Phase, Slider};
use crate::geometry::offset_for;
use crate::operation::Callback;
use crate::surface::{Surface, Transition};

impl<S: Surface> Slider<S> {
    /// Resolve and perform a step. Animated steps leave the slider in
    /// [`Phase::Stepping`] until [`Slider::on_transition_end`]; everything
    /// else completes before this returns.
    pub(super) fn take_step(
        &mut self,
        requested: isize,
        animated: bool,
        duration: Option<Duration>,
        callback: Option<Callback<S>>,
    ) {
        let step = self.frame.resolve_step(requested);
        self.last_step = step;

        if step == 0 {
            trace!(requested, position = self.frame.position(), "step resolves to zero");
            self.fire(callback, None);
            return;
        }

        let panel_width = self.surface.panel_width();
        self.last_panel_width = panel_width;
        self.frame.apply_step(step);
        let target = offset_for(self.frame.position() as isize, panel_width);

        if !animated {
            trace!(step, target, "instant step");
            self.surface.command_offset(target, None);
            if self.looping {
                self.relocate(step);
            }
            self.fire(callback, None);
            return;
        }

        let duration = duration.unwrap_or_else(|| self.config.transition_duration());
        if duration.is_zero() {
            // Nothing would ever report the end of a zero-length transition.
            self.surface.command_offset(target, None);
            self.complete_step(callback);
            return;
        }

        debug!(
            step,
            requested,
            position = self.frame.position(),
            target,
            duration_ms = duration.as_millis() as u64,
            "animated step"
        );
        self.phase = Phase::Stepping { callback };
        self.surface
            .command_offset(target, Some(Transition::new(duration, self.config.transition_timing)));
    }

    /// Settle an animated step: rebalance the loop buffer, then notify.
    fn complete_step(&mut self, callback: Option<Callback<S>>) {
        if self.looping {
            self.relocate(self.last_step);
        }
        self.hooks.move_end();
        self.fire(callback, None);
    }

    /// Report that the transition last commanded on the surface has ended.
    ///
    /// Completes the step in flight (or a cancelled drag returning to its
    /// origin) and resumes draining the queue. Stray notifications are
    /// ignored.
    pub fn on_transition_end(&mut self) {
        if !self.active {
            return;
        }
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Stepping { callback } => {
                self.pending_finish = None;
                trace!(position = self.frame.position(), "step settled");
                self.complete_step(callback);
            }
            Phase::CancellingDrag => {
                trace!("cancelled drag settled");
            }
            phase @ (Phase::Idle | Phase::Dragging) => {
                debug!(phase = phase.name(), "ignoring stray transition end");
                self.phase = phase;
                return;
            }
        }
        self.pump();
    }
}
