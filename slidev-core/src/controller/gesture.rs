//! Pointer drag handling.

use tracing::{debug, trace};

use super::{Phase, Slider};
use crate::config::TimingFunction;
use crate::drag::{self, CANCEL_DURATION, DragSession, DragTarget, DropOutcome, PointerPosition, SlideClick};
use crate::frame::signed;
use crate::geometry::{self, offset_for};
use crate::operation::Operation;
use crate::resize::ARRIVED_EPSILON;
use crate::surface::{Surface, Transition};

impl<S: Surface> Slider<S> {
    /// Start tracking a gesture. Ignored while anything is moving.
    pub fn pointer_down(&mut self, point: PointerPosition) {
        if !self.active || self.is_moving() || self.gesture.is_some() {
            return;
        }
        trace!(x = point.x, y = point.y, "pointer down");
        self.gesture = Some(DragSession::new(point, self.surface.current_offset()));
    }

    /// Follow the pointer. Moves the strip only while dragging is enabled
    /// and nothing else is in flight.
    pub fn pointer_move(&mut self, point: PointerPosition) {
        let Some(session) = self.gesture.as_mut() else {
            return;
        };
        session.track(point);
        if !self.config.draggable || !matches!(self.phase, Phase::Idle | Phase::Dragging) {
            return;
        }
        self.phase = Phase::Dragging;

        if let Some(direction) = session.direction_change() {
            let step = self
                .frame
                .resolve_step(direction.saturating_mul(signed(self.config.step)));
            let panel_width = self.surface.panel_width();
            let offset = offset_for(self.frame.position() as isize + step, panel_width);
            self.last_step = step;
            self.last_panel_width = panel_width;
            session.set_target(DragTarget { step, offset });
            trace!(direction, step, offset, "drag target");
        }

        let live = session.live_offset(&self.frame, self.config.edge_damping);
        self.surface.command_offset(live, None);
    }

    /// End the gesture. `target` is the panel under the pointer, if any,
    /// and is reported through `on_slide_click` when the gesture was a click.
    pub fn pointer_up(&mut self, target: Option<usize>) {
        let Some(session) = self.gesture.take() else {
            return;
        };
        let dragged = matches!(self.phase, Phase::Dragging);
        if dragged {
            self.phase = Phase::Idle;
        }

        if session.is_click()
            && let Some(index) = target
        {
            debug!(index, "slide click");
            self.hooks.slide_click(SlideClick { index });
        }

        if dragged && session.shift_x() != 0.0 {
            self.release_drag(&session);
        }
        self.pump();
    }

    /// The pointer left the container; treated like a release.
    pub fn pointer_leave(&mut self, target: Option<usize>) {
        self.pointer_up(target);
    }

    fn release_drag(&mut self, session: &DragSession) {
        let threshold =
            geometry::drag_threshold(self.surface.container_width(), self.config.drag_threshold);
        let outcome = drag::classify(session.shift_x(), threshold, &self.frame);
        debug!(?outcome, shift_x = session.shift_x(), threshold, "drag released");

        let step = match outcome {
            DropOutcome::Next => signed(self.config.step),
            DropOutcome::Prev => signed(self.config.step).saturating_neg(),
            DropOutcome::Cancel => {
                self.cancel_drag(session.origin_offset());
                return;
            }
        };

        let progress = session
            .target()
            .map(|target| {
                geometry::progress_coefficient(
                    self.surface.current_offset(),
                    target.offset,
                    target.step,
                    self.last_panel_width,
                )
            })
            .unwrap_or(0.0);
        let full = self.config.transition_duration();
        let duration = full.saturating_sub(geometry::scale_duration(full, progress));
        self.queue.push_front(Operation::Step {
            step,
            animated: true,
            duration: Some(duration),
            callback: None,
        });
    }

    /// Send the strip back to `origin`. Leaves the slider in
    /// [`Phase::CancellingDrag`] unless it is already there.
    pub(super) fn cancel_drag(&mut self, origin: f32) {
        if (self.surface.current_offset() - origin).abs() < ARRIVED_EPSILON {
            self.surface.command_offset(origin, None);
            self.phase = Phase::Idle;
            return;
        }
        self.phase = Phase::CancellingDrag;
        self.surface.command_offset(
            origin,
            Some(Transition::new(CANCEL_DURATION, TimingFunction::Ease)),
        );
    }
}
