//! Loop buffer maintenance.
//!
//! After a move in direction `d`, if fewer than `step` panels remain ahead
//! of the frame, up to `min(step, behind / 2)` panels are moved from behind
//! the frame to ahead of it. Each move is paired with an instant one-slide
//! compensation so the visible panels never change.

use tracing::debug;

use super::Slider;
use crate::operation::{Operation, Relocation};
use crate::surface::Surface;

impl<S: Surface> Slider<S> {
    /// Rebalance the strip after a move of `step`. The burst runs to
    /// completion before this returns.
    pub(super) fn relocate(&mut self, step: isize) {
        let direction = step.signum();
        if direction == 0 {
            return;
        }
        let ahead = self.frame.available(direction);
        if ahead >= self.config.step {
            return;
        }
        let behind = self.frame.available(-direction);
        let count = self.config.step.min(behind / 2);
        if count == 0 {
            return;
        }

        let (relocation, compensation) = if direction > 0 {
            (Relocation::HeadToTail, -1)
        } else {
            (Relocation::TailToHead, 1)
        };
        debug!(
            ?relocation,
            count,
            ahead,
            behind,
            position = self.frame.position(),
            "relocating panels"
        );

        self.looping = false;
        let mut burst = Vec::with_capacity(count * 2 + 1);
        for _ in 0..count {
            burst.push(Operation::Relocate(relocation));
            burst.push(Operation::compensate(compensation));
        }
        burst.push(Operation::RestoreLoop);
        self.queue.splice_front(burst);
        self.run_burst();
    }

    /// Execute queued operations up to and including the burst terminator.
    fn run_burst(&mut self) {
        while let Some(op) = self.queue.pop() {
            let last = matches!(op, Operation::RestoreLoop);
            self.execute(op);
            if last {
                break;
            }
        }
    }

    pub(super) fn relocate_panel(&mut self, relocation: Relocation) {
        match relocation {
            Relocation::HeadToTail => self.surface.move_head_to_tail(),
            Relocation::TailToHead => self.surface.move_tail_to_head(),
        }
    }
}
