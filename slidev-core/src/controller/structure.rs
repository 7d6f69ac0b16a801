use tracing::{debug, info, warn};

use super::Slider;
use crate::error::{OperationWarning, SurfaceError};
use crate::geometry::offset_for;
use crate::operation::{Callback, InsertAt};
use crate::surface::Surface;

impl<S: Surface> Slider<S> {
    pub(super) fn insert_panel(
        &mut self,
        panel: S::Panel,
        at: InsertAt,
        callback: Option<Callback<S>>,
    ) {
        let panels = self.frame.total();
        let (action, index) = match at {
            InsertAt::Head => ("prepend", 0),
            InsertAt::Tail => ("append", panels),
            InsertAt::Before(index) if index < panels => ("insert", index),
            InsertAt::Before(index) => {
                let warning = OperationWarning::InvalidIndex {
                    action: "insert",
                    index,
                    panels,
                };
                warn!(%warning, "operation skipped");
                self.fire(callback, None);
                return;
            }
        };

        match self.surface.insert_panel(panel, index) {
            Ok(()) => {
                self.frame.grow();
                debug!(action, index, panels = self.frame.total(), "panel inserted");
            }
            Err(source) => {
                let warning = OperationWarning::Surface { action, source };
                warn!(%warning, "operation skipped");
            }
        }
        self.fire(callback, None);
    }

    pub(super) fn remove_panel(&mut self, index: usize, callback: Option<Callback<S>>) {
        let panels = self.frame.total();
        if index >= panels {
            let warning = OperationWarning::InvalidIndex {
                action: "remove",
                index,
                panels,
            };
            warn!(%warning, "operation skipped");
            self.fire(callback, None);
            return;
        }
        if panels <= self.frame.frames_visible() {
            let warning = OperationWarning::InsufficientPanels {
                panels,
                frames_visible: self.frame.frames_visible(),
            };
            warn!(%warning, "operation skipped");
            self.fire(callback, None);
            return;
        }

        let Some(panel) = self.surface.remove_panel(index) else {
            let warning = OperationWarning::Surface {
                action: "remove",
                source: SurfaceError::MissingPanel { index },
            };
            warn!(%warning, "operation skipped");
            self.fire(callback, None);
            return;
        };

        if self.frame.shrink() == Some(true) {
            // The frame was flush with the end; keep it filled.
            let offset = offset_for(self.frame.position() as isize, self.surface.panel_width());
            self.surface.command_offset(offset, None);
        }
        debug!(index, panels = self.frame.total(), "panel removed");
        self.fire(callback, Some(panel));
    }

    pub(super) fn deactivate(&mut self, restore_markup: bool, callback: Option<Callback<S>>) {
        self.active = false;
        let dropped = self.queue.len();
        self.queue.clear();
        self.gesture = None;
        self.pending_finish = None;
        self.surface.detach(restore_markup);
        info!(restore_markup, dropped, "slider destroyed");
        self.fire(callback, None);
    }
}
