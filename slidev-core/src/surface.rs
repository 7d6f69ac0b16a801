//! Boundary between the controller and whatever renders the strip.

use std::time::Duration;

use crate::config::TimingFunction;
use crate::error::SurfaceError;

/// Animation attached to an offset command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// How long the animation runs.
    pub duration: Duration,
    /// Easing curve.
    pub timing: TimingFunction,
}

impl Transition {
    /// A transition of `duration` along `timing`.
    pub fn new(duration: Duration, timing: TimingFunction) -> Self {
        Self { duration, timing }
    }
}

/// Rendering collaborator driven by [`crate::Slider`].
///
/// The surface owns the panels and a movable strip inside a fixed viewport.
/// Offsets are in pixels, negative when the strip is moved left.
///
/// # Completion contract
///
/// Every `command_offset` with `Some(transition)` that actually changes the
/// rendered offset must eventually be followed by exactly one call to
/// [`crate::Slider::on_transition_end`] from the host. The controller has no
/// timeout: a lost notification stalls the operation queue for good. An
/// instant command (`None`) cancels a running transition *without* a
/// completion notification.
pub trait Surface {
    /// Panel handle moved in and out of the strip.
    type Panel;

    /// Panels currently in the strip.
    fn panel_count(&self) -> usize;

    /// Rendered width of a single panel.
    fn panel_width(&self) -> f32;

    /// Width of the viewport, used for the drag threshold.
    fn container_width(&self) -> f32;

    /// Offset the strip is rendered at right now, mid-transition included.
    fn current_offset(&self) -> f32;

    /// Move the strip to `offset`, animated when `transition` is given.
    fn command_offset(&mut self, offset: f32, transition: Option<Transition>);

    /// Move the first panel to the end of the strip.
    fn move_head_to_tail(&mut self);

    /// Move the last panel to the front of the strip.
    fn move_tail_to_head(&mut self);

    /// Insert `panel` before `index`; `index == panel_count()` appends.
    fn insert_panel(
        &mut self,
        panel: Self::Panel,
        index: usize,
    ) -> Result<(), SurfaceError>;

    /// Take the panel at `index` out of the strip.
    fn remove_panel(&mut self, index: usize) -> Option<Self::Panel>;

    /// Subscribe the host-level event sources (resize, pointer release)
    /// this surface forwards. Called once by [`crate::Slider::new`].
    fn attach(&mut self) {}

    /// Release what [`Surface::attach`] acquired. With `restore_markup` the
    /// surface also puts its panels back the way it found them.
    fn detach(&mut self, _restore_markup: bool) {}
}
