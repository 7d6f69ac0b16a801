//! Operation values and the option types of the public API.

use std::fmt;
use std::time::Duration;

use crate::controller::Slider;
use crate::surface::Surface;

/// Completion callback. Receives the slider, so follow-up calls made from
/// inside it run before anything that was queued earlier, and the panel the
/// operation produced (`remove` only).
pub type Callback<S> =
    Box<dyn FnOnce(&mut Slider<S>, Option<<S as Surface>::Panel>)>;

/// Options for `next` / `prev`.
pub struct NavOptions<S: Surface> {
    /// Slides to move; `None` uses the configured step.
    pub step: Option<usize>,
    /// Animate the move; `false` jumps.
    pub animated: bool,
    /// Runs once the move settled.
    pub callback: Option<Callback<S>>,
}

impl<S: Surface> Default for NavOptions<S> {
    fn default() -> Self {
        Self {
            step: None,
            animated: true,
            callback: None,
        }
    }
}

impl<S: Surface> NavOptions<S> {
    /// Animated move by the configured step.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move by `step` slides instead of the configured step.
    pub fn step(mut self, step: usize) -> Self {
        self.step = Some(step);
        self
    }

    /// Jump without a transition; completes synchronously.
    pub fn instant(mut self) -> Self {
        self.animated = false;
        self
    }

    /// Run `callback` once the move settled.
    pub fn then<F>(mut self, callback: F) -> Self
    where
        F: FnOnce(&mut Slider<S>, Option<S::Panel>) + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }
}

impl<S: Surface> fmt::Debug for NavOptions<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavOptions")
            .field("step", &self.step)
            .field("animated", &self.animated)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

/// Options for `go_to`.
pub struct MoveOptions<S: Surface> {
    /// Animate the move; `false` jumps.
    pub animated: bool,
    /// Runs once the move settled.
    pub callback: Option<Callback<S>>,
}

impl<S: Surface> Default for MoveOptions<S> {
    fn default() -> Self {
        Self {
            animated: true,
            callback: None,
        }
    }
}

impl<S: Surface> MoveOptions<S> {
    /// Animated move without a callback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump without a transition; completes synchronously.
    pub fn instant(mut self) -> Self {
        self.animated = false;
        self
    }

    /// Run `callback` once the move settled.
    pub fn then<F>(mut self, callback: F) -> Self
    where
        F: FnOnce(&mut Slider<S>, Option<S::Panel>) + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }
}

impl<S: Surface> fmt::Debug for MoveOptions<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoveOptions")
            .field("animated", &self.animated)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

/// Completion callback for structural operations (`append`, `prepend`,
/// `insert`, `remove`).
pub struct Done<S: Surface> {
    /// Runs once the operation executed.
    pub callback: Option<Callback<S>>,
}

impl<S: Surface> Default for Done<S> {
    fn default() -> Self {
        Self { callback: None }
    }
}

impl<S: Surface> Done<S> {
    /// No callback.
    pub fn none() -> Self {
        Self::default()
    }

    /// Run `callback` once the operation executed. `remove` passes it the
    /// removed panel.
    pub fn then<F>(callback: F) -> Self
    where
        F: FnOnce(&mut Slider<S>, Option<S::Panel>) + 'static,
    {
        Self {
            callback: Some(Box::new(callback)),
        }
    }
}

impl<S: Surface> fmt::Debug for Done<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Done")
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

/// Options for `destroy`.
pub struct DestroyOptions<S: Surface> {
    /// Ask the surface to put its panels back the way it found them.
    pub restore_markup: bool,
    /// Runs after teardown.
    pub callback: Option<Callback<S>>,
}

impl<S: Surface> Default for DestroyOptions<S> {
    fn default() -> Self {
        Self {
            restore_markup: false,
            callback: None,
        }
    }
}

impl<S: Surface> DestroyOptions<S> {
    /// Tear down and leave the markup as it is.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the surface to restore its original markup on teardown.
    pub fn restore_markup(mut self) -> Self {
        self.restore_markup = true;
        self
    }

    /// Run `callback` after teardown.
    pub fn then<F>(mut self, callback: F) -> Self
    where
        F: FnOnce(&mut Slider<S>, Option<S::Panel>) + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }
}

impl<S: Surface> fmt::Debug for DestroyOptions<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DestroyOptions")
            .field("restore_markup", &self.restore_markup)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

/// Where a structural insert puts its panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InsertAt {
    Head,
    Tail,
    Before(usize),
}

/// Structural half of a loop relocation pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Relocation {
    HeadToTail,
    TailToHead,
}

/// A queued intent to mutate position or structure. Consumed exactly once.
pub(crate) enum Operation<S: Surface> {
    Step {
        step: isize,
        animated: bool,
        /// Overrides the configured transition length (drag release).
        duration: Option<Duration>,
        callback: Option<Callback<S>>,
    },
    GoTo {
        index: usize,
        animated: bool,
        callback: Option<Callback<S>>,
    },
    Insert {
        panel: S::Panel,
        at: InsertAt,
        callback: Option<Callback<S>>,
    },
    Remove {
        index: usize,
        callback: Option<Callback<S>>,
    },
    Relocate(Relocation),
    /// Final operation of a relocation burst.
    RestoreLoop,
    Destroy {
        restore_markup: bool,
        callback: Option<Callback<S>>,
    },
}

impl<S: Surface> Operation<S> {
    /// Instant single-slide step used inside a relocation burst.
    pub(crate) fn compensate(step: isize) -> Self {
        Operation::Step {
            step,
            animated: false,
            duration: None,
            callback: None,
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Operation::Step { .. } => "step",
            Operation::GoTo { .. } => "go_to",
            Operation::Insert { .. } => "insert",
            Operation::Remove { .. } => "remove",
            Operation::Relocate(_) => "relocate",
            Operation::RestoreLoop => "restore_loop",
            Operation::Destroy { .. } => "destroy",
        }
    }
}

impl<S: Surface> fmt::Debug for Operation<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Step {
                step,
                animated,
                duration,
                callback,
            } => f
                .debug_struct("Step")
                .field("step", step)
                .field("animated", animated)
                .field("duration", duration)
                .field("callback", &callback.is_some())
                .finish(),
            Operation::GoTo {
                index,
                animated,
                callback,
            } => f
                .debug_struct("GoTo")
                .field("index", index)
                .field("animated", animated)
                .field("callback", &callback.is_some())
                .finish(),
            Operation::Insert { at, callback, .. } => f
                .debug_struct("Insert")
                .field("at", at)
                .field("callback", &callback.is_some())
                .finish(),
            Operation::Remove { index, callback } => f
                .debug_struct("Remove")
                .field("index", index)
                .field("callback", &callback.is_some())
                .finish(),
            Operation::Relocate(relocation) => {
                f.debug_tuple("Relocate").field(relocation).finish()
            }
            Operation::RestoreLoop => f.write_str("RestoreLoop"),
            Operation::Destroy {
                restore_markup,
                callback,
            } => f
                .debug_struct("Destroy")
                .field("restore_markup", restore_markup)
                .field("callback", &callback.is_some())
                .finish(),
        }
    }
}
