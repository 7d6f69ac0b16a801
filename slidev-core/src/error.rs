//! Error and warning types.

use thiserror::Error;

/// Fatal errors. Only construction can fail; once a [`crate::Slider`] exists
/// every later problem is reported as an [`OperationWarning`] instead.
#[derive(Error, Debug)]
pub enum SliderError {
    /// The configuration or the panels it was checked against are unusable.
    #[error("invalid slider configuration: {0}")]
    Configuration(#[from] ConfigurationError),
}

/// Malformed configuration or container structure detected at construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// `frames_visible` is 0.
    #[error("frames_visible must be at least 1")]
    NoVisibleFrames,

    /// `step` is 0.
    #[error("step must be at least 1")]
    ZeroStep,

    /// `drag_threshold` is outside `0..=1` or not finite.
    #[error("drag_threshold must be within 0..=1, got {0}")]
    DragThresholdOutOfRange(f32),

    /// `edge_damping` is outside `0..=1` or not finite.
    #[error("edge_damping must be within 0..=1, got {0}")]
    EdgeDampingOutOfRange(f32),

    /// The surface holds no panels at all.
    #[error("container has no panels")]
    EmptyContainer,

    #[error(
        "container has {panels} panels but {frames_visible} must be visible at once"
    )]
    /// Fewer panels than fit in the frame.
    NotEnoughPanels {
        /// Panels the surface holds.
        panels: usize,
        /// Panels the frame shows at once.
        frames_visible: usize,
    },

    /// The surface measured a zero, negative or NaN panel width.
    #[error("surface reported a non-positive panel width ({0})")]
    InvalidPanelWidth(f32),
}

/// Errors reported by a [`crate::Surface`] implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The host refused to insert a panel.
    #[error("panel could not be inserted at index {index}")]
    InsertRejected {
        /// Index the panel was meant to occupy.
        index: usize,
    },

    /// The host had no panel to hand back.
    #[error("no panel at index {index}")]
    MissingPanel {
        /// Index that was asked for.
        index: usize,
    },

    /// Listeners were already detached.
    #[error("surface is detached")]
    Detached,
}

/// Non-fatal operation failures. These are logged and the operation resolves
/// as a no-op: its callback still runs and the queue keeps draining.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperationWarning {
    /// An insert or remove named an index outside the strip.
    #[error("{action}: index {index} does not exist (panels: {panels})")]
    InvalidIndex {
        /// Operation that was refused.
        action: &'static str,
        /// Requested index.
        index: usize,
        /// Panels in the strip at the time.
        panels: usize,
    },

    /// A removal would leave a partly empty frame.
    #[error(
        "remove: refusing to drop below {frames_visible} panels (panels: {panels})"
    )]
    InsufficientPanels {
        /// Panels in the strip at the time.
        panels: usize,
        /// Panels the frame shows at once.
        frames_visible: usize,
    },

    /// The surface refused a structural change.
    #[error("{action}: {source}")]
    Surface {
        /// Operation that was refused.
        action: &'static str,
        /// What the surface reported.
        #[source]
        source: SurfaceError,
    },
}

/// Result of constructing a slider.
pub type Result<T> = std::result::Result<T, SliderError>;
