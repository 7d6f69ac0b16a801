//! Position and operation controller for sliding-window carousels.
//!
//! A [`Slider`] shows a contiguous window of `frames_visible` panels over an
//! ordered strip of panels. Every mutating call (navigation, insertion,
//! removal, teardown) is turned into an operation value and executed strictly
//! one at a time, even though most of them finish asynchronously when the
//! rendering [`Surface`] reports that its transition completed.
//!
//! The crate owns the algorithms only: step clamping, the infinite-loop panel
//! relocation, the drag-to-navigate state machine and the proportional resize
//! correction. Rendering, pointer delivery and transition timing belong to the
//! host, which implements [`Surface`] and forwards notifications.
//! [`VirtualStrip`] is an in-memory surface used by tests and the simulator.

pub mod animator;
pub mod config;
pub mod controller;
pub mod drag;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod operation;
pub mod queue;
pub mod resize;
pub mod strip;
pub mod surface;

pub use config::{SliderConfig, TimingFunction};
pub use controller::{Hooks, Slider, SliderState};
pub use drag::{DropOutcome, PointerPosition, SlideClick};
pub use error::{ConfigurationError, OperationWarning, Result, SliderError, SurfaceError};
pub use frame::FrameState;
pub use operation::{Callback, DestroyOptions, Done, MoveOptions, NavOptions};
pub use strip::VirtualStrip;
pub use surface::{Surface, Transition};
