//! Configuration loading for slidev sliders.
//!
//! Resolves a [`SliderConfig`] from an explicit path, the environment
//! (`SLIDEV_CONFIG_PATH`, `SLIDEV_CONFIG_JSON`), a default file in the
//! working directory or built-in defaults, applies per-field environment
//! overrides and runs the guard rails before anything reaches
//! [`slidev_core::Slider::new`].

pub mod loader;
pub mod source;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, ConfigLoaderOptions, error::ConfigLoadError};
pub use slidev_core::SliderConfig;
pub use source::ConfigSource;
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings, apply_guard_rails};
