//! Loader errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ConfigGuardRailError;

/// Why a configuration could not be loaded.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// A config file exists but could not be read.
    #[error("failed to read slider config from {path}")]
    Read {
        /// File that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The document is neither valid TOML nor valid JSON.
    #[error("failed to parse slider configuration: {0}")]
    Parse(#[source] anyhow::Error),
    /// A per-field override variable holds an unusable value.
    #[error("invalid value '{value}' for {var}")]
    InvalidOverride {
        /// Variable name.
        var: &'static str,
        /// Raw value.
        value: String,
    },
    /// The resolved configuration failed the guard rails.
    #[error(transparent)]
    GuardRail(#[from] ConfigGuardRailError),
}
