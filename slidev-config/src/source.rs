//! Where a loaded configuration came from.

use std::fmt;
use std::path::PathBuf;

/// Source that produced the slider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// Nothing was found; built-in defaults.
    #[default]
    Default,
    /// Path passed to the loader directly (e.g. `--config`).
    Explicit(PathBuf),
    /// `$SLIDEV_CONFIG_PATH`.
    EnvPath(PathBuf),
    /// `$SLIDEV_CONFIG_JSON`.
    EnvInline,
    /// A default file found in the search root.
    File(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Default => f.write_str("built-in defaults"),
            ConfigSource::Explicit(path) => write!(f, "{}", path.display()),
            ConfigSource::EnvPath(path) => {
                write!(f, "{} (SLIDEV_CONFIG_PATH)", path.display())
            }
            ConfigSource::EnvInline => f.write_str("SLIDEV_CONFIG_JSON"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
