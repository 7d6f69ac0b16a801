//! Resolves a [`SliderConfig`] from files and the environment.

pub mod env;
pub mod error;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use slidev_core::SliderConfig;
use tracing::{debug, info};

use crate::source::ConfigSource;
use crate::validation::{ConfigWarnings, apply_guard_rails};
use env::{CONFIG_JSON_VAR, CONFIG_PATH_VAR, EnvSnapshot};
use error::ConfigLoadError;

const DEFAULT_FILES: &[&str] = &[
    "slidev.toml",
    "slidev.json",
    "config/slidev.toml",
    "config/slidev.json",
];

/// Inputs of a [`ConfigLoader`].
#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    /// Highest-priority file, e.g. from a `--config` flag.
    pub config_path: Option<PathBuf>,
    /// Directory the default files are looked up in; the working directory
    /// when unset.
    pub search_root: Option<PathBuf>,
    /// Environment to consult; the process environment when unset.
    pub env: Option<EnvSnapshot>,
}

/// Fully resolved configuration.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    /// The configuration, overrides applied.
    pub config: SliderConfig,
    /// Where the base document came from.
    pub source: ConfigSource,
    /// Guard-rail findings.
    pub warnings: ConfigWarnings,
}

/// Builder that locates, parses and checks a slider configuration.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

impl ConfigLoader {
    /// Loader reading the process environment and working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loader with every input given up front.
    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    /// Load this file ahead of every other source.
    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    /// Look for default files under `root`.
    pub fn with_search_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.options.search_root = Some(root.into());
        self
    }

    /// Consult `env` instead of the process environment.
    pub fn with_env(mut self, env: EnvSnapshot) -> Self {
        self.options.env = Some(env);
        self
    }

    /// Resolve the configuration.
    ///
    /// Evaluation order:
    /// 1) the explicit `config_path`,
    /// 2) `$SLIDEV_CONFIG_PATH` (TOML or JSON file),
    /// 3) `$SLIDEV_CONFIG_JSON` (inline JSON),
    /// 4) the first default file present in the search root,
    /// 5) built-in defaults.
    ///
    /// Per-field `SLIDEV_*` overrides are applied on top, then the guard
    /// rails run.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env = self.options.env.clone().unwrap_or_else(EnvSnapshot::gather);

        let (mut config, source) = self.load_base(&env)?;
        debug!(%source, "slider config source");

        let applied = env.apply_overrides(&mut config)?;
        if !applied.is_empty() {
            debug!(?applied, "environment overrides applied");
        }

        let warnings = apply_guard_rails(&config)?;
        info!(
            %source,
            frames_visible = config.frames_visible,
            step = config.step,
            looping = config.looping,
            draggable = config.draggable,
            "slider configuration loaded"
        );
        Ok(ConfigLoad {
            config,
            source,
            warnings,
        })
    }

    fn load_base(
        &self,
        env: &EnvSnapshot,
    ) -> Result<(SliderConfig, ConfigSource), ConfigLoadError> {
        if let Some(path) = &self.options.config_path {
            let config = load_from_file(path)?;
            return Ok((config, ConfigSource::Explicit(path.clone())));
        }

        if let Some(raw) = env.get(CONFIG_PATH_VAR) {
            let path = PathBuf::from(raw);
            let config = load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = env.get(CONFIG_JSON_VAR) {
            let config = parse_json(raw)
                .map_err(|err| ConfigLoadError::Parse(err.context("failed to parse SLIDEV_CONFIG_JSON")))?;
            return Ok((config, ConfigSource::EnvInline));
        }

        if let Some(path) = self.find_default_file() {
            let config = load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((SliderConfig::default(), ConfigSource::Default))
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        let root = self
            .options
            .search_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        DEFAULT_FILES
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.exists())
    }
}

/// Read a TOML or JSON file, picking the format from the extension.
pub fn load_from_file(path: &Path) -> Result<SliderConfig, ConfigLoadError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&contents),
        Some("toml") | Some("tml") => toml::from_str(&contents)
            .map_err(|err| anyhow!("invalid slider config {}: {}", path.display(), err)),
        _ => parse_from_str(&contents, &path.display().to_string()),
    };
    parsed.map_err(ConfigLoadError::Parse)
}

/// Parse either format, trying TOML first.
pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<SliderConfig> {
    toml::from_str(contents).or_else(|toml_err| {
        serde_json::from_str(contents).map_err(|json_err| {
            anyhow!(
                "failed to parse slider config {}: toml error: {}; json error: {}",
                origin,
                toml_err,
                json_err
            )
        })
    })
}

/// Parse an inline JSON document.
pub fn parse_json(raw: &str) -> anyhow::Result<SliderConfig> {
    serde_json::from_str(raw).map_err(|err| anyhow!("invalid slider config json: {err}"))
}
