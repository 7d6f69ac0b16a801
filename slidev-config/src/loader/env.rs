//! Environment snapshot consulted by the loader.

use std::collections::BTreeMap;
use std::str::FromStr;

use slidev_core::{SliderConfig, TimingFunction};

use super::error::ConfigLoadError;
use crate::util::{non_empty, parse_bool};

/// Path of a TOML or JSON config file.
pub const CONFIG_PATH_VAR: &str = "SLIDEV_CONFIG_PATH";
/// Inline JSON config document.
pub const CONFIG_JSON_VAR: &str = "SLIDEV_CONFIG_JSON";

/// Overrides [`SliderConfig::frames_visible`].
pub const FRAMES_VISIBLE_VAR: &str = "SLIDEV_FRAMES_VISIBLE";
/// Overrides [`SliderConfig::step`].
pub const STEP_VAR: &str = "SLIDEV_STEP";
/// Overrides [`SliderConfig::transition_duration_ms`].
pub const TRANSITION_MS_VAR: &str = "SLIDEV_TRANSITION_MS";
/// Overrides [`SliderConfig::transition_timing`].
pub const TRANSITION_TIMING_VAR: &str = "SLIDEV_TRANSITION_TIMING";
/// Overrides [`SliderConfig::looping`].
pub const LOOP_VAR: &str = "SLIDEV_LOOP";
/// Overrides [`SliderConfig::draggable`].
pub const DRAGGABLE_VAR: &str = "SLIDEV_DRAGGABLE";
/// Overrides [`SliderConfig::drag_threshold`].
pub const DRAG_THRESHOLD_VAR: &str = "SLIDEV_DRAG_THRESHOLD";

const KNOWN_VARS: &[&str] = &[
    CONFIG_PATH_VAR,
    CONFIG_JSON_VAR,
    FRAMES_VISIBLE_VAR,
    STEP_VAR,
    TRANSITION_MS_VAR,
    TRANSITION_TIMING_VAR,
    LOOP_VAR,
    DRAGGABLE_VAR,
    DRAG_THRESHOLD_VAR,
];

/// The `SLIDEV_*` variables visible to the loader.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
    /// Read the known variables from the process environment.
    pub fn gather() -> Self {
        let vars = KNOWN_VARS
            .iter()
            .filter_map(|name| {
                std::env::var(name).ok().map(|value| (name.to_string(), value))
            })
            .collect();
        Self { vars }
    }

    /// Snapshot built from explicit pairs, for tests and embedding.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Trimmed value of `name`, `None` when unset or blank.
    pub fn get(&self, name: &str) -> Option<&str> {
        non_empty(self.vars.get(name).map(String::as_str))
    }

    /// Apply the per-field overrides on top of `config`. Returns the names
    /// of the variables that were applied.
    pub fn apply_overrides(
        &self,
        config: &mut SliderConfig,
    ) -> Result<Vec<&'static str>, ConfigLoadError> {
        let mut applied = Vec::new();

        if let Some(value) = self.parsed::<usize>(FRAMES_VISIBLE_VAR)? {
            config.frames_visible = value;
            applied.push(FRAMES_VISIBLE_VAR);
        }
        if let Some(value) = self.parsed::<usize>(STEP_VAR)? {
            config.step = value;
            applied.push(STEP_VAR);
        }
        if let Some(value) = self.parsed::<u64>(TRANSITION_MS_VAR)? {
            config.transition_duration_ms = value;
            applied.push(TRANSITION_MS_VAR);
        }
        if let Some(raw) = self.get(TRANSITION_TIMING_VAR) {
            config.transition_timing = parse_timing(raw).ok_or_else(|| {
                ConfigLoadError::InvalidOverride {
                    var: TRANSITION_TIMING_VAR,
                    value: raw.to_string(),
                }
            })?;
            applied.push(TRANSITION_TIMING_VAR);
        }
        if let Some(value) = self.flag(LOOP_VAR)? {
            config.looping = value;
            applied.push(LOOP_VAR);
        }
        if let Some(value) = self.flag(DRAGGABLE_VAR)? {
            config.draggable = value;
            applied.push(DRAGGABLE_VAR);
        }
        if let Some(value) = self.parsed::<f32>(DRAG_THRESHOLD_VAR)? {
            config.drag_threshold = value;
            applied.push(DRAG_THRESHOLD_VAR);
        }

        Ok(applied)
    }

    fn parsed<T: FromStr>(&self, var: &'static str) -> Result<Option<T>, ConfigLoadError> {
        self.get(var)
            .map(|raw| {
                raw.parse::<T>().map_err(|_| ConfigLoadError::InvalidOverride {
                    var,
                    value: raw.to_string(),
                })
            })
            .transpose()
    }

    fn flag(&self, var: &'static str) -> Result<Option<bool>, ConfigLoadError> {
        self.get(var)
            .map(|raw| {
                parse_bool(raw).ok_or_else(|| ConfigLoadError::InvalidOverride {
                    var,
                    value: raw.to_string(),
                })
            })
            .transpose()
    }
}

fn parse_timing(raw: &str) -> Option<TimingFunction> {
    serde_json::from_value(serde_json::Value::String(raw.to_ascii_lowercase())).ok()
}
