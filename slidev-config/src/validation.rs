//! Guard rails run on every loaded configuration.

use slidev_core::{ConfigurationError, SliderConfig};
use thiserror::Error;

/// Transitions longer than this make drag releases feel unresponsive.
const SLOW_TRANSITION_MS: u64 = 5_000;

/// A configuration no slider would accept.
#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    /// Rejected by [`SliderConfig::validate`].
    #[error("slider configuration rejected: {0}")]
    Invalid(#[from] ConfigurationError),
    /// `drag_threshold` is NaN or infinite.
    #[error("drag_threshold must be a finite number")]
    NonFiniteThreshold,
}

/// A legal but questionable setting.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// What looks wrong.
    pub message: String,
    /// How to fix it, when there is an obvious fix.
    pub hint: Option<String>,
}

/// Warnings collected while loading.
#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    /// Warnings in the order they were raised.
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    /// Record a warning without a hint.
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    /// Record a warning with a hint.
    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    /// Whether nothing was flagged.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of warnings.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Reject configurations a slider would refuse and flag questionable ones.
pub fn apply_guard_rails(
    config: &SliderConfig,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    if !config.drag_threshold.is_finite() {
        return Err(ConfigGuardRailError::NonFiniteThreshold);
    }
    config.validate()?;

    let mut warnings = ConfigWarnings::default();

    if config.step > config.frames_visible {
        warnings.push_with_hint(
            format!(
                "step ({}) is larger than frames_visible ({}); some panels are skipped over",
                config.step, config.frames_visible
            ),
            "Lower step to frames_visible or below to show every panel",
        );
    }

    if config.draggable {
        if config.drag_threshold == 0.0 {
            warnings.push_with_hint(
                "drag_threshold is 0; any horizontal drag commits a navigation",
                "A threshold around 0.2 keeps short drags from changing slides",
            );
        }
        if config.transition_duration_ms > SLOW_TRANSITION_MS {
            warnings.push(format!(
                "transition_duration of {}ms blocks drags until each step settles",
                config.transition_duration_ms
            ));
        }
    }

    if config.transition_duration_ms == 0 {
        warnings.push(
            "transition_duration is 0; animated moves jump without a transition",
        );
    }

    if config.looping && config.step == 1 && config.frames_visible == 1 {
        warnings.push_with_hint(
            "loop with a single visible panel relocates one panel per move",
            "Provide at least three panels so one stays buffered on each side",
        );
    }

    Ok(warnings)
}
