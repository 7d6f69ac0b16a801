//! Slider configuration
//!
//! Every field has a default so partial TOML/JSON documents deserialize
//! cleanly; `slidev-config` layers file, inline and environment sources on
//! top of these defaults.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Default number of panels in frame.
pub const DEFAULT_FRAMES_VISIBLE: usize = 1;
/// Default navigation step, also the relocation batch size.
pub const DEFAULT_STEP: usize = 1;
/// Default transition length for animated steps (ms).
pub const DEFAULT_TRANSITION_MS: u64 = 1000;
/// Default fraction of the container a drag must cover to commit.
pub const DEFAULT_DRAG_THRESHOLD: f32 = 0.2;
/// Default multiplier applied to the pointer displacement past either end.
pub const DEFAULT_EDGE_DAMPING: f32 = 0.1;

/// Timing function handed to the surface with every animated command.
///
/// The controller never interprets it; [`crate::VirtualStrip`] maps it onto
/// a tween curve so simulated runs look plausible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimingFunction {
    /// Constant speed.
    Linear,
    /// CSS `ease`.
    #[default]
    Ease,
    /// Starts slow.
    EaseIn,
    /// Ends slow.
    EaseOut,
    /// Slow at both ends.
    EaseInOut,
}

impl TimingFunction {
    /// Map linear progress `t` (clamped to 0..=1) onto the curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TimingFunction::Linear => t,
            TimingFunction::EaseIn => t * t,
            TimingFunction::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            TimingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
            // Smoothstep is close enough to cubic-bezier(.25,.1,.25,1)
            TimingFunction::Ease => t * t * (3.0 - 2.0 * t),
        }
    }

    /// CSS keyword for hosts that render through a stylesheet.
    pub fn as_css(self) -> &'static str {
        match self {
            TimingFunction::Linear => "linear",
            TimingFunction::Ease => "ease",
            TimingFunction::EaseIn => "ease-in",
            TimingFunction::EaseOut => "ease-out",
            TimingFunction::EaseInOut => "ease-in-out",
        }
    }
}

impl fmt::Display for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Static configuration for a slider instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Panels shown at once.
    pub frames_visible: usize,
    /// Default move size for `next`/`prev`; also the relocation batch size
    /// when looping.
    pub step: usize,
    /// Length of an animated step (ms).
    pub transition_duration_ms: u64,
    /// Curve handed to the surface with each animated command.
    pub transition_timing: TimingFunction,
    /// Keep panels flowing from one end to the other so navigation never
    /// hits an edge.
    #[serde(rename = "loop", alias = "looping")]
    pub looping: bool,
    /// Whether pointer drags move the strip. Clicks are reported either way.
    pub draggable: bool,
    /// Fraction (0..=1) of the container width a drag must cover before
    /// release commits a navigation.
    pub drag_threshold: f32,
    /// Multiplier applied to pointer displacement when dragging past either
    /// end of the strip.
    pub edge_damping: f32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            frames_visible: DEFAULT_FRAMES_VISIBLE,
            step: DEFAULT_STEP,
            transition_duration_ms: DEFAULT_TRANSITION_MS,
            transition_timing: TimingFunction::default(),
            looping: false,
            draggable: false,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            edge_damping: DEFAULT_EDGE_DAMPING,
        }
    }
}

impl SliderConfig {
    /// [`SliderConfig::transition_duration_ms`] as a [`Duration`].
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_duration_ms)
    }

    /// Check the values that do not depend on the container.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.frames_visible == 0 {
            return Err(ConfigurationError::NoVisibleFrames);
        }
        if self.step == 0 {
            return Err(ConfigurationError::ZeroStep);
        }
        if !(0.0..=1.0).contains(&self.drag_threshold) {
            return Err(ConfigurationError::DragThresholdOutOfRange(
                self.drag_threshold,
            ));
        }
        if !(0.0..=1.0).contains(&self.edge_damping) {
            return Err(ConfigurationError::EdgeDampingOutOfRange(
                self.edge_damping,
            ));
        }
        Ok(())
    }

    /// Check the configuration against the container it will drive.
    pub fn validate_for(
        &self,
        panels: usize,
        panel_width: f32,
    ) -> Result<(), ConfigurationError> {
        self.validate()?;
        if panels == 0 {
            return Err(ConfigurationError::EmptyContainer);
        }
        if panels < self.frames_visible {
            return Err(ConfigurationError::NotEnoughPanels {
                panels,
                frames_visible: self.frames_visible,
            });
        }
        if panel_width.is_nan() || panel_width <= 0.0 {
            return Err(ConfigurationError::InvalidPanelWidth(panel_width));
        }
        Ok(())
    }
}
