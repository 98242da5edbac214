//! Configuration for the slide controller.

use crate::animator::SettleEasing;
use crate::mode::RevealMode;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default touch slop in logical pixels.
pub const DEFAULT_TOUCH_SLOP: f64 = 8.0;

/// Default settle speed: one millisecond per pixel of travel.
pub const DEFAULT_SETTLE_MILLIS_PER_UNIT: f64 = 1.0;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Tunable behavior of a slide list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideConfig {
    /// Which menus may be revealed.
    pub mode: RevealMode,
    /// Minimum displacement before a gesture counts as a drag.
    pub touch_slop: f64,
    /// Settle duration per unit of travel, in milliseconds.
    pub settle_millis_per_unit: f64,
    /// Interpolation curve for settle animations.
    pub easing: SettleEasing,
    /// When true, any touch while an item is open only closes it.
    /// When false, the open item itself can be dragged again.
    pub tap_closes_open_item: bool,
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            mode: RevealMode::default(),
            touch_slop: DEFAULT_TOUCH_SLOP,
            settle_millis_per_unit: DEFAULT_SETTLE_MILLIS_PER_UNIT,
            easing: SettleEasing::default(),
            tap_closes_open_item: true,
        }
    }
}

impl SlideConfig {
    /// Create a config with defaults and the given mode.
    pub fn with_mode(mode: RevealMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: SlideConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the state machine cannot work with.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.touch_slop.is_finite() || self.touch_slop < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "touch_slop must be a non-negative number, got {}",
                self.touch_slop
            )));
        }
        if !self.settle_millis_per_unit.is_finite() || self.settle_millis_per_unit <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "settle_millis_per_unit must be positive, got {}",
                self.settle_millis_per_unit
            )));
        }
        Ok(())
    }
}
