use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};
use crate::interaction::{KeyBindings, NavigationTuning};

use super::TimelineStyle;

/// Bootstrap configuration for a timeline run.
///
/// Every field has a default, so a JSON file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    pub window_title: String,
    pub window_width: i32,
    pub window_height: i32,
    pub style: TimelineStyle,
    pub navigation: NavigationTuning,
    pub key_bindings: KeyBindings,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            window_title: "Photo Timeline".to_owned(),
            window_width: 400,
            window_height: 600,
            style: TimelineStyle::default(),
            navigation: NavigationTuning::default(),
            key_bindings: KeyBindings::default(),
        }
    }
}

impl TimelineConfig {
    pub fn validate(&self) -> TimelineResult<()> {
        if self.window_width <= 0 || self.window_height <= 0 {
            return Err(TimelineError::InvalidData(format!(
                "window size must be > 0, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        self.style.validate()?;
        self.navigation.validate()?;
        self.key_bindings.validate()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TimelineError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| TimelineError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> TimelineResult<Self> {
        let raw = fs::read_to_string(path).map_err(|source| TimelineError::Io {
            context: format!("failed to read config `{}`", path.display()),
            source,
        })?;
        Self::from_json_str(&raw)
    }
}
