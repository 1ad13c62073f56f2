//! Application configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult, EngineLimits};

/// Front-end settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Title drawn on the calculator frame
    pub title: String,
    /// Show the key help line under the keypad
    pub show_help: bool,
    /// Capture mouse clicks on keypad buttons
    pub mouse: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: "Calculator".to_string(),
            show_help: true,
            mouse: true,
        }
    }
}

/// Top-level configuration, usually read from a YAML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Engine length and precision limits
    pub engine: EngineLimits,
    /// Front-end settings
    pub ui: UiConfig,
}

impl AppConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates configuration from YAML text
    pub fn from_yaml_str(yaml: &str) -> CalcResult<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)
            .map_err(|e| CalcError::config(format!("invalid YAML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| CalcError::config(format!("cannot read {}: {e}", path.display())))?;
        let config = Self::from_yaml_str(&text)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Serializes the configuration back to YAML
    pub fn to_yaml(&self) -> CalcResult<String> {
        serde_yaml_ng::to_string(self).map_err(|e| CalcError::config(e.to_string()))
    }

    /// Checks the engine limits
    pub fn validate(&self) -> CalcResult<()> {
        self.engine.validate()
    }

    /// Set engine limits
    #[must_use]
    pub fn with_engine(mut self, engine: EngineLimits) -> Self {
        self.engine = engine;
        self
    }

    /// Set UI settings
    #[must_use]
    pub fn with_ui(mut self, ui: UiConfig) -> Self {
        self.ui = ui;
        self
    }
}
