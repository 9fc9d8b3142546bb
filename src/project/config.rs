//! YAML run configuration.

use std::path::Path;

use serde::Deserialize;

use super::input::EndPoints;
use crate::error::{ParaphraseError, Result};
use crate::interchange::NodeStyle;

const BUNDLED_CONFIG: &str = include_str!("../../config/default.yaml");

/// Run configuration.
///
/// Keys are upper snake case (`START_TOKEN`, `CHARACTER_WIDTH`, ...).
/// Unknown keys are ignored.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Config {
    pub start_token: String,
    pub end_token: String,
    pub color_general: String,
    pub color_start: String,
    pub color_end: String,
    pub character_width: f64,
}

impl Config {
    /// The configuration shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_yaml(BUNDLED_CONFIG)
    }

    /// Load and validate a configuration file.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ParaphraseError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Parse and validate configuration text.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(text)
            .map_err(|e| ParaphraseError::config(format!("YAML parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("START_TOKEN", &self.start_token),
            ("END_TOKEN", &self.end_token),
            ("COLOR_GENERAL", &self.color_general),
            ("COLOR_START", &self.color_start),
            ("COLOR_END", &self.color_end),
        ] {
            if value.trim().is_empty() {
                return Err(ParaphraseError::config(format!("{key} must not be empty")));
            }
        }
        // Whitespace would split the marker into several words.
        for (key, value) in [("START_TOKEN", &self.start_token), ("END_TOKEN", &self.end_token)] {
            if value.split_whitespace().nth(1).is_some() {
                return Err(ParaphraseError::config(format!(
                    "{key} must be a single word, got '{value}'"
                )));
            }
        }
        if !self.character_width.is_finite() || self.character_width < 0.0 {
            return Err(ParaphraseError::config(format!(
                "CHARACTER_WIDTH must be a non-negative number, got {}",
                self.character_width
            )));
        }
        Ok(())
    }

    pub fn node_style(&self) -> NodeStyle {
        NodeStyle {
            color_general: self.color_general.clone(),
            color_start: self.color_start.clone(),
            color_end: self.color_end.clone(),
            character_width: self.character_width,
        }
    }

    pub fn end_points(&self) -> EndPoints {
        EndPoints {
            start: self.start_token.as_str().into(),
            end: self.end_token.as_str().into(),
        }
    }
}
