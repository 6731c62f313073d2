use crate::error::ConfigError;
use crate::render::DisplayPreferences;
use crate::skill::SkillCatalog;
use serde::{Deserialize, Serialize};
use std::fs;

/// Editor configuration, matching the expected JSON format.
///
/// Every field is optional in the JSON; missing fields take their defaults.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct EditorConfig {
    pub preferences: DisplayPreferences,
    /// Replaces the built-in skill catalog when present.
    pub catalog: Option<SkillCatalog>,
}

impl EditorConfig {
    /// Load a configuration from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// The catalog a session built from this config will use.
    pub fn catalog(&self) -> SkillCatalog {
        self.catalog.clone().unwrap_or_default()
    }
}
