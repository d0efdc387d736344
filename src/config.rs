//! Label input options
//!
//! Options can be built in code or loaded from YAML
//! (`~/.config/label-input/config.yaml` for the scenario runner).

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Message shown when any token fails validation
pub const DEFAULT_ERROR_MESSAGE: &str = "Invalid input value";

/// Widget options (everything except callbacks and the validator)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelInputConfig {
    /// Shared validation error message
    #[serde(default = "default_error_message")]
    pub error_message: String,
    /// When true, Space does not commit and spaces are stripped from tokens
    #[serde(default)]
    pub disable_spacing: bool,
    /// Styling hook passed through to the host
    #[serde(default)]
    pub class_name: Option<String>,
}

fn default_error_message() -> String {
    DEFAULT_ERROR_MESSAGE.to_string()
}

impl Default for LabelInputConfig {
    fn default() -> Self {
        Self {
            error_message: default_error_message(),
            disable_spacing: false,
            class_name: None,
        }
    }
}

/// Errors from loading a config file
#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl LabelInputConfig {
    /// Load from the user config file, or return defaults if missing/invalid
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load from a specific YAML file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LabelInputConfig::default();
        assert_eq!(config.error_message, "Invalid input value");
        assert!(!config.disable_spacing);
        assert_eq!(config.class_name, None);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = LabelInputConfig::from_yaml("disable_spacing: true\n").unwrap();
        assert!(config.disable_spacing);
        assert_eq!(config.error_message, DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = "error_message: Bad tag\ndisable_spacing: false\nclass_name: tags\n";
        let config = LabelInputConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.error_message, "Bad tag");
        assert_eq!(config.class_name.as_deref(), Some("tags"));
    }

    #[test]
    fn test_invalid_yaml() {
        let err = LabelInputConfig::from_yaml("disable_spacing: [nope").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
