//! Config tests - YAML loading and defaults

use std::io::Write;

use label_input::config::{ConfigError, LabelInputConfig, DEFAULT_ERROR_MESSAGE};
use tempfile::NamedTempFile;

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "disable_spacing: true").unwrap();
    writeln!(file, "class_name: tags").unwrap();

    let config = LabelInputConfig::load_from(file.path()).unwrap();
    assert!(config.disable_spacing);
    assert_eq!(config.class_name.as_deref(), Some("tags"));
    assert_eq!(config.error_message, DEFAULT_ERROR_MESSAGE);
}

#[test]
fn test_load_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = LabelInputConfig::load_from(&dir.path().join("config.yaml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_load_from_malformed_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "error_message: [unclosed").unwrap();

    let result = LabelInputConfig::load_from(file.path());
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_round_trips_through_yaml() {
    let config = LabelInputConfig {
        error_message: "Nope".to_string(),
        disable_spacing: true,
        class_name: None,
    };
    let yaml = serde_yaml::to_string(&config).unwrap();
    assert_eq!(LabelInputConfig::from_yaml(&yaml).unwrap(), config);
}
