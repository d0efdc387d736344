//! Command-line argument parsing for the scenario runner
//!
//! Supports:
//! - Replaying one or more scenario files
//! - JSON or plain-text reports
//! - Overriding widget options from the command line

use clap::Parser;
use std::path::PathBuf;

use label_input::config::LabelInputConfig;

/// Replay label input scenarios headlessly
#[derive(Parser, Debug)]
#[command(
    name = "label-input",
    version,
    about = "Replay label input scenarios headlessly"
)]
pub struct CliArgs {
    /// Scenario YAML files to replay
    #[arg(value_name = "SCENARIOS", required = true)]
    pub scenarios: Vec<PathBuf>,

    /// Print one JSON report per scenario instead of text
    #[arg(long)]
    pub json: bool,

    /// Strip all spaces from tokens; Space no longer commits
    #[arg(long)]
    pub disable_spacing: bool,

    /// Reject tokens containing any of these characters
    #[arg(long, value_name = "CHARS")]
    pub reject: Option<String>,

    /// Message shown while a token is invalid
    #[arg(long, value_name = "TEXT")]
    pub error_message: Option<String>,
}

/// How reports are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub scenarios: Vec<PathBuf>,
    pub format: OutputFormat,
    /// Widget options: the config file with command-line overrides applied
    pub widget: LabelInputConfig,
    pub reject: Option<String>,
}

impl CliArgs {
    /// Convert parsed CLI args into a run configuration on top of `base`
    pub fn into_config(self, base: LabelInputConfig) -> Result<RunConfig, String> {
        if let Some(chars) = &self.reject {
            if chars.is_empty() {
                return Err("--reject needs at least one character".to_string());
            }
        }

        let mut widget = base;
        if self.disable_spacing {
            widget.disable_spacing = true;
        }
        if let Some(message) = self.error_message {
            widget.error_message = message;
        }

        Ok(RunConfig {
            scenarios: self.scenarios,
            format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Text
            },
            widget,
            reject: self.reject,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["label-input", "a.yaml"];
        argv.extend_from_slice(extra);
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults_keep_base_config() {
        let config = args(&[]).into_config(LabelInputConfig::default()).unwrap();
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.widget, LabelInputConfig::default());
        assert_eq!(config.scenarios, vec![PathBuf::from("a.yaml")]);
        assert!(config.reject.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = args(&["--json", "--disable-spacing", "--error-message", "bad"])
            .into_config(LabelInputConfig::default())
            .unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.widget.disable_spacing);
        assert_eq!(config.widget.error_message, "bad");
    }

    #[test]
    fn test_empty_reject_is_an_error() {
        let result = args(&["--reject", ""]).into_config(LabelInputConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_scenarios_are_required() {
        assert!(CliArgs::try_parse_from(["label-input"]).is_err());
    }
}
