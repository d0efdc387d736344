//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging caret
//! movement, commits and validation transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=caret=debug,change=debug` - scoped filtering
//! - `RUST_LOG=label_input::update=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/label-input/logs/label-input.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::LabelInputModel;

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr and respects RUST_LOG (default `warn`).
/// File logging always records debug level.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "label-input.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of caret state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaretSnapshot {
    pub entry_count: usize,
    pub caret_index: Option<usize>,
    pub caret_position: usize,
    pub caret_text: String,
    pub error: bool,
}

impl CaretSnapshot {
    pub fn from_model(model: &LabelInputModel) -> Self {
        Self {
            entry_count: model.tokens.entry_count(),
            caret_index: model.tokens.caret_index(),
            caret_position: model.tokens.pending_caret_position(),
            caret_text: model.tokens.caret_text().to_string(),
            error: model.validation.has_error(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &CaretSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.entry_count != other.entry_count {
            changes.push(format!(
                "entries: {} → {}",
                self.entry_count, other.entry_count
            ));
        }
        if self.caret_index != other.caret_index || self.caret_position != other.caret_position {
            changes.push(format!(
                "caret: {:?}@{} → {:?}@{}",
                self.caret_index, self.caret_position, other.caret_index, other.caret_position
            ));
        }
        if self.caret_text != other.caret_text {
            changes.push(format!("text: {:?} → {:?}", self.caret_text, other.caret_text));
        }
        if self.error != other.error {
            let status = if other.error { "failed" } else { "cleared" };
            changes.push(format!("validation {}", status));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
