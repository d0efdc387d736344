//! Label Input - a chip/tag input widget model
//!
//! This crate provides the core types and logic for a controlled label input
//! implementing the Elm Architecture pattern. A host UI layer renders the row
//! and forwards input, focus, key and pointer events as [`Msg`] values.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod scenario;
pub mod tracing;
pub mod update;
pub mod util;
pub mod view;
pub mod widget;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::LabelInputConfig;
pub use messages::Msg;
pub use model::LabelInputModel;
pub use widget::{Host, LabelInput, NoopHost};
