//! Keyboard input for the label row
//!
//! ```text
//! host key value → Key → action_for() → KeyAction → update
//! ```
//!
//! Scenario files name keys as text ("enter", "left"), parsed with
//! [`parse_key`].

mod dispatch;
mod parse;
mod types;

pub use dispatch::{action_for, Delimiter, KeyAction};
pub use parse::{parse_key, KeymapError};
pub use types::Key;
