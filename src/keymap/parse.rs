//! Key names as written in scenario files ("enter", "left", "a")
//!
//! Names are case-insensitive. Keys the widget ignores but that scenarios
//! may still press ("escape", "tab", "up", ...) parse as [`Key::Other`];
//! anything else is an error, so typos in scenarios are caught.

use super::types::Key;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeymapError {
    InvalidKey(String),
}

impl std::fmt::Display for KeymapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeymapError::InvalidKey(k) => write!(f, "Invalid key: {}", k),
        }
    }
}

impl std::error::Error for KeymapError {}

/// Parse a key name
pub fn parse_key(name: &str) -> Result<Key, KeymapError> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(Key::from_char(c));
    }

    match name.trim().to_lowercase().as_str() {
        "enter" | "return" => Ok(Key::Enter),
        "space" => Ok(Key::Space),
        "backspace" => Ok(Key::Backspace),
        "delete" | "del" => Ok(Key::Delete),
        "left" | "arrowleft" => Ok(Key::ArrowLeft),
        "right" | "arrowright" => Ok(Key::ArrowRight),
        "escape" | "esc" | "tab" | "up" | "arrowup" | "down" | "arrowdown" | "home" | "end"
        | "shift" | "ctrl" | "alt" | "meta" => Ok(Key::Other),
        _ => Err(KeymapError::InvalidKey(name.to_string())),
    }
}
