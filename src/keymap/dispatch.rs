//! Allow-list keyboard dispatch
//!
//! The widget only reacts to Enter, Space, Backspace, Delete, ArrowLeft and
//! ArrowRight. Every keystroke routed to it is consumed regardless: hosts
//! suppress the platform default for all of them, so native editing
//! shortcuts (word jump, select all, ...) do not work inside the row.

use super::types::Key;

/// Key that commits the live caret text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Enter,
    Space,
}

/// What a keystroke means to the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Commit(Delimiter),
    /// Backspace and Delete both remove the chip before the caret
    DeleteBackward,
    MoveLeft,
    MoveRight,
}

/// Map a key to a widget action, `None` for everything off the list
pub fn action_for(key: Key) -> Option<KeyAction> {
    match key {
        Key::Enter => Some(KeyAction::Commit(Delimiter::Enter)),
        Key::Space => Some(KeyAction::Commit(Delimiter::Space)),
        Key::Backspace | Key::Delete => Some(KeyAction::DeleteBackward),
        Key::ArrowLeft => Some(KeyAction::MoveLeft),
        Key::ArrowRight => Some(KeyAction::MoveRight),
        Key::Char(_) | Key::Other => None,
    }
}
