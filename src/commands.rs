//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The widget runtime executes them against the consumer callbacks and the
//! host.

use crate::model::EntryId;

/// Editable element whose text caret should be placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTarget {
    Caret,
    Chip(EntryId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Hand the next value array to the consumer's `on_change`
    EmitChange(Vec<String>),
    /// Give keyboard focus to the live caret element
    FocusCaret,
    /// Replace the element content with its normalized text and put the
    /// text caret at `offset`
    SetTextCaret { target: TextTarget, offset: usize },
    /// Scroll the wrapper so the caret element stays visible
    FollowCaret,
    /// Call the consumer's `on_focus`
    NotifyFocus,
    /// Call the consumer's `on_blur`
    NotifyBlur,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Collapse a list of commands: `None` when empty, the command itself
    /// when there is only one, a batch otherwise
    pub fn from_cmds(mut cmds: Vec<Cmd>) -> Option<Cmd> {
        cmds.retain(|cmd| *cmd != Cmd::None);
        match cmds.len() {
            0 => None,
            1 => cmds.pop(),
            _ => Some(Cmd::Batch(cmds)),
        }
    }

    /// The value array emitted by this command, if any
    pub fn emitted(&self) -> Option<&[String]> {
        match self {
            Cmd::EmitChange(values) => Some(values.as_slice()),
            Cmd::Batch(cmds) => cmds.iter().find_map(Cmd::emitted),
            _ => None,
        }
    }

    /// Check whether this command (or any batched command) matches
    pub fn contains(&self, other: &Cmd) -> bool {
        match self {
            Cmd::Batch(cmds) => cmds.iter().any(|cmd| cmd.contains(other)),
            cmd => cmd == other,
        }
    }
}
