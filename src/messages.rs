//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. Hosts translate their
//! native events (key up, input, focus, pointer presses) into a [`Msg`].

use crate::keymap::Key;
use crate::model::EntryId;

/// Events from the live caret element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaretMsg {
    /// The caret's editable content changed
    Input {
        /// Raw content of the element
        text: String,
        /// Text caret offset (chars) reported by the host's selection
        selection_offset: usize,
    },
    Focus,
    Blur,
}

/// Events from a chip element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChipMsg {
    /// The chip's editable content changed
    Input {
        id: EntryId,
        text: String,
        selection_offset: usize,
    },
    Focus(EntryId),
    Blur(EntryId),
    /// The close affordance was activated
    Close(EntryId),
}

/// Focus changes of the wrapper around the row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapperMsg {
    Focus,
    Blur,
}

/// What a pointer press landed on.
///
/// Presses on the caret, a chip, a chip's close affordance or a gap do not
/// propagate to the wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Caret,
    Chip(EntryId),
    ChipClose(EntryId),
    /// Gap marker in front of the entry at this full-sequence index
    Gap(usize),
    /// Anywhere else inside the wrapper
    Wrapper,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The consumer supplied a new value array
    SetValue(Vec<String>),
    Caret(CaretMsg),
    Chip(ChipMsg),
    Wrapper(WrapperMsg),
    /// A key was released while the widget had keyboard focus
    Key(Key),
    /// A pointer press inside the widget
    Pointer(HitTarget),
}
