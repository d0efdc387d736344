//! Token entries - the units of the label row

use std::fmt;

/// Unique identifier for an entry in the label row
///
/// Stable across reorderings; used to key chip surfaces and targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Role of an entry in the row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A committed token, displayed as a chip
    Committed,
    /// The live, editable slot where new tokens are typed
    Caret,
}

/// One entry of the label row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenEntry {
    pub id: EntryId,
    pub kind: EntryKind,
    pub text: String,
}

impl TokenEntry {
    pub fn committed(id: EntryId, text: impl Into<String>) -> Self {
        Self {
            id,
            kind: EntryKind::Committed,
            text: text.into(),
        }
    }

    /// A fresh caret entry (always starts empty)
    pub fn caret(id: EntryId) -> Self {
        Self {
            id,
            kind: EntryKind::Caret,
            text: String::new(),
        }
    }

    #[inline]
    pub fn is_caret(&self) -> bool {
        self.kind == EntryKind::Caret
    }

    #[inline]
    pub fn is_committed(&self) -> bool {
        self.kind == EntryKind::Committed
    }
}
