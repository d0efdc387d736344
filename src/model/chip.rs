//! Chip surfaces - the in-place editable element behind each committed token
//!
//! A chip's text is initialized once from its token and from then on belongs
//! to the user: later value updates for the same entry id are not written
//! back into the surface, so re-renders never jump the text caret while a
//! chip is being edited. Only a new id (a regenerated entry) starts over.

use std::collections::HashMap;

use super::entry::{EntryId, TokenEntry};
use crate::util::trim;

/// Event a chip reports upward to the token list controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChipEvent {
    /// The chip text was edited (already normalized)
    Changed { id: EntryId, text: String },
    /// The chip gained focus
    Focused(EntryId),
    /// The chip lost focus; `is_empty` when its text trims to nothing
    Blurred { id: EntryId, is_empty: bool },
    /// The close affordance was activated
    DeleteRequested(EntryId),
}

/// Editable surface of one committed chip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipSurface {
    pub id: EntryId,
    text: String,
    pub focused: bool,
}

impl ChipSurface {
    fn new(id: EntryId, text: &str) -> Self {
        Self {
            id,
            text: text.to_string(),
            focused: false,
        }
    }

    /// Text currently shown by the surface
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Identity-keyed container of chip surfaces
#[derive(Debug, Clone, Default)]
pub struct ChipSurfaces {
    surfaces: HashMap<EntryId, ChipSurface>,
}

impl ChipSurfaces {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount surfaces for new committed entries and drop unmounted ones.
    ///
    /// Existing surfaces keep their text even if the entry text differs.
    pub fn sync(&mut self, entries: &[TokenEntry]) {
        self.surfaces
            .retain(|id, _| entries.iter().any(|e| e.is_committed() && e.id == *id));

        for entry in entries.iter().filter(|e| e.is_committed()) {
            self.surfaces
                .entry(entry.id)
                .or_insert_with(|| ChipSurface::new(entry.id, &entry.text));
        }
    }

    pub fn get(&self, id: EntryId) -> Option<&ChipSurface> {
        self.surfaces.get(&id)
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Any chip currently focused
    pub fn any_focused(&self) -> bool {
        self.surfaces.values().any(|s| s.focused)
    }

    /// Apply raw edited content to a chip.
    ///
    /// Returns the change event and, when normalization shortened the
    /// content, the text caret offset to restore.
    pub fn input(
        &mut self,
        id: EntryId,
        raw: &str,
        selection_offset: usize,
        disable_spacing: bool,
    ) -> Option<(ChipEvent, Option<usize>)> {
        let surface = self.surfaces.get_mut(&id)?;
        let trimmed = trim::normalize(raw, selection_offset, disable_spacing);
        surface.text = trimmed.text.clone();

        Some((
            ChipEvent::Changed {
                id,
                text: trimmed.text,
            },
            trimmed.caret,
        ))
    }

    pub fn focus(&mut self, id: EntryId) -> Option<ChipEvent> {
        let surface = self.surfaces.get_mut(&id)?;
        surface.focused = true;
        Some(ChipEvent::Focused(id))
    }

    pub fn blur(&mut self, id: EntryId) -> Option<ChipEvent> {
        let surface = self.surfaces.get_mut(&id)?;
        surface.focused = false;
        Some(ChipEvent::Blurred {
            id,
            is_empty: surface.text.trim().is_empty(),
        })
    }

    pub fn close(&self, id: EntryId) -> Option<ChipEvent> {
        self.surfaces
            .contains_key(&id)
            .then_some(ChipEvent::DeleteRequested(id))
    }
}
