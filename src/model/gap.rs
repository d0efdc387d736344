//! Gap markers - invisible click targets between chips

use super::entry::TokenEntry;

/// A click target in front of the entry at `index` (full-sequence index).
///
/// `index == entries.len()` is the trailing gap after the last chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapMarker {
    pub index: usize,
}

/// Gap markers for a row.
///
/// A gap sits in front of every chip that does not directly follow the
/// caret (the caret itself is already a drop point there), plus one after
/// the last entry when that entry is a chip.
pub fn gap_markers(entries: &[TokenEntry]) -> Vec<GapMarker> {
    let mut gaps: Vec<GapMarker> = entries
        .iter()
        .enumerate()
        .filter(|(index, entry)| {
            entry.is_committed() && (*index == 0 || !entries[index - 1].is_caret())
        })
        .map(|(index, _)| GapMarker { index })
        .collect();

    if entries.last().is_some_and(TokenEntry::is_committed) {
        gaps.push(GapMarker {
            index: entries.len(),
        });
    }

    gaps
}
