//! TokenList - ordered committed tokens plus the single live caret entry
//!
//! The list is derived from the consumer's value array by [`TokenList::rebuild`].
//! Operations that change committed tokens never mutate the list directly:
//! they produce the next value array (see the `*_values` methods) and the
//! consumer feeds it back, which triggers the next rebuild.
//!
//! The caret position is an index into the committed-only view and survives
//! rebuilds, so consumer-driven value changes do not reset where the user
//! was typing.

use super::entry::{EntryId, TokenEntry};

#[derive(Debug, Clone)]
pub struct TokenList {
    entries: Vec<TokenEntry>,
    /// Index into the committed-only view where the caret sits
    caret_position: usize,
    /// False until the first rebuild; the first rebuild puts the caret last
    initialized: bool,
    next_id: u64,
}

impl Default for TokenList {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenList {
    /// An empty row holding only the caret
    pub fn new() -> Self {
        Self {
            entries: vec![TokenEntry::caret(EntryId(1))],
            caret_position: 0,
            initialized: false,
            next_id: 2,
        }
    }

    /// Build a row from an initial value array, caret at the end
    pub fn from_values<S: AsRef<str>>(values: &[S]) -> Self {
        let mut list = Self::new();
        list.rebuild(values);
        list
    }

    fn next_entry_id(&mut self) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Reconstruct the row from the consumer's value array.
    ///
    /// Committed ids are reused only when the committed count is unchanged,
    /// otherwise every committed entry gets a fresh id. The caret is always
    /// recreated empty at the stored caret position (clamped to the new
    /// committed count).
    pub fn rebuild<S: AsRef<str>>(&mut self, values: &[S]) {
        if !self.initialized {
            self.caret_position = values.len();
        }
        self.caret_position = self.caret_position.min(values.len());

        let prior_ids: Vec<EntryId> = self.committed().map(|entry| entry.id).collect();
        let reuse_ids = prior_ids.len() == values.len();

        let mut entries = Vec::with_capacity(values.len() + 1);
        for (index, value) in values.iter().enumerate() {
            if index == self.caret_position {
                let caret_id = self.next_entry_id();
                entries.push(TokenEntry::caret(caret_id));
            }
            let id = if reuse_ids {
                prior_ids[index]
            } else {
                self.next_entry_id()
            };
            entries.push(TokenEntry::committed(id, value.as_ref()));
        }

        if self.caret_position == values.len() {
            let caret_id = self.next_entry_id();
            entries.push(TokenEntry::caret(caret_id));
        }

        tracing::trace!(
            count = values.len(),
            caret_position = self.caret_position,
            reused_ids = reuse_ids,
            "rebuilt token list"
        );

        self.entries = entries;
        self.initialized = true;
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All entries in display order, caret included
    pub fn entries(&self) -> &[TokenEntry] {
        &self.entries
    }

    /// Number of entries, caret included (never zero)
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Committed entries in order (the caret excluded)
    pub fn committed(&self) -> impl Iterator<Item = &TokenEntry> {
        self.entries.iter().filter(|entry| entry.is_committed())
    }

    pub fn committed_count(&self) -> usize {
        self.committed().count()
    }

    /// The committed projection: exactly what the consumer's value should be
    pub fn committed_values(&self) -> Vec<String> {
        self.committed().map(|entry| entry.text.clone()).collect()
    }

    /// Where the caret sits in the committed-only view, `0..=committed_count`
    pub fn caret_position(&self) -> usize {
        self.caret_position.min(self.committed_count())
    }

    /// The stored caret position, which runs one past the committed count
    /// while a commit is pending (emitted but not yet fed back). The next
    /// rebuild places the caret here.
    pub fn pending_caret_position(&self) -> usize {
        self.caret_position
    }

    /// Index of the caret entry in the full sequence
    pub fn caret_index(&self) -> Option<usize> {
        self.entries.iter().position(TokenEntry::is_caret)
    }

    pub fn caret(&self) -> Option<&TokenEntry> {
        self.entries.iter().find(|entry| entry.is_caret())
    }

    /// Live caret text ("" if there is no caret)
    pub fn caret_text(&self) -> &str {
        self.caret().map(|entry| entry.text.as_str()).unwrap_or("")
    }

    pub fn is_caret_last(&self) -> bool {
        self.caret_index() == Some(self.entries.len().saturating_sub(1))
    }

    pub fn get(&self, id: EntryId) -> Option<&TokenEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Index of a committed entry within the committed-only view
    pub fn committed_index_of(&self, id: EntryId) -> Option<usize> {
        self.committed().position(|entry| entry.id == id)
    }

    /// Id of the committed entry at a committed-only index
    pub fn committed_id_at(&self, index: usize) -> Option<EntryId> {
        self.committed().nth(index).map(|entry| entry.id)
    }

    // =========================================================================
    // Caret mutations
    // =========================================================================

    /// Replace the live caret text
    pub fn set_caret_text(&mut self, text: impl Into<String>) {
        if let Some(caret) = self.entries.iter_mut().find(|entry| entry.is_caret()) {
            caret.text = text.into();
        }
    }

    /// Store a caret position, clamped to the committed count
    pub fn set_caret_position(&mut self, position: usize) {
        self.caret_position = position.min(self.committed_count());
    }

    /// Advance the caret position past a token that is about to be committed.
    ///
    /// Allowed to run one past the committed count: the pending token only
    /// shows up in the committed view after the consumer feeds it back.
    pub fn advance_caret_position(&mut self) {
        self.caret_position = (self.caret_position + 1).min(self.committed_count() + 1);
    }

    pub fn retreat_caret_position(&mut self) {
        self.caret_position = self.caret_position.saturating_sub(1);
    }

    /// Move the caret entry among the committed entries.
    ///
    /// `target` is a committed-only index. When `from_gap` is set, `target`
    /// is a full-sequence index (as reported by a gap marker) and is
    /// normalized by subtracting one when the caret currently sits before
    /// it. Committed contents and order are never touched.
    ///
    /// Returns the new caret position, or `None` if there is no caret.
    pub fn move_caret_to(&mut self, target: usize, from_gap: bool) -> Option<usize> {
        let caret_index = self.caret_index()?;

        let mut target = target;
        if from_gap && caret_index < target {
            target -= 1;
        }

        let caret = self.entries.remove(caret_index);
        let target = target.min(self.entries.len());
        self.entries.insert(target, caret);
        self.caret_position = target;

        Some(target)
    }

    // =========================================================================
    // Next-value projections
    // =========================================================================

    /// Every entry's trimmed text in order, the live caret text included as
    /// a committed token at its position
    pub fn values_with_caret_committed(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.text.trim().to_string())
            .collect()
    }

    /// Committed values without the entry `id`
    pub fn values_without(&self, id: EntryId) -> Vec<String> {
        self.committed()
            .filter(|entry| entry.id != id)
            .map(|entry| entry.text.clone())
            .collect()
    }

    /// Committed values with the text of entry `id` replaced
    pub fn values_with_text(&self, id: EntryId, text: &str) -> Vec<String> {
        self.committed()
            .map(|entry| {
                if entry.id == id {
                    text.to_string()
                } else {
                    entry.text.clone()
                }
            })
            .collect()
    }
}
