//! Text normalization for editable surfaces
//!
//! Hosts report the raw content of an editable element (caret or chip) after
//! every input event. That content may contain line breaks typed with Enter,
//! or spaces when spacing is disabled. [`normalize`] produces the token text
//! and, when it had to shorten the content, the offset where the host must
//! put its text caret back after replacing the element's content.

/// Result of normalizing raw edited text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trimmed {
    /// Normalized token text
    pub text: String,
    /// Char offset to restore the text caret to, if the content was shortened
    pub caret: Option<usize>,
}

/// Normalize raw edited text.
///
/// - Line breaks (`\r\n`, `\n`, `\r`) are always removed.
/// - With `disable_spacing`, the text is trimmed and every remaining space
///   is removed as well.
///
/// `selection_offset` is the host's text caret offset (in chars) within the
/// raw content, as reported by its selection provider. When the raw content
/// contains a line break, the caret goes where the first break was;
/// otherwise it goes one char before the reported offset.
pub fn normalize(raw: &str, selection_offset: usize, disable_spacing: bool) -> Trimmed {
    let mut text: String = raw.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();

    if disable_spacing {
        text = text.trim().chars().filter(|&c| c != ' ').collect();
    }

    let len = text.chars().count();
    let shortened = len < raw.chars().count();

    let target = match raw.chars().position(|c| c == '\n') {
        Some(break_index) => break_index,
        None => selection_offset.saturating_sub(1),
    };

    let caret = if shortened && len > 0 {
        Some(target.min(len))
    } else {
        None
    };

    Trimmed { text, caret }
}
