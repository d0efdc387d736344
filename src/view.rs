//! Row layout and plain-text rendering
//!
//! Hosts draw the row from [`row_items`]; [`render_row`] is a plain-text
//! rendition used for diagnostics and the scenario runner.

use crate::model::{gap_markers, EntryId, LabelInputModel};

/// One visual item of the row, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowItem<'a> {
    /// Click target in front of the entry at this full-sequence index
    Gap(usize),
    /// The live caret and its text
    Caret { id: EntryId, text: &'a str },
    /// A committed chip and the text its surface shows
    Chip {
        id: EntryId,
        text: &'a str,
        invalid: bool,
    },
}

/// Items in display order: gaps interleaved with chips and the caret
pub fn row_items(model: &LabelInputModel) -> Vec<RowItem<'_>> {
    let entries = model.tokens.entries();
    let mut gaps = gap_markers(entries).into_iter().peekable();
    let mut items = Vec::with_capacity(entries.len() * 2 + 1);

    for (index, entry) in entries.iter().enumerate() {
        if gaps.next_if(|gap| gap.index == index).is_some() {
            items.push(RowItem::Gap(index));
        }

        if entry.is_caret() {
            items.push(RowItem::Caret {
                id: entry.id,
                text: &entry.text,
            });
        } else {
            let text = model
                .chips
                .get(entry.id)
                .map(|surface| surface.text())
                .unwrap_or(&entry.text);
            items.push(RowItem::Chip {
                id: entry.id,
                text,
                invalid: model.validation.is_invalid(entry.id),
            });
        }
    }

    if let Some(gap) = gaps.next() {
        items.push(RowItem::Gap(gap.index));
    }

    items
}

/// Render the row as text: `[chip] [!invalid] text_`, with the visible
/// error (if any) on a second line
pub fn render_row(model: &LabelInputModel) -> String {
    let parts: Vec<String> = row_items(model)
        .into_iter()
        .filter_map(|item| match item {
            RowItem::Gap(_) => None,
            RowItem::Caret { text, .. } => Some(format!("{}_", text)),
            RowItem::Chip { text, invalid, .. } => Some(if invalid {
                format!("[!{}]", text)
            } else {
                format!("[{}]", text)
            }),
        })
        .collect();

    let mut out = parts.join(" ");
    if let Some(error) = model.visible_error() {
        out.push('\n');
        out.push_str(error);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LabelInputConfig;
    use crate::model::Validator;

    #[test]
    fn test_row_items_interleave_gaps() {
        let mut model = LabelInputModel::new(&["a", "b"], LabelInputConfig::default());
        model.tokens.move_caret_to(1, false);

        let kinds: Vec<&str> = row_items(&model)
            .iter()
            .map(|item| match item {
                RowItem::Gap(_) => "gap",
                RowItem::Caret { .. } => "caret",
                RowItem::Chip { .. } => "chip",
            })
            .collect();
        assert_eq!(kinds, vec!["gap", "chip", "caret", "chip", "gap"]);
    }

    #[test]
    fn test_render_row() {
        let mut model = LabelInputModel::new(&["foo", "bar"], LabelInputConfig::default());
        model.tokens.set_caret_text("ba");
        assert_eq!(render_row(&model), "[foo] [bar] ba_");
    }

    #[test]
    fn test_render_invalid_chip_and_error() {
        let mut model = LabelInputModel::new(&["ok", "a@b"], LabelInputConfig::default())
            .with_validator(Validator::rejecting("@"));
        assert_eq!(render_row(&model), "[ok] [!a@b] _");

        model.validation.should_validate = true;
        assert_eq!(render_row(&model), "[ok] [!a@b] _\nInvalid input value");
    }
}
