//! Caret operations: editing, committing, backspace deletion, movement

use tracing::{debug, trace};

use crate::commands::{Cmd, TextTarget};
use crate::keymap::Delimiter;
use crate::messages::CaretMsg;
use crate::model::LabelInputModel;
use crate::util::trim;

/// Handle caret messages
pub fn update_caret(model: &mut LabelInputModel, msg: CaretMsg) -> Option<Cmd> {
    match msg {
        CaretMsg::Input {
            text,
            selection_offset,
        } => edit_caret_text(model, &text, selection_offset),
        // Focus events bubble to the wrapper
        CaretMsg::Focus => {
            model.focus.caret = true;
            model.focus.wrapper = true;
            Some(Cmd::NotifyFocus)
        }
        CaretMsg::Blur => {
            model.focus.caret = false;
            model.focus.wrapper = false;
            Some(Cmd::NotifyBlur)
        }
    }
}

/// Replace the live caret text with the normalized raw content.
///
/// Marks the widget as editing for the rest of the keystroke cycle. Asks the
/// host to restore its text caret when normalization shortened the text.
pub fn edit_caret_text(
    model: &mut LabelInputModel,
    raw: &str,
    selection_offset: usize,
) -> Option<Cmd> {
    model.editing = true;

    let trimmed = trim::normalize(raw, selection_offset, model.config.disable_spacing);
    model.tokens.set_caret_text(trimmed.text);

    model.validate();
    if !model.validation.has_error() {
        model.validation.should_validate = false;
    }

    trimmed.caret.map(|offset| Cmd::SetTextCaret {
        target: TextTarget::Caret,
        offset,
    })
}

/// Commit the live caret text as a token at the caret position.
///
/// The internal list is left alone; the emitted value comes back through
/// the next rebuild, which also clears the caret text.
pub fn commit_on_delimiter(model: &mut LabelInputModel, delimiter: Delimiter) -> Option<Cmd> {
    model.validation.should_validate = true;

    let blank = model.tokens.caret_text().trim().is_empty();
    let spacing_disabled = delimiter == Delimiter::Space && model.config.disable_spacing;

    if blank || model.validation.has_error() || spacing_disabled {
        trace!(
            ?delimiter,
            blank,
            error = model.validation.has_error(),
            "commit skipped"
        );
        return None;
    }

    let values = model.tokens.values_with_caret_committed();
    model.tokens.advance_caret_position();
    model.validation.should_validate = false;

    debug!(
        ?delimiter,
        caret_position = model.tokens.pending_caret_position(),
        "committed token"
    );
    Some(Cmd::EmitChange(values))
}

/// Remove the committed token right before the caret.
///
/// Only when the caret is empty and nothing was typed in this keystroke
/// cycle (the keystroke that erased the last char must not also eat a chip).
pub fn delete_via_backspace(model: &mut LabelInputModel) -> Option<Cmd> {
    if model.tokens.entry_count() == 1 || !model.tokens.caret_text().is_empty() || model.editing {
        return None;
    }

    let caret_index = model.tokens.caret_index()?;
    if caret_index == 0 {
        return None;
    }

    let removed = model.tokens.entries()[caret_index - 1].id;
    let values = model.tokens.values_without(removed);
    model.tokens.retreat_caret_position();

    debug!(%removed, "backspace removed token");
    Some(Cmd::EmitChange(values))
}

/// Reposition the caret among the committed tokens.
///
/// See [`crate::model::TokenList::move_caret_to`] for how gap indexes are
/// normalized.
pub fn move_caret_to(
    model: &mut LabelInputModel,
    target: usize,
    from_gap: bool,
    set_focus: bool,
) -> Option<Cmd> {
    let position = model.tokens.move_caret_to(target, from_gap)?;
    debug!(position, from_gap, "caret moved");

    set_focus.then_some(Cmd::FocusCaret)
}

/// Move the caret after the last token, unless it is already there
pub fn move_caret_to_end(model: &mut LabelInputModel, set_focus: bool) -> Option<Cmd> {
    if model.tokens.is_caret_last() {
        return None;
    }
    let end = model.tokens.committed_count();
    move_caret_to(model, end, false, set_focus)
}

/// ArrowLeft: step the caret one token to the left
pub fn arrow_left(model: &mut LabelInputModel) -> Option<Cmd> {
    if !model.tokens.caret_text().is_empty() || model.tokens.entry_count() == 1 {
        return None;
    }

    let caret_index = model.tokens.caret_index()?;
    if caret_index == 0 {
        return None;
    }

    let moved = move_caret_to(model, caret_index - 1, false, true);
    Cmd::from_cmds(vec![moved.unwrap_or_default(), Cmd::FollowCaret])
}

/// ArrowRight: step the caret one token to the right
pub fn arrow_right(model: &mut LabelInputModel) -> Option<Cmd> {
    if !model.tokens.caret_text().is_empty() && model.tokens.entry_count() == 1 {
        return None;
    }

    let caret_index = model.tokens.caret_index()?;
    if caret_index + 1 == model.tokens.entry_count() {
        return None;
    }

    let moved = move_caret_to(model, caret_index + 1, false, true);
    Cmd::from_cmds(vec![moved.unwrap_or_default(), Cmd::FollowCaret])
}
