//! Chip operations: in-place edits, focus/blur, deletion

use tracing::{debug, trace};

use crate::commands::{Cmd, TextTarget};
use crate::messages::ChipMsg;
use crate::model::{ChipEvent, EntryId, LabelInputModel};

/// Handle chip messages by running them through the chip surfaces first
pub fn update_chip(model: &mut LabelInputModel, msg: ChipMsg) -> Option<Cmd> {
    match msg {
        ChipMsg::Input {
            id,
            text,
            selection_offset,
        } => {
            let disable_spacing = model.config.disable_spacing;
            let (event, caret) = model
                .chips
                .input(id, &text, selection_offset, disable_spacing)?;
            let restore = caret.map(|offset| Cmd::SetTextCaret {
                target: TextTarget::Chip(id),
                offset,
            });
            Cmd::from_cmds(vec![
                handle_chip_event(model, event).unwrap_or_default(),
                restore.unwrap_or_default(),
            ])
        }
        ChipMsg::Focus(id) => {
            let event = model.chips.focus(id)?;
            handle_chip_event(model, event)
        }
        ChipMsg::Blur(id) => match model.chips.blur(id) {
            Some(event) => handle_chip_event(model, event),
            None => {
                // The chip is gone (closed or replaced by a rebuild)
                trace!(%id, "blur for a removed chip");
                model.focus.settle_chips(model.chips.any_focused());
                None
            }
        },
        ChipMsg::Close(id) => {
            let event = model.chips.close(id)?;
            handle_chip_event(model, event)
        }
    }
}

/// React to an event reported by a chip surface
pub fn handle_chip_event(model: &mut LabelInputModel, event: ChipEvent) -> Option<Cmd> {
    match event {
        ChipEvent::Changed { id, text } => edit_chip_text(model, id, &text),
        ChipEvent::Focused(_) => {
            model.focus.chip = true;
            model.focus.wrapper = true;
            model.validation.should_validate = true;
            Some(Cmd::NotifyFocus)
        }
        ChipEvent::Blurred { id, is_empty } => {
            model.focus.settle_chips(model.chips.any_focused());

            let removal = if is_empty {
                handle_chip_becomes_empty(model, id)
            } else {
                None
            };

            if !model.validation.has_error() {
                model.validation.should_validate = false;
            }

            Cmd::from_cmds(vec![removal.unwrap_or_default(), Cmd::NotifyBlur])
        }
        ChipEvent::DeleteRequested(id) => delete_chip(model, id),
    }
}

/// Emit the value array with one chip's text replaced
pub fn edit_chip_text(model: &mut LabelInputModel, id: EntryId, text: &str) -> Option<Cmd> {
    model.tokens.committed_index_of(id)?;
    Some(Cmd::EmitChange(model.tokens.values_with_text(id, text)))
}

/// Delete a committed chip; the caret keeps its place relative to the
/// remaining tokens. The caret entry itself cannot be deleted this way.
pub fn delete_chip(model: &mut LabelInputModel, id: EntryId) -> Option<Cmd> {
    let index = model.tokens.committed_index_of(id)?;

    if model.tokens.caret_position() > index {
        model.tokens.retreat_caret_position();
    }

    debug!(%id, index, "chip deleted");
    Some(Cmd::EmitChange(model.tokens.values_without(id)))
}

/// A chip was left empty: drop it and let the caret take over its slot
pub fn handle_chip_becomes_empty(model: &mut LabelInputModel, id: EntryId) -> Option<Cmd> {
    let index = model.tokens.committed_index_of(id)?;
    let values = model.tokens.values_without(id);
    model.tokens.set_caret_position(index);

    debug!(%id, index, "emptied chip reverted to caret");
    Some(Cmd::EmitChange(values))
}
