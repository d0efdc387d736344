//! Keyboard dispatch for the label row

use tracing::trace;

use super::caret::{arrow_left, arrow_right, commit_on_delimiter, delete_via_backspace};
use crate::commands::Cmd;
use crate::keymap::{action_for, Key, KeyAction};
use crate::model::LabelInputModel;

/// Handle a released key.
///
/// Keys only reach the caret while the wrapper has focus and no chip is
/// focused (chips handle their own text). The editing flag is cleared at
/// the end of every handled keystroke.
pub fn update_key(model: &mut LabelInputModel, key: Key) -> Option<Cmd> {
    if model.focus.chip || !model.focus.wrapper {
        trace!(%key, "key outside the caret ignored");
        return None;
    }

    let result = match action_for(key) {
        Some(KeyAction::Commit(delimiter)) => commit_on_delimiter(model, delimiter),
        Some(KeyAction::DeleteBackward) => delete_via_backspace(model),
        Some(KeyAction::MoveLeft) => arrow_left(model),
        Some(KeyAction::MoveRight) => arrow_right(model),
        None => None,
    };

    model.editing = false;
    result
}
