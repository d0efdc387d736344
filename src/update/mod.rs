//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod caret;
mod chip;
mod keyboard;
mod pointer;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::LabelInputModel;

#[cfg(debug_assertions)]
use crate::tracing::CaretSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use caret::{
    arrow_left, arrow_right, commit_on_delimiter, delete_via_backspace, edit_caret_text,
    move_caret_to, move_caret_to_end, update_caret,
};
pub use chip::{
    delete_chip, edit_chip_text, handle_chip_becomes_empty, handle_chip_event, update_chip,
};
pub use keyboard::update_key;
pub use pointer::{update_pointer, update_wrapper};

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut LabelInputModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

fn update_inner(model: &mut LabelInputModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::SetValue(values) => rebuild(model, &values),
        Msg::Caret(m) => caret::update_caret(model, m),
        Msg::Chip(m) => chip::update_chip(model, m),
        Msg::Wrapper(m) => pointer::update_wrapper(model, m),
        Msg::Key(key) => keyboard::update_key(model, key),
        Msg::Pointer(target) => pointer::update_pointer(model, target),
    }
}

/// Rebuild the row from the consumer's value array.
///
/// The caret element is recreated by the rebuild, so focus is handed back
/// to it if it had focus.
pub fn rebuild<S: AsRef<str>>(model: &mut LabelInputModel, values: &[S]) -> Option<Cmd> {
    model.tokens.rebuild(values);
    model.chips.sync(model.tokens.entries());
    if model.focus.chip && !model.chips.any_focused() {
        tracing::debug!("focused chip dropped by rebuild");
        model.focus.settle_chips(false);
    }
    model.validate();

    model.focus.caret.then_some(Cmd::FocusCaret)
}

#[cfg(debug_assertions)]
fn update_traced(model: &mut LabelInputModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = CaretSnapshot::from_model(model);
    let result = update_inner(model, msg);
    let after = CaretSnapshot::from_model(model);

    if let Some(diff) = before.diff(&after) {
        debug!(target: "caret", "{}", diff);
    }
    if let Some(values) = result.as_ref().and_then(Cmd::emitted) {
        debug!(target: "change", count = values.len(), "emitting change");
    }

    result
}

#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::SetValue(values) => format!("SetValue({})", values.len()),
        Msg::Caret(m) => format!("Caret::{:?}", m),
        Msg::Chip(m) => format!("Chip::{:?}", m),
        Msg::Wrapper(m) => format!("Wrapper::{:?}", m),
        Msg::Key(k) => format!("Key({})", k),
        Msg::Pointer(t) => format!("Pointer::{:?}", t),
    }
}
