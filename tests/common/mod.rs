//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use label_input::config::LabelInputConfig;
use label_input::keymap::{parse_key, Key};
use label_input::messages::{CaretMsg, ChipMsg, Msg};
use label_input::model::{EntryId, LabelInputModel, Validator};
use label_input::update::update;
use label_input::view::render_row;
use label_input::Cmd;

/// Create a model with the given value and the caret focused
pub fn test_model(values: &[&str]) -> LabelInputModel {
    test_model_with_config(values, LabelInputConfig::default())
}

pub fn test_model_with_config(values: &[&str], config: LabelInputConfig) -> LabelInputModel {
    let mut model = LabelInputModel::new(values, config);
    update(&mut model, Msg::Caret(CaretMsg::Focus));
    model
}

/// Focused model that rejects tokens containing any of `chars`
pub fn test_model_rejecting(values: &[&str], chars: &str) -> LabelInputModel {
    test_model(values).with_validator(Validator::rejecting(chars))
}

/// Run one message and feed any emitted change back as the next value,
/// the way a controlled consumer would
pub fn apply(model: &mut LabelInputModel, msg: Msg) -> Option<Vec<String>> {
    let cmd = update(model, msg);
    let values = cmd.as_ref().and_then(Cmd::emitted)?.to_vec();
    update(model, Msg::SetValue(values.clone()));
    Some(values)
}

/// Like [`apply`] but without feeding the change back
pub fn apply_raw(model: &mut LabelInputModel, msg: Msg) -> Option<Cmd> {
    update(model, msg)
}

pub fn key(name: &str) -> Key {
    parse_key(name).unwrap()
}

/// Press a named key (after the input event, if any, has been applied)
pub fn press(model: &mut LabelInputModel, name: &str) -> Option<Vec<String>> {
    apply(model, Msg::Key(key(name)))
}

/// Type text into the caret one char at a time, the way a host reports it:
/// an input event with the element's new content, then the key release.
///
/// Returns every change emitted along the way.
pub fn type_text(model: &mut LabelInputModel, text: &str) -> Vec<Vec<String>> {
    let mut changes = Vec::new();
    for ch in text.chars() {
        let raw = format!("{}{}", model.caret_text(), ch);
        let selection_offset = raw.chars().count();
        changes.extend(apply(
            model,
            Msg::Caret(CaretMsg::Input {
                text: raw,
                selection_offset,
            }),
        ));
        changes.extend(apply(model, Msg::Key(Key::from_char(ch))));
    }
    changes
}

/// Erase the last caret char (if any) and release Backspace
pub fn backspace(model: &mut LabelInputModel) -> Option<Vec<String>> {
    let mut text = model.caret_text().to_string();
    if text.pop().is_some() {
        let selection_offset = text.chars().count();
        apply(
            model,
            Msg::Caret(CaretMsg::Input {
                text,
                selection_offset,
            }),
        );
    }
    press(model, "backspace")
}

/// Id of the chip at a committed index
pub fn chip_id(model: &LabelInputModel, index: usize) -> EntryId {
    model.tokens.committed_id_at(index).unwrap()
}

/// Move focus from the caret to a chip
pub fn focus_chip(model: &mut LabelInputModel, index: usize) -> EntryId {
    let id = chip_id(model, index);
    update(model, Msg::Caret(CaretMsg::Blur));
    apply(model, Msg::Chip(ChipMsg::Focus(id)));
    id
}

pub fn row(model: &LabelInputModel) -> String {
    render_row(model)
}
