//! Pointer routing and wrapper focus

use super::caret::{move_caret_to, move_caret_to_end};
use super::chip::update_chip;
use crate::commands::Cmd;
use crate::messages::{ChipMsg, HitTarget, WrapperMsg};
use crate::model::LabelInputModel;

/// Route a pointer press by what it landed on.
///
/// Caret and chip presses stop there (the chip handles its own text caret);
/// only a press on bare wrapper area moves the caret to the end.
pub fn update_pointer(model: &mut LabelInputModel, target: HitTarget) -> Option<Cmd> {
    match target {
        HitTarget::Caret | HitTarget::Chip(_) => None,
        HitTarget::ChipClose(id) => update_chip(model, ChipMsg::Close(id)),
        HitTarget::Gap(index) => move_caret_to(model, index, true, true),
        HitTarget::Wrapper => move_caret_to_end(model, true).or(Some(Cmd::FocusCaret)),
    }
}

pub fn update_wrapper(model: &mut LabelInputModel, msg: WrapperMsg) -> Option<Cmd> {
    model.focus.wrapper = matches!(msg, WrapperMsg::Focus);
    None
}
