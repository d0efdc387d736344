//! Widget model - the complete state of one label input
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod chip;
pub mod entry;
pub mod gap;
pub mod token_list;
pub mod validation;

pub use chip::{ChipEvent, ChipSurface, ChipSurfaces};
pub use entry::{EntryId, EntryKind, TokenEntry};
pub use gap::{gap_markers, GapMarker};
pub use token_list::TokenList;
pub use validation::{ValidationState, Validator};

use crate::config::LabelInputConfig;

/// Which parts of the widget currently hold focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusState {
    /// The live caret element
    pub caret: bool,
    /// Any chip
    pub chip: bool,
    /// The wrapper around the whole row
    pub wrapper: bool,
}

impl FocusState {
    /// Recompute chip and wrapper focus after chips lost focus or went away
    pub fn settle_chips(&mut self, any_chip_focused: bool) {
        self.chip = any_chip_focused;
        self.wrapper = self.chip || self.caret;
    }
}

/// Complete state of one label input
#[derive(Debug, Clone)]
pub struct LabelInputModel {
    pub tokens: TokenList,
    pub chips: ChipSurfaces,
    pub validation: ValidationState,
    pub focus: FocusState,
    pub config: LabelInputConfig,
    pub validator: Option<Validator>,
    /// Set by caret input, cleared after every dispatched keystroke.
    /// Keeps Backspace from also deleting a chip in the same keystroke that
    /// erased the last caret char.
    pub editing: bool,
}

impl LabelInputModel {
    pub fn new<S: AsRef<str>>(values: &[S], config: LabelInputConfig) -> Self {
        let tokens = TokenList::from_values(values);
        let mut chips = ChipSurfaces::new();
        chips.sync(tokens.entries());

        Self {
            tokens,
            chips,
            validation: ValidationState::default(),
            focus: FocusState::default(),
            config,
            validator: None,
            editing: false,
        }
    }

    /// Attach a validator and validate the current tokens
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self.validate();
        self
    }

    /// Re-run validation over every entry
    pub fn validate(&mut self) {
        self.validation.run(
            self.validator.as_ref(),
            self.tokens.entries(),
            &self.config.error_message,
        );
    }

    /// The committed projection (what the consumer's value should be)
    pub fn values(&self) -> Vec<String> {
        self.tokens.committed_values()
    }

    pub fn caret_text(&self) -> &str {
        self.tokens.caret_text()
    }

    pub fn caret_position(&self) -> usize {
        self.tokens.caret_position()
    }

    /// Error message to display below the row, if any
    pub fn visible_error(&self) -> Option<&str> {
        self.validation.visible_error()
    }
}
