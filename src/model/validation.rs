//! Token validation state
//!
//! Validation is soft: failing tokens block delimiter commits and produce a
//! single shared error message, but never block editing or deletion.

use std::fmt;
use std::rc::Rc;

use super::entry::{EntryId, TokenEntry};

/// Consumer-supplied token predicate
#[derive(Clone)]
pub struct Validator(Rc<dyn Fn(&str) -> bool>);

impl Validator {
    pub fn new(check: impl Fn(&str) -> bool + 'static) -> Self {
        Self(Rc::new(check))
    }

    /// Validator that rejects tokens containing any of `chars`
    pub fn rejecting(chars: &str) -> Self {
        let rejected: Vec<char> = chars.chars().collect();
        Self::new(move |token| !token.chars().any(|c| rejected.contains(&c)))
    }

    #[inline]
    pub fn accepts(&self, token: &str) -> bool {
        (self.0)(token)
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Validator(..)")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationState {
    /// Shared error message, set while any token fails validation
    pub error: Option<String>,
    /// Whether the error may be shown right now
    pub should_validate: bool,
    /// Entries that failed the last validation run
    pub invalid: Vec<EntryId>,
}

impl ValidationState {
    /// Check every entry independently.
    ///
    /// The caret is only checked when it holds text. Without a validator the
    /// state is left untouched.
    pub fn run(&mut self, validator: Option<&Validator>, entries: &[TokenEntry], message: &str) {
        let Some(validator) = validator else {
            return;
        };

        self.invalid = entries
            .iter()
            .filter(|entry| {
                if entry.is_caret() {
                    !entry.text.is_empty() && !validator.accepts(&entry.text)
                } else {
                    !validator.accepts(&entry.text)
                }
            })
            .map(|entry| entry.id)
            .collect();

        let had_error = self.error.is_some();
        self.error = (!self.invalid.is_empty()).then(|| message.to_string());

        if had_error != self.error.is_some() {
            tracing::debug!(
                invalid = self.invalid.len(),
                "validation {}",
                if self.error.is_some() { "failed" } else { "cleared" }
            );
        }
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// The message to display, if any
    pub fn visible_error(&self) -> Option<&str> {
        if self.should_validate {
            self.error.as_deref()
        } else {
            None
        }
    }

    pub fn is_invalid(&self, id: EntryId) -> bool {
        self.invalid.contains(&id)
    }
}
