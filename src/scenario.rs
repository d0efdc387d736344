//! Headless scenario replay
//!
//! A scenario is a YAML file describing an initial value, option overrides
//! and a list of user steps. Steps are translated into the messages a real
//! host would send (input events followed by key releases, focus changes,
//! pointer presses) and run through a [`LabelInput`] with a [`NoopHost`].
//!
//! ```yaml
//! name: commit at caret
//! value: [foo, baz]
//! reject: "@"
//! steps:
//!   - action: click_gap
//!     index: 1
//!   - action: type
//!     text: "bar\n"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::LabelInputConfig;
use crate::keymap::{parse_key, Key, KeymapError};
use crate::messages::{CaretMsg, ChipMsg, HitTarget, Msg};
use crate::model::{EntryId, Validator};
use crate::view::render_row;
use crate::widget::{LabelInput, NoopHost};

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    /// Initial value array
    #[serde(default)]
    pub value: Vec<String>,
    #[serde(default)]
    pub disable_spacing: Option<bool>,
    #[serde(default)]
    pub error_message: Option<String>,
    /// Reject tokens containing any of these characters
    #[serde(default)]
    pub reject: Option<String>,
    /// Feed every emitted change back as the next value (a typical consumer)
    #[serde(default = "default_feed_back")]
    pub feed_back: bool,
    pub steps: Vec<Step>,
}

fn default_feed_back() -> bool {
    true
}

/// One user step. Chip indexes are positions among the committed tokens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Type text into the caret, one char at a time (`\n` presses Enter)
    Type { text: String },
    /// Press and release a key ("enter", "left", ...)
    Key { key: String },
    /// Erase one caret char (if any), then release Backspace
    Backspace,
    ClickGap { index: usize },
    ClickWrapper,
    ClickChip { index: usize },
    CloseChip { index: usize },
    /// Replace a chip's content (the chip should have been clicked first)
    EditChip { index: usize, text: String },
    BlurChip { index: usize },
    /// The consumer pushes a value of its own
    SetValue { value: Vec<String> },
}

/// Errors from loading or replaying a scenario
#[derive(Debug)]
pub enum ScenarioError {
    Io(String),
    Parse(String),
    Key(KeymapError),
    UnknownChip(usize),
}

impl std::fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioError::Io(e) => write!(f, "IO error: {}", e),
            ScenarioError::Parse(e) => write!(f, "Parse error: {}", e),
            ScenarioError::Key(e) => write!(f, "{}", e),
            ScenarioError::UnknownChip(index) => write!(f, "No chip at index {}", index),
        }
    }
}

impl std::error::Error for ScenarioError {}

impl From<KeymapError> for ScenarioError {
    fn from(e: KeymapError) -> Self {
        ScenarioError::Key(e)
    }
}

/// Final state after a replay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioOutcome {
    pub name: Option<String>,
    /// Every value array the widget emitted, in order
    pub changes: Vec<Vec<String>>,
    /// Committed tokens at the end
    pub value: Vec<String>,
    pub caret_text: String,
    pub caret_position: usize,
    /// Error message visible at the end, if any
    pub error: Option<String>,
    pub row: String,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ScenarioError::Io(e.to_string()))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ScenarioError> {
        serde_yaml::from_str(yaml).map_err(|e| ScenarioError::Parse(e.to_string()))
    }

    /// Apply this scenario's option overrides on top of `base`
    pub fn config(&self, base: &LabelInputConfig) -> LabelInputConfig {
        let mut config = base.clone();
        if let Some(disable_spacing) = self.disable_spacing {
            config.disable_spacing = disable_spacing;
        }
        if let Some(message) = &self.error_message {
            config.error_message = message.clone();
        }
        config
    }

    /// Replay every step.
    ///
    /// `reject` from the scenario wins over the `reject` argument.
    pub fn run(
        &self,
        base: &LabelInputConfig,
        reject: Option<&str>,
    ) -> Result<ScenarioOutcome, ScenarioError> {
        let mut input = LabelInput::new(
            self.value.clone(),
            self.config(base),
            NoopHost,
            |values: Vec<String>| tracing::debug!(?values, "change emitted"),
        );
        if let Some(chars) = self.reject.as_deref().or(reject) {
            input = input.validated_by(Validator::rejecting(chars));
        }

        let mut driver = Driver {
            input,
            feed_back: self.feed_back,
            changes: Vec::new(),
        };

        // The user starts by focusing the caret
        driver.send(Msg::Caret(CaretMsg::Focus));

        for step in &self.steps {
            tracing::trace!(?step, "replaying step");
            driver.step(step)?;
        }

        let model = driver.input.model();
        Ok(ScenarioOutcome {
            name: self.name.clone(),
            changes: driver.changes.clone(),
            value: model.values(),
            caret_text: model.caret_text().to_string(),
            caret_position: model.caret_position(),
            error: model.visible_error().map(str::to_string),
            row: render_row(model),
        })
    }
}

struct Driver {
    input: LabelInput<NoopHost>,
    feed_back: bool,
    changes: Vec<Vec<String>>,
}

impl Driver {
    fn send(&mut self, msg: Msg) {
        if let Some(next) = self.input.dispatch(msg) {
            self.changes.push(next.clone());
            if self.feed_back {
                self.input.set_value(next);
            }
        }
    }

    fn chip_id(&self, index: usize) -> Result<EntryId, ScenarioError> {
        self.input
            .model()
            .tokens
            .committed_id_at(index)
            .ok_or(ScenarioError::UnknownChip(index))
    }

    fn blur_focused_chips(&mut self) {
        let focused: Vec<EntryId> = self
            .input
            .model()
            .tokens
            .committed()
            .map(|entry| entry.id)
            .filter(|id| {
                self.input
                    .model()
                    .chips
                    .get(*id)
                    .is_some_and(|chip| chip.focused)
            })
            .collect();

        for id in focused {
            self.send(Msg::Chip(ChipMsg::Blur(id)));
        }
    }

    /// Move focus into the caret element, as the browser would after a
    /// click that the widget turned into a caret focus
    fn focus_caret(&mut self) {
        if !self.input.model().focus.caret {
            self.send(Msg::Caret(CaretMsg::Focus));
        }
    }

    fn step(&mut self, step: &Step) -> Result<(), ScenarioError> {
        match step {
            Step::Type { text } => {
                for ch in text.chars() {
                    let raw = format!("{}{}", self.input.model().caret_text(), ch);
                    let selection_offset = raw.chars().count();
                    self.send(Msg::Caret(CaretMsg::Input {
                        text: raw,
                        selection_offset,
                    }));
                    self.send(Msg::Key(Key::from_char(ch)));
                }
            }
            Step::Key { key } => {
                let key = parse_key(key)?;
                self.send(Msg::Key(key));
            }
            Step::Backspace => {
                let mut text = self.input.model().caret_text().to_string();
                if text.pop().is_some() {
                    let selection_offset = text.chars().count();
                    self.send(Msg::Caret(CaretMsg::Input {
                        text,
                        selection_offset,
                    }));
                }
                self.send(Msg::Key(Key::Backspace));
            }
            Step::ClickGap { index } => {
                self.blur_focused_chips();
                self.send(Msg::Pointer(HitTarget::Gap(*index)));
                self.focus_caret();
            }
            Step::ClickWrapper => {
                self.blur_focused_chips();
                self.send(Msg::Pointer(HitTarget::Wrapper));
                self.focus_caret();
            }
            Step::ClickChip { index } => {
                if self.input.model().focus.caret {
                    self.send(Msg::Caret(CaretMsg::Blur));
                }
                self.blur_focused_chips();
                let id = self.chip_id(*index)?;
                self.send(Msg::Pointer(HitTarget::Chip(id)));
                self.send(Msg::Chip(ChipMsg::Focus(id)));
            }
            Step::CloseChip { index } => {
                let id = self.chip_id(*index)?;
                self.send(Msg::Pointer(HitTarget::ChipClose(id)));
            }
            Step::EditChip { index, text } => {
                let id = self.chip_id(*index)?;
                self.send(Msg::Chip(ChipMsg::Input {
                    id,
                    text: text.clone(),
                    selection_offset: text.chars().count(),
                }));
            }
            Step::BlurChip { index } => {
                let id = self.chip_id(*index)?;
                self.send(Msg::Chip(ChipMsg::Blur(id)));
            }
            Step::SetValue { value } => {
                self.input.set_value(value.clone());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        let yaml = r#"
name: demo
value: [a]
steps:
  - action: type
    text: "bc "
  - action: key
    key: left
  - action: backspace
  - action: click_gap
    index: 0
  - action: click_wrapper
  - action: edit_chip
    index: 0
    text: x
"#;
        let scenario = Scenario::from_yaml(yaml).unwrap();
        assert_eq!(scenario.name.as_deref(), Some("demo"));
        assert!(scenario.feed_back);
        assert_eq!(scenario.steps.len(), 6);
        assert_eq!(
            scenario.steps[0],
            Step::Type {
                text: "bc ".to_string()
            }
        );
        assert_eq!(scenario.steps[2], Step::Backspace);
        assert_eq!(scenario.steps[4], Step::ClickWrapper);
    }

    #[test]
    fn test_unknown_action_is_an_error() {
        let yaml = "steps:\n  - action: dance\n";
        assert!(matches!(
            Scenario::from_yaml(yaml),
            Err(ScenarioError::Parse(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let scenario =
            Scenario::from_yaml("disable_spacing: true\nerror_message: nope\nsteps: []\n")
                .unwrap();
        let config = scenario.config(&LabelInputConfig::default());
        assert!(config.disable_spacing);
        assert_eq!(config.error_message, "nope");
    }
}
