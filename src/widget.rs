//! LabelInput - the component runtime
//!
//! Holds the model together with the consumer's callbacks and a [`Host`]
//! (the UI layer that owns the real elements). Every message goes through
//! [`update`](crate::update::update); the returned commands are executed
//! here.
//!
//! The widget is controlled: a committed change is only reflected once the
//! consumer feeds the new value back through [`LabelInput::set_value`].
//!
//! ```ignore
//! let mut input = LabelInput::new(vec!["rust".into()], config, NoopHost, |values| {
//!     println!("{:?}", values)
//! });
//! if let Some(next) = input.dispatch(Msg::Key(Key::Enter)) {
//!     input.set_value(next);
//! }
//! ```

use crate::commands::{Cmd, TextTarget};
use crate::config::LabelInputConfig;
use crate::messages::Msg;
use crate::model::{LabelInputModel, Validator};
use crate::update::update;
use crate::util::{follow_input, ScrollRequest};

/// The UI layer behind the widget.
///
/// All methods default to no-ops so headless hosts only implement what they
/// need.
pub trait Host {
    /// Give keyboard focus to the live caret element
    fn focus_caret(&mut self) {}

    /// Replace the element's content with `text` and place its text caret
    fn set_text_caret(&mut self, _target: TextTarget, _text: &str, _offset: usize) {}

    /// Left offset of the wrapper element, if laid out
    fn wrapper_left(&self) -> Option<i32> {
        None
    }

    /// Left offset of the caret element, if laid out
    fn caret_left(&self) -> Option<i32> {
        None
    }

    /// Scroll the wrapper horizontally
    fn scroll_wrapper(&mut self, _request: ScrollRequest) {}
}

/// Host that ignores every effect
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHost;

impl Host for NoopHost {}

type ChangeCallback = Box<dyn FnMut(Vec<String>)>;
type FocusCallback = Box<dyn FnMut()>;

pub struct LabelInput<H: Host> {
    model: LabelInputModel,
    host: H,
    on_change: ChangeCallback,
    on_focus: Option<FocusCallback>,
    on_blur: Option<FocusCallback>,
}

impl<H: Host> LabelInput<H> {
    pub fn new(
        value: Vec<String>,
        config: LabelInputConfig,
        host: H,
        on_change: impl FnMut(Vec<String>) + 'static,
    ) -> Self {
        Self {
            model: LabelInputModel::new(&value, config),
            host,
            on_change: Box::new(on_change),
            on_focus: None,
            on_blur: None,
        }
    }

    /// Validate every token with `check`
    pub fn with_validator(self, check: impl Fn(&str) -> bool + 'static) -> Self {
        self.validated_by(Validator::new(check))
    }

    /// Install a prepared validator, e.g. [`Validator::rejecting`]
    pub fn validated_by(mut self, validator: Validator) -> Self {
        self.model.validator = Some(validator);
        self.model.validate();
        self
    }

    pub fn on_focus(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_focus = Some(Box::new(callback));
        self
    }

    pub fn on_blur(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_blur = Some(Box::new(callback));
        self
    }

    pub fn model(&self) -> &LabelInputModel {
        &self.model
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Feed the consumer's next value array
    pub fn set_value(&mut self, values: Vec<String>) {
        self.dispatch(Msg::SetValue(values));
    }

    /// Run one message to completion.
    ///
    /// Returns the value array handed to `on_change`, if the message produced
    /// one, so callers can feed it straight back with [`Self::set_value`].
    pub fn dispatch(&mut self, msg: Msg) -> Option<Vec<String>> {
        let cmd = update(&mut self.model, msg)?;
        let mut emitted = None;
        self.process_cmd(cmd, &mut emitted);
        emitted
    }

    fn process_cmd(&mut self, cmd: Cmd, emitted: &mut Option<Vec<String>>) {
        match cmd {
            Cmd::None => {}
            Cmd::EmitChange(values) => {
                (self.on_change)(values.clone());
                *emitted = Some(values);
            }
            Cmd::FocusCaret => self.host.focus_caret(),
            Cmd::SetTextCaret { target, offset } => {
                let text = match target {
                    TextTarget::Caret => Some(self.model.caret_text()),
                    TextTarget::Chip(id) => self.model.chips.get(id).map(|chip| chip.text()),
                };
                if let Some(text) = text {
                    self.host.set_text_caret(target, text, offset);
                }
            }
            Cmd::FollowCaret => {
                if let Some(request) = follow_input(self.host.wrapper_left(), self.host.caret_left())
                {
                    self.host.scroll_wrapper(request);
                }
            }
            Cmd::NotifyFocus => {
                if let Some(callback) = self.on_focus.as_mut() {
                    callback();
                }
            }
            Cmd::NotifyBlur => {
                if let Some(callback) = self.on_blur.as_mut() {
                    callback();
                }
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd, emitted);
                }
            }
        }
    }
}
