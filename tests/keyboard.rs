//! Keyboard tests - delimiters, backspace, arrows and key routing

mod common;

use common::{
    apply, apply_raw, backspace, focus_chip, key, press, row, test_model, test_model_with_config,
    type_text,
};
use label_input::config::LabelInputConfig;
use label_input::keymap::Key;
use label_input::messages::{Msg, WrapperMsg};
use label_input::model::LabelInputModel;
use label_input::update::move_caret_to;
use label_input::Cmd;

fn no_spacing() -> LabelInputConfig {
    LabelInputConfig {
        disable_spacing: true,
        ..LabelInputConfig::default()
    }
}

// ========================================================================
// Delimiter tests
// ========================================================================

#[test]
fn test_space_commits_when_spacing_enabled() {
    let mut model = test_model(&[]);
    let changes = type_text(&mut model, "foo bar");

    assert_eq!(changes, vec![vec!["foo"]]);
    assert_eq!(model.values(), vec!["foo"]);
    assert_eq!(model.caret_text(), "bar");
}

#[test]
fn test_space_does_not_commit_when_spacing_disabled() {
    let mut model = test_model_with_config(&[], no_spacing());
    let changes = type_text(&mut model, "foo bar");

    assert!(changes.is_empty());
    assert!(model.values().is_empty());
    assert_eq!(model.caret_text(), "foobar");
}

#[test]
fn test_enter_commits_when_spacing_disabled() {
    let mut model = test_model_with_config(&[], no_spacing());
    let changes = type_text(&mut model, "a b\n");

    assert_eq!(changes, vec![vec!["ab"]]);
}

#[test]
fn test_spacing_disabled_restores_text_caret() {
    let mut model = test_model_with_config(&[], no_spacing());
    type_text(&mut model, "ab");

    let cmd = apply_raw(
        &mut model,
        Msg::Caret(label_input::messages::CaretMsg::Input {
            text: "a b".to_string(),
            selection_offset: 2,
        }),
    );
    assert_eq!(model.caret_text(), "ab");
    assert_eq!(
        cmd,
        Some(Cmd::SetTextCaret {
            target: label_input::commands::TextTarget::Caret,
            offset: 1,
        })
    );
}

// ========================================================================
// Backspace tests
// ========================================================================

#[test]
fn test_backspace_removes_preceding_token() {
    let mut model = test_model(&["a", "b", "c"]);
    let change = press(&mut model, "backspace");

    assert_eq!(change, Some(vec!["a".to_string(), "b".to_string()]));
    assert_eq!(model.caret_position(), 2);
    assert_eq!(row(&model), "[a] [b] _");
}

#[test]
fn test_backspace_in_the_middle() {
    let mut model = test_model(&["a", "b", "c"]);
    move_caret_to(&mut model, 2, false, false);

    let change = press(&mut model, "backspace");
    assert_eq!(change, Some(vec!["a".to_string(), "c".to_string()]));
    assert_eq!(model.caret_position(), 1);
    assert_eq!(row(&model), "[a] _ [c]");
}

#[test]
fn test_backspace_at_start_is_noop() {
    let mut model = test_model(&["a", "b"]);
    move_caret_to(&mut model, 0, false, false);

    assert_eq!(press(&mut model, "backspace"), None);
    assert_eq!(model.values(), vec!["a", "b"]);
    assert_eq!(model.caret_position(), 0);
}

#[test]
fn test_backspace_with_only_caret_is_noop() {
    let mut model = test_model(&[]);
    assert_eq!(press(&mut model, "backspace"), None);
}

#[test]
fn test_backspace_erasing_last_char_keeps_tokens() {
    let mut model = test_model(&["a", "b"]);
    type_text(&mut model, "x");

    // The keystroke that empties the caret must not also delete "b"
    assert_eq!(backspace(&mut model), None);
    assert_eq!(model.caret_text(), "");
    assert_eq!(model.values(), vec!["a", "b"]);

    // The next one does
    assert_eq!(backspace(&mut model), Some(vec!["a".to_string()]));
}

#[test]
fn test_delete_behaves_like_backspace() {
    let mut model = test_model(&["a", "b"]);
    assert_eq!(press(&mut model, "delete"), Some(vec!["a".to_string()]));
}

// ========================================================================
// Arrow tests
// ========================================================================

#[test]
fn test_arrow_left_moves_and_follows() {
    let mut model = test_model(&["a", "b"]);
    let cmd = apply_raw(&mut model, Msg::Key(key("left"))).unwrap();

    assert!(cmd.contains(&Cmd::FocusCaret));
    assert!(cmd.contains(&Cmd::FollowCaret));
    assert_eq!(model.caret_position(), 1);
    assert_eq!(row(&model), "[a] _ [b]");
}

#[test]
fn test_arrow_left_at_start_is_noop() {
    let mut model = test_model(&["a", "b"]);
    move_caret_to(&mut model, 0, false, false);

    assert_eq!(apply_raw(&mut model, Msg::Key(key("left"))), None);
    assert_eq!(model.caret_position(), 0);
}

#[test]
fn test_arrow_left_with_caret_text_is_noop() {
    let mut model = test_model(&["a"]);
    type_text(&mut model, "x");

    assert_eq!(apply_raw(&mut model, Msg::Key(key("left"))), None);
    assert_eq!(model.caret_position(), 1);
}

#[test]
fn test_arrow_right_at_end_is_noop() {
    let mut model = test_model(&["a", "b"]);
    assert_eq!(apply_raw(&mut model, Msg::Key(key("right"))), None);
    assert_eq!(model.caret_position(), 2);
}

#[test]
fn test_arrow_right_moves_and_follows() {
    let mut model = test_model(&["a", "b"]);
    move_caret_to(&mut model, 0, false, false);

    let cmd = apply_raw(&mut model, Msg::Key(key("arrowright"))).unwrap();
    assert!(cmd.contains(&Cmd::FollowCaret));
    assert_eq!(model.caret_position(), 1);
}

#[test]
fn test_arrow_right_carries_caret_text() {
    let mut model = test_model(&["a", "b"]);
    move_caret_to(&mut model, 0, false, false);
    type_text(&mut model, "x");

    apply_raw(&mut model, Msg::Key(key("right")));
    assert_eq!(row(&model), "[a] x_ [b]");
}

#[test]
fn test_arrow_right_with_text_and_only_caret_is_noop() {
    let mut model = test_model(&[]);
    type_text(&mut model, "x");
    assert_eq!(apply_raw(&mut model, Msg::Key(key("right"))), None);
}

// ========================================================================
// Routing tests
// ========================================================================

#[test]
fn test_unlisted_keys_are_ignored() {
    let mut model = test_model(&["a", "b"]);
    for name in ["escape", "tab", "up", "down", "home", "end", "shift"] {
        assert_eq!(apply_raw(&mut model, Msg::Key(key(name))), None, "{}", name);
    }
    assert_eq!(model.values(), vec!["a", "b"]);
}

#[test]
fn test_host_key_values_dispatch() {
    let mut model = test_model(&["a", "b"]);
    assert_eq!(
        apply(&mut model, Msg::Key(Key::from_key_value("Backspace"))),
        Some(vec!["a".to_string()])
    );
    assert_eq!(
        apply(&mut model, Msg::Key(Key::from_key_value("Escape"))),
        None
    );
    assert_eq!(model.values(), vec!["a"]);
}

#[test]
fn test_keys_ignored_while_chip_focused() {
    let mut model = test_model(&["a", "b"]);
    focus_chip(&mut model, 0);

    assert_eq!(press(&mut model, "backspace"), None);
    assert_eq!(model.values(), vec!["a", "b"]);
}

#[test]
fn test_keys_ignored_without_wrapper_focus() {
    let mut model = LabelInputModel::new(&["a", "b"], LabelInputConfig::default());
    assert_eq!(press(&mut model, "backspace"), None);

    let mut model = test_model(&["a", "b"]);
    apply(&mut model, Msg::Wrapper(WrapperMsg::Blur));
    assert_eq!(press(&mut model, "backspace"), None);
}

#[test]
fn test_editing_flag_resets_after_keystroke() {
    let mut model = test_model(&["a"]);
    type_text(&mut model, "x");
    assert!(!model.editing);
}
