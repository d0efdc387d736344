//! Validation tests - error visibility, commit suppression, invalid chips

mod common;

use common::{
    backspace, chip_id, focus_chip, press, row, test_model, test_model_rejecting, type_text,
};
use label_input::config::LabelInputConfig;
use label_input::model::{LabelInputModel, Validator};

#[test]
fn test_invalid_token_blocks_commit_and_shows_error() {
    let mut model = test_model_rejecting(&[], "@");
    let changes = type_text(&mut model, "a@b\n");

    assert!(changes.is_empty());
    assert_eq!(model.caret_text(), "a@b");
    assert_eq!(model.visible_error(), Some("Invalid input value"));
}

#[test]
fn test_error_hidden_until_delimiter() {
    let mut model = test_model_rejecting(&[], "@");
    type_text(&mut model, "a@");

    assert!(model.validation.has_error());
    assert_eq!(model.visible_error(), None);

    let caret = model.tokens.caret().unwrap().id;
    assert!(model.validation.is_invalid(caret));

    press(&mut model, "enter");
    assert_eq!(model.visible_error(), Some("Invalid input value"));
}

#[test]
fn test_fixing_the_text_clears_the_error() {
    let mut model = test_model_rejecting(&[], "@");
    type_text(&mut model, "a@\n");
    assert!(model.visible_error().is_some());

    backspace(&mut model);
    assert_eq!(model.caret_text(), "a");
    assert!(!model.validation.has_error());
    assert_eq!(model.visible_error(), None);

    assert_eq!(press(&mut model, "enter"), Some(vec!["a".to_string()]));
}

#[test]
fn test_space_is_a_delimiter_for_validation_too() {
    let mut model = test_model_rejecting(&[], "@");
    let changes = type_text(&mut model, "x@ ");

    assert!(changes.is_empty());
    assert_eq!(model.visible_error(), Some("Invalid input value"));
}

#[test]
fn test_configured_error_message() {
    let config = LabelInputConfig {
        error_message: "No at signs".to_string(),
        ..LabelInputConfig::default()
    };
    let mut model = common::test_model_with_config(&[], config)
        .with_validator(Validator::rejecting("@"));
    type_text(&mut model, "@\n");

    assert_eq!(model.visible_error(), Some("No at signs"));
}

#[test]
fn test_invalid_initial_value_marks_chip() {
    let mut model = test_model_rejecting(&["ok", "a@b"], "@");

    assert!(model.validation.has_error());
    assert!(!model.validation.is_invalid(chip_id(&model, 0)));
    assert!(model.validation.is_invalid(chip_id(&model, 1)));
    assert_eq!(model.visible_error(), None);
    assert_eq!(row(&model), "[ok] [!a@b] _");

    // Focusing a chip turns visibility on
    focus_chip(&mut model, 0);
    assert_eq!(model.visible_error(), Some("Invalid input value"));
}

#[test]
fn test_invalid_chip_blocks_commit_of_valid_text() {
    let mut model = test_model_rejecting(&["a@b"], "@");
    let changes = type_text(&mut model, "ok\n");

    assert!(changes.is_empty());
    assert_eq!(model.values(), vec!["a@b"]);
}

#[test]
fn test_empty_caret_is_not_validated() {
    let model = LabelInputModel::new(&["a"], LabelInputConfig::default())
        .with_validator(Validator::new(|token| !token.is_empty()));

    assert!(!model.validation.has_error());
}

#[test]
fn test_without_validator_everything_commits() {
    let mut model = test_model(&[]);
    let changes = type_text(&mut model, "a@b\n");

    assert_eq!(changes, vec![vec!["a@b"]]);
    assert_eq!(model.visible_error(), None);
}
