use string_rail::{invalid, ErrorField, Input, ValidationError};

#[test]
fn field_tags_use_lowercase_names() {
    let names: Vec<&str> = ErrorField::ALL.iter().map(|f| f.as_str()).collect();
    assert_eq!(
        names,
        ["type", "required", "length", "format", "greeting", "processing", "parameter", "locale"]
    );
    assert_eq!(ErrorField::Processing.to_string(), "processing");
}

#[test]
fn new_error_is_untagged() {
    let err = ValidationError::new("plain");
    assert_eq!(err.field(), None);
    assert!(err.params().is_empty());
    assert_eq!(err.to_string(), "plain");
    assert_eq!(format!("{err:#}"), "plain");
}

#[test]
fn alternate_display_includes_tag_and_params() {
    let err = ValidationError::new("Generated message exceeds maximum length of 10")
        .with_field(ErrorField::Length)
        .with_param("max", 10)
        .with_param("actual", 12);

    assert_eq!(err.to_string(), "Generated message exceeds maximum length of 10");
    assert_eq!(
        format!("{err:#}"),
        "[length] Generated message exceeds maximum length of 10 (max=10, actual=12)"
    );
}

#[test]
fn with_field_overrides_the_previous_tag() {
    let err = ValidationError::new("x").with_field(ErrorField::Type).with_field(ErrorField::Format);
    assert!(err.is(ErrorField::Format));
    assert!(!err.is(ErrorField::Type));
}

#[test]
fn param_lookup_returns_the_first_match() {
    let err = ValidationError::new("x").with_param("argument", "name").with_param("argument", "greeting");
    assert_eq!(err.param("argument"), Some("name"));
    assert_eq!(err.params().len(), 2);
    assert_eq!(err.param("missing"), None);
}

#[test]
fn invalid_macro_formats_and_tags() {
    let err = invalid!(Parameter, "value {} is below {}", -1, 1);
    assert_eq!(err.message(), "value -1 is below 1");
    assert_eq!(err.field(), Some(ErrorField::Parameter));

    let err = invalid!(Required, "Input cannot be empty");
    assert_eq!(err.message(), "Input cannot be empty");
}

#[test]
fn invalid_macro_expands_inline_captures() {
    let max = 100;
    let err = invalid!(Length, "Generated message exceeds maximum length of {max}");
    assert_eq!(err.message(), "Generated message exceeds maximum length of 100");
    assert!(err.is(ErrorField::Length));
}

#[test]
fn validation_error_is_a_std_error() {
    fn boxed(err: ValidationError) -> Box<dyn std::error::Error + Send + Sync> {
        Box::new(err)
    }

    let err = boxed(invalid!(Locale, "Failed to format date with locale xx"));
    assert_eq!(err.to_string(), "Failed to format date with locale xx");
}

#[test]
fn input_conversions_pick_the_right_kind() {
    let owned = String::from("text");
    let list = vec![1, 2, 3];

    assert_eq!(Input::from("text"), Input::Text("text"));
    assert_eq!(Input::from(&owned), Input::Text("text"));
    assert_eq!(Input::from(Some("text")), Input::Text("text"));
    assert_eq!(Input::from(None::<&str>), Input::Null);
    assert_eq!(Input::from(()), Input::Null);
    assert_eq!(Input::from(false), Input::Bool(false));
    assert_eq!(Input::from(7_u8), Input::Number(7.0));
    assert_eq!(Input::from(&list), Input::Sequence);
    assert_eq!(Input::from(list.as_slice()), Input::Sequence);
}

#[test]
fn input_kind_names() {
    assert_eq!(Input::Text("").kind(), "string");
    assert_eq!(Input::Number(0.0).to_string(), "number");
    assert_eq!(Input::Object.kind(), "object");
    assert_eq!(Input::Null.as_text(), None);
}

pub mod config;
