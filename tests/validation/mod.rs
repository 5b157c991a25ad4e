use string_rail::validation::{validate_name, validate_slug_text, validate_string};
use string_rail::validation::{DEFAULT_MAX_LENGTH, NAME_MAX_LENGTH, SLUG_TEXT_MAX_LENGTH};
use string_rail::ErrorField;

#[test]
fn validate_string_strips_ascii_control_characters() {
    let cleaned = validate_string("hello\u{0}wor\u{1f}ld\u{7f}", None).unwrap();
    assert_eq!(cleaned, "helloworld");
}

#[test]
fn validate_string_does_not_trim() {
    assert_eq!(validate_string("  padded  ", None).unwrap(), "  padded  ");
}

#[test]
fn validate_string_default_bound_is_inclusive() {
    let at_bound = "a".repeat(DEFAULT_MAX_LENGTH);
    assert_eq!(validate_string(at_bound.as_str(), None).unwrap().len(), DEFAULT_MAX_LENGTH);

    let over = "a".repeat(DEFAULT_MAX_LENGTH + 1);
    let err = validate_string(over.as_str(), None).unwrap_err();
    assert_eq!(err.field(), Some(ErrorField::Length));
    assert_eq!(err.message(), "Input exceeds maximum length of 1000 characters");
    assert_eq!(err.param("max"), Some("1000"));
    assert_eq!(err.param("actual"), Some("1001"));
}

#[test]
fn validate_name_trims_the_accepted_name() {
    assert_eq!(validate_name("  Jean-Luc O'Brien  ").unwrap(), "Jean-Luc O'Brien");
}

#[test]
fn validate_name_accepts_latin1_letters() {
    for name in ["François", "Zoë", "Ñúñez", "Øystein", "Ève"] {
        assert_eq!(validate_name(name).unwrap(), name);
    }
}

#[test]
fn validate_name_rejects_digits_and_markup() {
    for name in ["John123", "John<script>alert(\"xss\")</script>", "a.b", "Zoë!", "名前"] {
        let err = validate_name(name).unwrap_err();
        assert_eq!(err.field(), Some(ErrorField::Format), "{name:?} should be rejected");
        assert_eq!(err.message(), "Name can only contain letters, spaces, hyphens, and apostrophes");
    }
}

#[test]
fn validate_name_bound_is_one_hundred_characters() {
    let at_bound = "a".repeat(NAME_MAX_LENGTH);
    assert!(validate_name(at_bound.as_str()).is_ok());

    let over = "a".repeat(NAME_MAX_LENGTH + 1);
    assert!(validate_name(over.as_str()).unwrap_err().is(ErrorField::Length));
}

#[test]
fn validate_slug_text_allows_symbols_but_caps_length() {
    assert_eq!(validate_slug_text("!@#$%^&*()").unwrap(), "!@#$%^&*()");

    let over = "a".repeat(SLUG_TEXT_MAX_LENGTH + 1);
    let err = validate_slug_text(over.as_str()).unwrap_err();
    assert!(err.is(ErrorField::Length));
    assert_eq!(err.param("max"), Some("200"));
}
