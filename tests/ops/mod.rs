use string_rail::{capitalize, hello, slugify, truncate, welcome, ErrorField};

#[test]
fn every_operation_rejects_non_text_with_type() {
    let results = [
        hello(123, None, None),
        welcome(None::<&str>, None),
        capitalize(123, None),
        slugify(true, None),
        truncate(4.5, Some(10), None),
    ];

    for result in results {
        assert_eq!(result.unwrap_err().field(), Some(ErrorField::Type));
    }
}

#[test]
fn every_operation_rejects_blank_with_required() {
    let results = [
        hello("   ", None, None),
        welcome("", None),
        capitalize("", None),
        slugify("  ", None),
        truncate("\n", None, None),
    ];

    for result in results {
        assert_eq!(result.unwrap_err().field(), Some(ErrorField::Required));
    }
}
