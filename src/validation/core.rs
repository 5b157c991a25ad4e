use crate::invalid;
use crate::types::{Input, TextResult};

/// Default bound applied by [`validate_string`] when the caller passes none.
pub const DEFAULT_MAX_LENGTH: usize = 1000;
/// Bound applied to names.
pub const NAME_MAX_LENGTH: usize = 100;
/// Bound applied to text fed into slug generation.
pub const SLUG_TEXT_MAX_LENGTH: usize = 200;

/// Validates that `input` is non-blank text within `max_length` characters
/// and strips ASCII control characters from it.
///
/// Checks run in a fixed order, and the first failure wins:
///
/// 1. `type` - the input is not text
/// 2. `required` - the text is empty after trimming whitespace
/// 3. `length` - the raw text is longer than `max_length` (default
///    [`DEFAULT_MAX_LENGTH`]) characters
///
/// The returned text is not trimmed; only U+0000..=U+001F and U+007F are
/// removed.
///
/// # Examples
///
/// ```
/// use string_rail::{validate_string, ErrorField};
///
/// assert_eq!(validate_string("tab\there", None).unwrap(), "tabhere");
/// assert!(validate_string(12, None).unwrap_err().is(ErrorField::Type));
/// assert!(validate_string("   ", None).unwrap_err().is(ErrorField::Required));
/// assert!(validate_string("abcdef", Some(5)).unwrap_err().is(ErrorField::Length));
/// ```
pub fn validate_string<'a>(input: impl Into<Input<'a>>, max_length: Option<usize>) -> TextResult {
    let input = input.into();
    let Some(text) = input.as_text() else {
        return Err(invalid!(Type, "Input must be a string").with_param("actual", input.kind()));
    };

    if text.trim().is_empty() {
        return Err(invalid!(Required, "Input cannot be empty"));
    }

    let max_length = max_length.unwrap_or(DEFAULT_MAX_LENGTH);
    let length = text.chars().count();
    if length > max_length {
        return Err(invalid!(Length, "Input exceeds maximum length of {} characters", max_length)
            .with_param("max", max_length)
            .with_param("actual", length));
    }

    Ok(text.chars().filter(|c| !is_control(*c)).collect())
}

/// Validates a person's name.
///
/// Applies [`validate_string`] with a [`NAME_MAX_LENGTH`] bound, then
/// requires every character to be a Latin letter (`A-Z`, `a-z`, `À-ÿ`),
/// whitespace, a hyphen or an apostrophe. Returns the trimmed name.
///
/// # Examples
///
/// ```
/// use string_rail::{validate_name, ErrorField};
///
/// assert_eq!(validate_name("  Jean-Luc O'Brien ").unwrap(), "Jean-Luc O'Brien");
/// assert_eq!(validate_name("François").unwrap(), "François");
/// assert!(validate_name("John123").unwrap_err().is(ErrorField::Format));
/// ```
pub fn validate_name<'a>(input: impl Into<Input<'a>>) -> TextResult {
    let name = validate_string(input, Some(NAME_MAX_LENGTH))?;

    if name.is_empty() || !name.chars().all(is_name_char) {
        return Err(invalid!(Format, "Name can only contain letters, spaces, hyphens, and apostrophes"));
    }

    Ok(name.trim().to_owned())
}

/// Validates text destined for [`slugify`](crate::slugify): [`validate_string`]
/// with a [`SLUG_TEXT_MAX_LENGTH`] bound and no further restriction.
pub fn validate_slug_text<'a>(input: impl Into<Input<'a>>) -> TextResult {
    validate_string(input, Some(SLUG_TEXT_MAX_LENGTH))
}

#[inline]
fn is_control(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{1f}' | '\u{7f}')
}

#[inline]
fn is_name_char(c: char) -> bool {
    matches!(c, 'a'..='z' | 'A'..='Z' | 'À'..='ÿ' | '\'' | '-') || c.is_whitespace()
}
