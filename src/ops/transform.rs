//! Capitalization, slug generation and truncation.

use crate::invalid;
use crate::trace::traced;
use crate::types::{Input, StringOperationConfig, TextResult};
use crate::validation::{validate_slug_text, validate_string};
use unicode_normalization::UnicodeNormalization;

/// Slug length bound used when the config sets none (or zero).
pub const DEFAULT_SLUG_LENGTH: usize = 100;
/// Bound used by [`truncate`] when the caller passes none.
pub const DEFAULT_TRUNCATE_LENGTH: usize = 100;
/// Suffix appended by [`truncate`] when the caller passes none.
pub const DEFAULT_SUFFIX: &str = "...";

/// Uppercases the first character and, unless the config preserves case,
/// lowercases the rest.
///
/// The input is checked with [`validate_string`] using the config's
/// `max_length` as the bound. Text consisting only of control characters
/// validates to an empty string and is returned as such.
///
/// ```
/// use string_rail::{capitalize, StringOperationConfig};
///
/// assert_eq!(capitalize("HELLO WORLD", None).unwrap(), "Hello world");
///
/// let config = StringOperationConfig::new().preserve_case(true);
/// assert_eq!(capitalize("hELLO wORLD", Some(&config)).unwrap(), "HELLO wORLD");
/// ```
pub fn capitalize<'a>(input: impl Into<Input<'a>>, config: Option<&StringOperationConfig>) -> TextResult {
    traced("capitalize", capitalize_text(input.into(), config))
}

/// Turns arbitrary text into a lowercase, hyphen-delimited, URL-safe slug.
///
/// Steps, in order: lowercase, trim, fold accents (NFD then drop combining
/// marks), drop anything but ASCII letters and digits, `_`, whitespace and
/// `-`, collapse whitespace/underscore/hyphen runs into one `-`, trim `-` from
/// both ends. A slug longer than the config's `max_length` (default
/// [`DEFAULT_SLUG_LENGTH`]) is cut to that length and then back to the hyphen
/// before its last segment.
///
/// # Errors
///
/// - any [`validate_slug_text`] failure
/// - `processing` if nothing is left after the transformation
///
/// ```
/// use string_rail::{slugify, ErrorField};
///
/// assert_eq!(slugify("Hello World! Comment ça va?", None).unwrap(), "hello-world-comment-ca-va");
/// assert_eq!(slugify("Café & Résumé", None).unwrap(), "cafe-resume");
/// assert!(slugify("!@#$%^&*()", None).unwrap_err().is(ErrorField::Processing));
/// ```
pub fn slugify<'a>(input: impl Into<Input<'a>>, config: Option<&StringOperationConfig>) -> TextResult {
    traced("slugify", slugify_text(input.into(), config))
}

/// Shortens text to at most `max_length` characters, ending it with `suffix`.
///
/// Text that already fits is returned unchanged. Otherwise the first
/// `max_length - len(suffix)` characters are kept (none if the suffix is
/// longer than the bound) and the suffix is appended verbatim, so a suffix
/// longer than `max_length` produces a result longer than `max_length`.
///
/// # Errors
///
/// - any [`validate_string`] failure
/// - `parameter` if `max_length` is zero
///
/// ```
/// use string_rail::truncate;
///
/// let text = "This is a very long text that should be truncated";
/// assert_eq!(truncate(text, Some(20), None).unwrap(), "This is a very lo...");
/// assert_eq!(truncate("Short text", Some(20), None).unwrap(), "Short text");
/// assert_eq!(truncate("Hello World", Some(5), Some("...........")).unwrap(), "...........");
/// ```
pub fn truncate<'a>(input: impl Into<Input<'a>>, max_length: Option<usize>, suffix: Option<&str>) -> TextResult {
    traced("truncate", truncate_text(input.into(), max_length, suffix))
}

fn capitalize_text(input: Input<'_>, config: Option<&StringOperationConfig>) -> TextResult {
    let text = validate_string(input, config.and_then(StringOperationConfig::max_length))?;

    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return Ok(String::new());
    };

    let mut result = String::with_capacity(text.len());
    result.extend(first.to_uppercase());
    if config.is_some_and(StringOperationConfig::preserves_case) {
        result.push_str(chars.as_str());
    } else {
        result.push_str(&chars.as_str().to_lowercase());
    }
    Ok(result)
}

fn slugify_text(input: Input<'_>, config: Option<&StringOperationConfig>) -> TextResult {
    let text = validate_slug_text(input)?;

    let mut slug = collapse_separators(&fold_accents(text.to_lowercase().trim()));

    let max_length = config
        .and_then(StringOperationConfig::max_length)
        .filter(|&max| max > 0)
        .unwrap_or(DEFAULT_SLUG_LENGTH);
    if slug.len() > max_length {
        // Every char left in the slug is ASCII, so byte offsets are char offsets.
        slug.truncate(max_length);
        if let Some(last_hyphen) = slug.rfind('-') {
            slug.truncate(last_hyphen);
        }
    }

    if slug.is_empty() {
        return Err(invalid!(Processing, "Generated slug is empty after processing"));
    }
    Ok(slug)
}

fn truncate_text(input: Input<'_>, max_length: Option<usize>, suffix: Option<&str>) -> TextResult {
    let text = validate_string(input, None)?;

    let max_length = max_length.unwrap_or(DEFAULT_TRUNCATE_LENGTH);
    if max_length < 1 {
        return Err(invalid!(Parameter, "max_length must be greater than 0").with_param("max_length", max_length));
    }

    if text.chars().count() <= max_length {
        return Ok(text);
    }

    let suffix = suffix.unwrap_or(DEFAULT_SUFFIX);
    let keep = max_length.saturating_sub(suffix.chars().count());
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(suffix);
    Ok(truncated)
}

/// Decomposes accented characters and drops the combining diacritical marks.
fn fold_accents(text: &str) -> String {
    text.nfd().filter(|c| !matches!(c, '\u{300}'..='\u{36f}')).collect()
}

/// Keeps word characters, joining every whitespace/underscore/hyphen run
/// with a single `-` and dropping separators at either end.
fn collapse_separators(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else if c == '_' || c == '-' || c.is_whitespace() {
            pending_separator = true;
        }
    }

    slug
}
