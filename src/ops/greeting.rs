//! Greeting generation.
//!
//! ```
//! use string_rail::{hello, GreetingConfig};
//!
//! assert_eq!(hello("John", None, None).unwrap(), "Hello, John!");
//! assert_eq!(hello("Alice", Some("hi"), None).unwrap(), "Hi, Alice!");
//!
//! let shouting = GreetingConfig::new().preserve_case(true);
//! assert_eq!(hello("john", Some("HELLO"), Some(&shouting)).unwrap(), "HELLO, john!");
//! ```

use crate::invalid;
use crate::locale::{FixedClock, LocalizedFormatter, SystemClock, DEFAULT_LOCALE};
use crate::trace::traced;
use crate::traits::{Clock, ResultExt, TimestampFormatter};
use crate::types::{GreetingConfig, Input, TextResult};
use crate::validation::validate_name;

/// Greeting word used when neither the caller nor the config supplies one.
pub const DEFAULT_GREETING: &str = "Hello";

/// Builds `"<Greeting>, <Name>!"`.
///
/// The greeting comes from `greeting`, then
/// [`GreetingConfig::default_greeting`], then [`DEFAULT_GREETING`]. Unless
/// the config preserves case, its first character is uppercased and the rest
/// lowercased.
///
/// # Errors
///
/// - any [`validate_name`] failure for `name`
/// - `greeting` if the greeting is blank
/// - `length` if the config sets a non-zero `max_length` and the message is
///   longer
pub fn hello<'a>(
    name: impl Into<Input<'a>>,
    greeting: Option<&str>,
    config: Option<&GreetingConfig>,
) -> TextResult {
    traced("hello", compose_hello(name.into(), greeting, config))
}

/// Builds `"Bienvenue <Name>! Il est actuellement <timestamp>"` using the
/// local wall clock.
///
/// The timestamp is rendered for `config.locale`, falling back to
/// [`DEFAULT_LOCALE`]. See [`welcome_with`] for the full contract; this is
/// that function with [`SystemClock`] and [`LocalizedFormatter`].
///
/// ```
/// use string_rail::{welcome, GreetingConfig};
///
/// let message = welcome("Developer", None).unwrap();
/// assert!(message.starts_with("Bienvenue Developer! Il est actuellement "));
///
/// let quiet = GreetingConfig::new().include_timestamp(false);
/// assert_eq!(welcome("Developer", Some(&quiet)).unwrap(), "Bienvenue Developer!");
/// ```
pub fn welcome<'a>(name: impl Into<Input<'a>>, config: Option<&GreetingConfig>) -> TextResult {
    welcome_with(name, config, &SystemClock, &LocalizedFormatter)
}

/// [`welcome`] with an injected clock and formatter.
///
/// The locale is resolved even when the timestamp clause is disabled, so an
/// unknown locale is always reported.
///
/// # Errors
///
/// - any [`validate_name`] failure for `name`
/// - `locale` if `formatter` cannot resolve the locale
/// - `length` if the config sets a non-zero `max_length` and the message is
///   longer
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use string_rail::locale::{FixedClock, LocalizedFormatter};
/// use string_rail::welcome_with;
///
/// let clock = FixedClock(DateTime::parse_from_rfc3339("2024-10-04T15:30:45+02:00").unwrap());
/// let message = welcome_with("Alice", None, &clock, &LocalizedFormatter).unwrap();
/// assert!(message.starts_with("Bienvenue Alice! Il est actuellement 04/10/2024"));
/// ```
pub fn welcome_with<'a, C, F>(
    name: impl Into<Input<'a>>,
    config: Option<&GreetingConfig>,
    clock: &C,
    formatter: &F,
) -> TextResult
where
    C: Clock + ?Sized,
    F: TimestampFormatter + ?Sized,
{
    traced("welcome", compose_welcome(name.into(), config, clock, formatter))
}

/// [`welcome_with`] pinned to a single instant and rendered by
/// [`LocalizedFormatter`].
///
/// ```
/// use chrono::DateTime;
/// use string_rail::locale::FixedClock;
/// use string_rail::{welcome_at, GreetingConfig};
///
/// let clock = FixedClock(DateTime::parse_from_rfc3339("2024-10-04T15:30:45+02:00").unwrap());
/// let english = GreetingConfig::new().with_locale("en");
/// assert_eq!(
///     welcome_at("Dev", Some(&english), clock).unwrap(),
///     "Bienvenue Dev! Il est actuellement 10/04/2024 03:30:45 PM"
/// );
/// ```
pub fn welcome_at<'a>(name: impl Into<Input<'a>>, config: Option<&GreetingConfig>, clock: FixedClock) -> TextResult {
    welcome_with(name, config, &clock, &LocalizedFormatter)
}

fn compose_hello(name: Input<'_>, greeting: Option<&str>, config: Option<&GreetingConfig>) -> TextResult {
    let name = validate_name(name).with_param("argument", "name")?;

    let greeting = greeting
        .or_else(|| config.and_then(GreetingConfig::default_greeting))
        .unwrap_or(DEFAULT_GREETING)
        .trim();
    if greeting.is_empty() {
        return Err(invalid!(Greeting, "Greeting must be a non-empty string"));
    }

    let preserve_case = config.is_some_and(|c| c.options().preserves_case());
    let greeting = if preserve_case { greeting.to_owned() } else { sentence_case(greeting) };

    let message = format!("{greeting}, {name}!");
    check_message_bound(message, config)
}

fn compose_welcome<C, F>(name: Input<'_>, config: Option<&GreetingConfig>, clock: &C, formatter: &F) -> TextResult
where
    C: Clock + ?Sized,
    F: TimestampFormatter + ?Sized,
{
    let name = validate_name(name).with_param("argument", "name")?;

    let locale = config
        .and_then(|c| c.options().locale())
        .filter(|locale| !locale.is_empty())
        .unwrap_or(DEFAULT_LOCALE);
    let timestamp = formatter.format(clock.now(), locale)?;

    let message = if config.map_or(true, GreetingConfig::includes_timestamp) {
        format!("Bienvenue {name}! Il est actuellement {timestamp}")
    } else {
        format!("Bienvenue {name}!")
    };
    check_message_bound(message, config)
}

fn check_message_bound(message: String, config: Option<&GreetingConfig>) -> TextResult {
    let Some(max) = config.and_then(GreetingConfig::message_bound) else {
        return Ok(message);
    };

    let length = message.chars().count();
    if length > max {
        return Err(invalid!(Length, "Generated message exceeds maximum length of {}", max)
            .with_param("max", max)
            .with_param("actual", length));
    }
    Ok(message)
}

/// Uppercases the first character and lowercases the rest.
pub(crate) fn sentence_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut result = String::with_capacity(text.len());
            result.extend(first.to_uppercase());
            result.push_str(&chars.as_str().to_lowercase());
            result
        },
    }
}
