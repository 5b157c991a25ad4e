//! Input validators shared by every operation.
//!
//! Each validator takes an untrusted [`Input`](crate::Input) and returns the
//! sanitized text or a [`ValidationError`](crate::ValidationError) tagged with
//! the rule that failed. Operations call these first and propagate failures
//! with `?`, so the type/empty/length checks live in one place.
//!
//! # Examples
//!
//! ```
//! use string_rail::validation::{validate_slug_text, SLUG_TEXT_MAX_LENGTH};
//! use string_rail::ErrorField;
//!
//! let long = "a".repeat(SLUG_TEXT_MAX_LENGTH + 1);
//! assert!(validate_slug_text(long.as_str()).unwrap_err().is(ErrorField::Length));
//! ```
pub mod core;

pub use self::core::*;
