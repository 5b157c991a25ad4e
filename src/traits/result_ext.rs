//! Extension trait for inspecting and enriching [`TextResult`] values.
//!
//! # Examples
//!
//! ```
//! use string_rail::traits::ResultExt;
//! use string_rail::{slugify, ErrorField};
//!
//! let result = slugify("!!!", None);
//! assert!(result.is_failure_of(ErrorField::Processing));
//! assert_eq!(result.failure_field(), Some(ErrorField::Processing));
//! ```

use crate::types::{ErrorField, TextResult};
use core::fmt::Display;
use std::borrow::Cow;

/// Convenience methods for results carrying a [`ValidationError`](crate::ValidationError).
///
/// Every method leaves the `Ok` branch untouched, so they can be chained on
/// the happy path without cost.
pub trait ResultExt<T> {
    /// Returns the field tag of the error, or `None` on success or for an
    /// untagged error.
    fn failure_field(&self) -> Option<ErrorField>;

    /// Returns `true` if the result is an error tagged with `field`.
    fn is_failure_of(&self, field: ErrorField) -> bool {
        self.failure_field() == Some(field)
    }

    /// Attaches a parameter to the error, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use string_rail::traits::ResultExt;
    /// use string_rail::validate_name;
    ///
    /// let err = validate_name(42).with_param("argument", "name").unwrap_err();
    /// assert_eq!(err.param("argument"), Some("name"));
    /// ```
    fn with_param<V: Display>(self, key: impl Into<Cow<'static, str>>, value: V) -> Self;

    /// Lazily computes a parameter, running `f` only on the error path.
    fn with_param_with<V, F>(self, key: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        V: Display,
        F: FnOnce() -> V;
}

impl<T> ResultExt<T> for TextResult<T> {
    #[inline]
    fn failure_field(&self) -> Option<ErrorField> {
        self.as_ref().err().and_then(|err| err.field())
    }

    #[inline]
    fn with_param<V: Display>(self, key: impl Into<Cow<'static, str>>, value: V) -> Self {
        self.map_err(|err| err.with_param(key, value))
    }

    #[inline]
    fn with_param_with<V, F>(self, key: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        V: Display,
        F: FnOnce() -> V,
    {
        self.map_err(|err| err.with_param(key, f()))
    }
}
