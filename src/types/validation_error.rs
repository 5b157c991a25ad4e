//! The single error type returned by every fallible operation in the crate.
//!
//! A [`ValidationError`] carries a human-readable message, an optional
//! [`ErrorField`] tag naming the rule that failed, and a short list of
//! structured parameters (`max`, `actual`, `argument`, ...). Callers branch on
//! the tag instead of matching message text:
//!
//! ```
//! use string_rail::{hello, ErrorField};
//!
//! let err = hello("John123", None, None).unwrap_err();
//! assert_eq!(err.field(), Some(ErrorField::Format));
//! ```
use crate::types::ParamVec;
use core::fmt::{self, Display};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Categorical label identifying which check rejected an input.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorField {
    /// The input was not text.
    Type,
    /// The input was empty after trimming whitespace.
    Required,
    /// The input or the generated output exceeded its bound.
    Length,
    /// A name contained characters outside the allowed set.
    Format,
    /// The greeting word was empty.
    Greeting,
    /// Slug generation left nothing behind.
    Processing,
    /// A numeric argument was out of range.
    Parameter,
    /// The locale tag could not be resolved.
    Locale,
}

impl ErrorField {
    /// Every tag, in declaration order.
    pub const ALL: [ErrorField; 8] = [
        Self::Type,
        Self::Required,
        Self::Length,
        Self::Format,
        Self::Greeting,
        Self::Processing,
        Self::Parameter,
        Self::Locale,
    ];

    /// Returns the lowercase wire name of the tag (`"type"`, `"length"`, ...).
    #[must_use]
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Required => "required",
            Self::Length => "length",
            Self::Format => "format",
            Self::Greeting => "greeting",
            Self::Processing => "processing",
            Self::Parameter => "parameter",
            Self::Locale => "locale",
        }
    }
}

impl Display for ErrorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `key=value` detail attached to a [`ValidationError`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorParam {
    pub key: Cow<'static, str>,
    pub value: String,
}

impl Display for ErrorParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Validation failure with a message, an optional field tag and parameters.
///
/// Instances are built once by a validator or an operation and handed to the
/// caller inside `Err`; there is no way to mutate a returned error other than
/// consuming it through the builder methods.
///
/// # Formatting
///
/// `{}` prints the bare message. The alternate form `{:#}` prefixes the
/// field tag and appends the parameters:
///
/// ```
/// use string_rail::{ErrorField, ValidationError};
///
/// let err = ValidationError::new("Input exceeds maximum length of 5 characters")
///     .with_field(ErrorField::Length)
///     .with_param("max", 5);
///
/// assert_eq!(err.to_string(), "Input exceeds maximum length of 5 characters");
/// assert_eq!(
///     format!("{err:#}"),
///     "[length] Input exceeds maximum length of 5 characters (max=5)"
/// );
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub(crate) message: Cow<'static, str>,
    pub(crate) field: Option<ErrorField>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "ParamVec::is_empty"))]
    pub(crate) params: ParamVec,
}

impl ValidationError {
    /// Creates an untagged error carrying only a message.
    #[inline]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self { message: message.into(), field: None, params: ParamVec::new() }
    }

    /// Sets (or overrides) the field tag.
    #[inline]
    pub fn with_field(mut self, field: ErrorField) -> Self {
        self.field = Some(field);
        self
    }

    /// Appends a structured parameter. Later keys do not replace earlier ones.
    #[inline]
    pub fn with_param<V: Display>(mut self, key: impl Into<Cow<'static, str>>, value: V) -> Self {
        self.params.push(ErrorParam { key: key.into(), value: value.to_string() });
        self
    }

    /// Returns the human-readable message.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the field tag, if one was set.
    #[must_use]
    #[inline]
    pub fn field(&self) -> Option<ErrorField> {
        self.field
    }

    /// Returns `true` when the error is tagged with `field`.
    #[must_use]
    #[inline]
    pub fn is(&self, field: ErrorField) -> bool {
        self.field == Some(field)
    }

    /// Returns the attached parameters in insertion order.
    #[must_use]
    #[inline]
    pub fn params(&self) -> &[ErrorParam] {
        &self.params
    }

    /// Looks up the first parameter named `key`.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.iter().find(|p| p.key == key).map(|p| p.value.as_str())
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return f.write_str(&self.message);
        }

        if let Some(field) = self.field {
            write!(f, "[{field}] ")?;
        }
        f.write_str(&self.message)?;

        let mut params = self.params.iter();
        if let Some(first) = params.next() {
            write!(f, " ({first}")?;
            for param in params {
                write!(f, ", {param}")?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
