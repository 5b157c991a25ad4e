//! Per-call configuration for the string operations.
//!
//! Configs are plain immutable values: build one with the chained setters,
//! pass it by reference, and it is never modified by the operation that reads
//! it. With the `serde` feature both structs (de)serialize with camelCase keys
//! (`preserveCase`, `maxLength`, `includeTimestamp`, ...), every key optional.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options shared by every string operation.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringOperationConfig {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub(crate) locale: Option<String>,
    pub(crate) preserve_case: bool,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub(crate) max_length: Option<usize>,
}

impl StringOperationConfig {
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Locale tag such as `"fr-FR"` or `"en_US"`.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Keep the casing of everything after the first character.
    #[must_use]
    #[inline]
    pub fn preserve_case(mut self, preserve: bool) -> Self {
        self.preserve_case = preserve;
        self
    }

    /// Upper bound on input or output length, in characters.
    #[must_use]
    #[inline]
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    #[must_use]
    #[inline]
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    #[must_use]
    #[inline]
    pub fn preserves_case(&self) -> bool {
        self.preserve_case
    }

    #[must_use]
    #[inline]
    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }
}

/// Configuration for [`hello`](crate::hello) and [`welcome`](crate::welcome).
///
/// Wraps a [`StringOperationConfig`] and adds greeting-specific knobs. The
/// timestamp clause of `welcome` is included unless explicitly disabled.
///
/// ```
/// use string_rail::GreetingConfig;
///
/// let config = GreetingConfig::new()
///     .with_locale("en-US")
///     .with_max_length(80)
///     .include_timestamp(false);
///
/// assert_eq!(config.options().locale(), Some("en-US"));
/// assert!(!config.includes_timestamp());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingConfig {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub(crate) options: StringOperationConfig,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub(crate) default_greeting: Option<String>,
    pub(crate) include_timestamp: bool,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self { options: StringOperationConfig::default(), default_greeting: None, include_timestamp: true }
    }
}

impl GreetingConfig {
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Locale used by `welcome` to render the timestamp.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.options = self.options.with_locale(locale);
        self
    }

    /// Keep the greeting word exactly as given.
    #[must_use]
    #[inline]
    pub fn preserve_case(mut self, preserve: bool) -> Self {
        self.options = self.options.preserve_case(preserve);
        self
    }

    /// Reject generated messages longer than `max_length` characters.
    /// Zero disables the check.
    #[must_use]
    #[inline]
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.options = self.options.with_max_length(max_length);
        self
    }

    /// Greeting word used by `hello` when the caller passes none.
    #[must_use]
    pub fn with_default_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.default_greeting = Some(greeting.into());
        self
    }

    #[must_use]
    #[inline]
    pub fn include_timestamp(mut self, include: bool) -> Self {
        self.include_timestamp = include;
        self
    }

    #[must_use]
    #[inline]
    pub fn options(&self) -> &StringOperationConfig {
        &self.options
    }

    #[must_use]
    #[inline]
    pub fn default_greeting(&self) -> Option<&str> {
        self.default_greeting.as_deref()
    }

    #[must_use]
    #[inline]
    pub fn includes_timestamp(&self) -> bool {
        self.include_timestamp
    }

    /// Output bound for generated messages; `None` when unset or zero.
    #[inline]
    pub(crate) fn message_bound(&self) -> Option<usize> {
        self.options.max_length.filter(|&max| max > 0)
    }
}

impl From<StringOperationConfig> for GreetingConfig {
    fn from(options: StringOperationConfig) -> Self {
        Self { options, ..Self::default() }
    }
}

impl AsRef<StringOperationConfig> for GreetingConfig {
    fn as_ref(&self) -> &StringOperationConfig {
        &self.options
    }
}
