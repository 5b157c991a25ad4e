//! Capabilities behind [`welcome`](crate::welcome)'s timestamp clause.
//!
//! Reading the wall clock and rendering a date for a locale are the only
//! non-deterministic steps in the crate. Both sit behind a trait so tests and
//! callers can pin the instant or swap the formatting backend.

use crate::locale::LocaleError;
use chrono::{DateTime, FixedOffset};

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}

/// Renders an instant as human-readable text for a locale tag.
///
/// Implementations must fail with [`LocaleError`] when the tag cannot be
/// resolved rather than silently falling back to another locale.
///
/// # Examples
///
/// ```
/// use chrono::{DateTime, FixedOffset};
/// use string_rail::locale::LocaleError;
/// use string_rail::traits::TimestampFormatter;
///
/// struct IsoOnly;
///
/// impl TimestampFormatter for IsoOnly {
///     fn format(&self, instant: DateTime<FixedOffset>, locale: &str) -> Result<String, LocaleError> {
///         match locale {
///             "iso" => Ok(instant.to_rfc3339()),
///             other => Err(LocaleError::new(other)),
///         }
///     }
/// }
///
/// let instant = DateTime::parse_from_rfc3339("2024-10-04T15:30:45+02:00").unwrap();
/// assert_eq!(IsoOnly.format(instant, "iso").unwrap(), "2024-10-04T15:30:45+02:00");
/// assert!(IsoOnly.format(instant, "fr-FR").is_err());
/// ```
pub trait TimestampFormatter {
    fn format(&self, instant: DateTime<FixedOffset>, locale: &str) -> Result<String, LocaleError>;
}

impl<F: TimestampFormatter + ?Sized> TimestampFormatter for &F {
    #[inline]
    fn format(&self, instant: DateTime<FixedOffset>, locale: &str) -> Result<String, LocaleError> {
        (**self).format(instant, locale)
    }
}
