//! Shorthand for building tagged [`ValidationError`](crate::ValidationError)s.
//!
//! - [`macro@crate::invalid`] - Builds an error with a field tag and a
//!   `format!`-style message.
//!
//! # Examples
//!
//! ```
//! use string_rail::{invalid, ErrorField, TextResult};
//!
//! fn check_port(port: u32) -> TextResult<u16> {
//!     u16::try_from(port)
//!         .map_err(|_| invalid!(Parameter, "port {} is out of range", port).with_param("max", u16::MAX))
//! }
//!
//! let err = check_port(70_000).unwrap_err();
//! assert!(err.is(ErrorField::Parameter));
//! assert_eq!(err.param("max"), Some("65535"));
//! ```

/// Creates a [`ValidationError`](crate::ValidationError) tagged with the given
/// [`ErrorField`](crate::ErrorField) variant.
///
/// The message always goes through `format!`, so inline captures such as
/// `"{max}"` are expanded.
///
/// # Syntax
///
/// - `invalid!(Field, "message")`
/// - `invalid!(Field, "format {}", args...)`
/// - `invalid!(Field, "format {captured}")`
///
/// # Examples
///
/// ```
/// use string_rail::{invalid, ErrorField};
///
/// let err = invalid!(Required, "Input cannot be empty");
/// assert_eq!(err.field(), Some(ErrorField::Required));
///
/// let err = invalid!(Length, "Input exceeds maximum length of {} characters", 10);
/// assert_eq!(err.message(), "Input exceeds maximum length of 10 characters");
///
/// let max = 5;
/// let err = invalid!(Length, "max {max}");
/// assert_eq!(err.message(), "max 5");
/// ```
#[macro_export]
macro_rules! invalid {
    ($field:ident, $($fmt:tt)+) => {
        $crate::ValidationError::new(::std::format!($($fmt)+)).with_field($crate::ErrorField::$field)
    };
}
