//! Core data types: inputs, configuration, and the validation error.
//!
//! # Examples
//!
//! ```
//! use string_rail::{ErrorField, TextResult, ValidationError};
//!
//! fn reject_blank(text: &str) -> TextResult<&str> {
//!     if text.trim().is_empty() {
//!         return Err(ValidationError::new("Input cannot be empty")
//!             .with_field(ErrorField::Required));
//!     }
//!     Ok(text)
//! }
//!
//! assert_eq!(reject_blank("  ").unwrap_err().field(), Some(ErrorField::Required));
//! ```
use smallvec::SmallVec;

pub mod config;
pub mod input;
pub mod validation_error;

pub use config::*;
pub use input::*;
pub use validation_error::*;

/// SmallVec-backed storage for error parameters.
///
/// Uses inline storage for up to 2 entries; validators attach at most a
/// bound and an observed value, so the heap is rarely touched.
pub type ParamVec = SmallVec<[ErrorParam; 2]>;

/// Result alias returned by every validator and operation.
///
/// # Type Parameters
///
/// * `T` - The success value type, `String` unless stated otherwise
pub type TextResult<T = String> = Result<T, ValidationError>;
