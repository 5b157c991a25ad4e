//! Traits at the seams of the crate.
//!
//! - [`ResultExt`]: inspect and enrich [`TextResult`](crate::TextResult) values
//! - [`Clock`]: source of the current instant for `welcome`
//! - [`TimestampFormatter`]: locale-aware rendering of that instant
//!
//! # Examples
//!
//! ```
//! use string_rail::traits::ResultExt;
//! use string_rail::{truncate, ErrorField};
//!
//! assert!(truncate("Hello", Some(0), None).is_failure_of(ErrorField::Parameter));
//! ```

pub mod result_ext;
pub mod timestamp;

pub use result_ext::ResultExt;
pub use timestamp::{Clock, TimestampFormatter};
