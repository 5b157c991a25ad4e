//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use string_rail::prelude::*;
//!
//! fn headline(title: &str) -> TextResult {
//!     let slug = slugify(title, None)?;
//!     truncate(slug.as_str(), Some(24), None)
//! }
//!
//! assert_eq!(headline("Rust & Résumés: a field guide").unwrap(), "rust-resumes-a-field-...");
//! ```
//!
//! # What's Included
//!
//! - **Operations**: [`hello`], [`welcome`], [`capitalize`], [`slugify`], [`truncate`]
//! - **Validators**: [`validate_string`], [`validate_name`], [`validate_slug_text`]
//! - **Types**: [`ValidationError`], [`ErrorField`], [`TextResult`], [`Input`],
//!   [`StringOperationConfig`], [`GreetingConfig`]
//! - **Traits**: [`ResultExt`]
//! - **Macros**: [`invalid!`]

// Macros
pub use crate::invalid;

// Operations
pub use crate::ops::{capitalize, hello, slugify, truncate, welcome};

// Validators
pub use crate::validation::{validate_name, validate_slug_text, validate_string};

// Core types
pub use crate::types::{ErrorField, GreetingConfig, Input, StringOperationConfig, TextResult, ValidationError};

// Traits
pub use crate::traits::ResultExt;
