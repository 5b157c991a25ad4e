//! Validated string formatting helpers.
//!
//! Every public operation takes an untrusted [`Input`], validates it, and
//! returns a [`TextResult`]: either the formatted text or a
//! [`ValidationError`] tagged with the [`ErrorField`] that failed. Nothing
//! panics on bad input, and no state is shared between calls.
//!
//! # Examples
//!
//! ## Greetings
//!
//! ```
//! use string_rail::{hello, ErrorField, GreetingConfig};
//!
//! assert_eq!(hello("François", Some("bonjour"), None).unwrap(), "Bonjour, François!");
//!
//! let err = hello(123, None, None).unwrap_err();
//! assert_eq!(err.field(), Some(ErrorField::Type));
//!
//! let tight = GreetingConfig::new().with_max_length(10);
//! let err = hello("John", Some("Hello"), Some(&tight)).unwrap_err();
//! assert_eq!(err.field(), Some(ErrorField::Length));
//! ```
//!
//! ## Text transforms
//!
//! ```
//! use string_rail::{capitalize, slugify, truncate};
//!
//! assert_eq!(capitalize("hello world", None).unwrap(), "Hello world");
//! assert_eq!(slugify("  Hello    World---Test  ", None).unwrap(), "hello-world-test");
//! assert_eq!(truncate("Hello World", Some(8), None).unwrap(), "Hello...");
//! ```
//!
//! ## Branching on the failure
//!
//! ```
//! use string_rail::{validate_name, ErrorField};
//!
//! match validate_name("John<script>") {
//!     Ok(name) => println!("hello {name}"),
//!     Err(err) if err.is(ErrorField::Format) => println!("rejected: {err}"),
//!     Err(err) => println!("{err:#}"),
//! }
//! ```
//!
//! # Features
//!
//! - `serde`: (de)serialization for errors and configs, and
//!   `Input` from `&serde_json::Value`
//! - `tracing`: emit events for every operation outcome
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Clock and locale-aware timestamp formatting
pub mod locale;
/// Error-building macros
pub mod macros;
/// Greeting and text transform operations
pub mod ops;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension and capability traits
pub mod traits;
/// Inputs, configs, and the validation error
pub mod types;
/// Input validators shared by all operations
pub mod validation;

mod trace;

pub use ops::*;
pub use traits::*;
pub use types::*;
pub use validation::*;
