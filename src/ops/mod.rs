//! The string operations: greetings and text transforms.
//!
//! Every operation validates its input first, then either returns the
//! formatted text or the first [`ValidationError`](crate::ValidationError)
//! encountered. None of them panic on any input.
pub mod greeting;
pub mod transform;

pub use greeting::*;
pub use transform::*;
