//! Borrowed, dynamically-typed input accepted by the validators.
//!
//! Operations in this crate take `impl Into<Input<'a>>` so they can be fed
//! anything a caller pulled out of an untyped source (form data, JSON,
//! command-line arguments) and report a `type` error instead of failing to
//! compile or panicking when the value is not text.
use core::fmt::{self, Display};

/// An untrusted value handed to a validator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input<'a> {
    Text(&'a str),
    Null,
    Bool(bool),
    Number(f64),
    Sequence,
    Object,
}

impl<'a> Input<'a> {
    /// Returns the text payload when the input is textual.
    #[must_use]
    #[inline]
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Short name of the input's kind, used in error parameters and logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "string",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Sequence => "array",
            Self::Object => "object",
        }
    }
}

impl Display for Input<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind())
    }
}

impl<'a> From<&'a str> for Input<'a> {
    #[inline]
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    #[inline]
    fn from(text: &'a String) -> Self {
        Self::Text(text.as_str())
    }
}

impl From<bool> for Input<'_> {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<()> for Input<'_> {
    #[inline]
    fn from(_: ()) -> Self {
        Self::Null
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Input<'_> {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<'a, T> From<Option<T>> for Input<'a>
where
    T: Into<Input<'a>>,
{
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<'a, T> From<&'a [T]> for Input<'a> {
    #[inline]
    fn from(_: &'a [T]) -> Self {
        Self::Sequence
    }
}

impl<'a, T> From<&'a Vec<T>> for Input<'a> {
    #[inline]
    fn from(_: &'a Vec<T>) -> Self {
        Self::Sequence
    }
}

#[cfg(feature = "serde")]
impl<'a> From<&'a serde_json::Value> for Input<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::String(text) => Self::Text(text),
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::Array(_) => Self::Sequence,
            Value::Object(_) => Self::Object,
        }
    }
}
