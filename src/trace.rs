//! Event hooks for the optional `tracing` feature.
//!
//! Operations route their final result through [`traced`]. With the feature
//! disabled this is an identity function and compiles away.

use crate::types::TextResult;

#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn traced(operation: &'static str, result: TextResult) -> TextResult {
    match &result {
        Ok(output) => {
            tracing::trace!(operation, output_len = output.chars().count(), "string operation succeeded");
        },
        Err(err) => {
            let field = err.field().map_or("none", crate::types::ErrorField::as_str);
            tracing::debug!(operation, field, error = %err, "string operation rejected input");
        },
    }
    result
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
pub(crate) fn traced(_operation: &'static str, result: TextResult) -> TextResult {
    result
}
