//! Tracing integration for outcome-rail.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use outcome_rail::tracing_ext::TraceFail;
//! use outcome_rail::Outcome;
//!
//! let out = Outcome::<u32>::from_fail("cache miss").trace_fail("load_profile");
//! assert!(out.is_fail());
//! ```

use crate::traits::Fallible;

/// Emits a `tracing` event when a result shape is a failure.
///
/// The shape is returned unchanged, so the call slots into a chain.
pub trait TraceFail: Fallible {
    /// Logs the failure at `WARN` with the operation name, the fault kind and
    /// its message. No-op on success.
    fn trace_fail(self, operation: &str) -> Self {
        if let Some(fault) = self.to_fault() {
            tracing::warn!(
                operation,
                kind = %fault.kind(),
                error = %fault.message(),
                "operation failed"
            );
        }
        self
    }

    /// Like [`trace_fail`](Self::trace_fail) but logs at `DEBUG`, for
    /// failures that are expected and recovered from.
    fn trace_fail_debug(self, operation: &str) -> Self {
        if let Some(fault) = self.to_fault() {
            tracing::debug!(
                operation,
                kind = %fault.kind(),
                error = %fault.message(),
                "operation failed"
            );
        }
        self
    }
}

impl<R: Fallible> TraceFail for R {}
