//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn lookup(id: u32) -> Outcome<&'static str> {
//!     ensure!(id != 0, "id must be positive");
//!     match id {
//!         1 => success("root").into(),
//!         _ => fail!("unknown id {id}").into(),
//!     }
//! }
//!
//! assert_eq!(lookup(1).unwrap(), "root");
//! assert!(lookup(2).throw_if_fail().is_err());
//! ```

// Macros; `fail` also brings the factory function of the same name
pub use crate::{ensure, fail};

// Core types and factories
pub use crate::types::{
    fail_some, success, DualOutcome, FailTag, Fault, FaultKind, FaultResult, OkTag, Outcome, Status,
};

// Guarded execution
pub use crate::wrap::{wrap, wrap_flat, wrap_flat_with, wrap_result, wrap_with};

// Traits
pub use crate::traits::{Fallible, ResultExt};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::TraceFail;
