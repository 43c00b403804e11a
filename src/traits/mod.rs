//! Extension traits layered on top of the result shapes.
//!
//! - [`Fallible`]: termination operations (`unwrap`, `throw_if_fail`) shared
//!   by [`Status`](crate::Status), [`Outcome`](crate::Outcome) and
//!   [`DualOutcome`](crate::DualOutcome)
//! - [`ResultExt`]: lifting `core::result::Result` into the shapes
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{Fallible, ResultExt};
//!
//! let parsed: Result<i32, &'static str> = Ok(12);
//! assert_eq!(parsed.into_outcome().unwrap(), 12);
//! ```

pub mod fallible;
pub mod result_ext;

pub use fallible::Fallible;
pub use result_ext::ResultExt;
