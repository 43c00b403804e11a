//! Result shapes, the tag helpers that feed them, and the [`Fault`] error
//! object.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{fail, success, Outcome, Status};
//!
//! let loaded: Outcome<&str> = success("config.toml").into();
//! let saved: Status = fail("read-only filesystem").into();
//!
//! assert_eq!(loaded.to_string(), "Success(config.toml)");
//! assert_eq!(saved.to_string(), "Fail(read-only filesystem)");
//! ```
pub mod alloc_type;
pub mod dual;
pub mod fault;
pub mod outcome;
pub mod status;
pub mod tag;

pub use dual::*;
pub use fault::*;
pub use outcome::*;
pub use status::*;
pub use tag::*;

/// `core::result::Result` whose error is a [`Fault`].
///
/// This is what [`Fallible::throw_if_fail`](crate::Fallible::throw_if_fail)
/// returns, so `?` re-raises a carried fault.
pub type FaultResult<T> = Result<T, Fault>;
