//! Explicit success/failure values in place of unwinding control flow.
//!
//! Three shapes share one algebra:
//!
//! - [`Status`]: success without a payload, or a [`Fault`]
//! - [`Outcome<T>`]: success value `T`, or a [`Fault`]
//! - [`DualOutcome<S, F>`]: success value `S`, or a failure payload `F`
//!
//! Values are built from the [`success`] and [`fail`] tags and converted with
//! `From`/`Into`; combinators chain fallible steps and [`wrap`] turns a
//! panicking computation into a failed [`Outcome`].
//!
//! # Examples
//!
//! ## Tags and conversions
//!
//! ```
//! use outcome_rail::{fail, success, Outcome, Status};
//!
//! let ok: Outcome<i32> = success(1).into();
//! let failed: Outcome<i32> = fail("no such user").into();
//!
//! assert!(ok.is_ok());
//! assert_eq!(failed.fail_message().as_deref(), Some("no such user"));
//! assert_eq!(Status::from(failed), Status::from_fail("no such user"));
//! ```
//!
//! ## Chaining fallible steps
//!
//! ```
//! use outcome_rail::{wrap_result, Fault, Outcome};
//!
//! fn parse(raw: &str) -> Outcome<i64> {
//!     wrap_result(|| raw.trim().parse::<i64>().map_err(Fault::from_error))
//! }
//!
//! let total = parse("40").select_many(|_| parse(" 2 "), |a, b| a + b);
//! assert_eq!(total, Outcome::from_ok(42));
//!
//! let halved = parse("x").map(|n| n / 2);
//! assert!(halved.is_fail());
//! ```
//!
//! ## Guarded execution
//!
//! ```
//! use outcome_rail::{wrap, FaultKind, Outcome};
//!
//! let items: Vec<u8> = Vec::new();
//! let first: Outcome<u8> = wrap(|| items[0]);
//! assert_eq!(first.error().map(|f| f.kind()), Some(FaultKind::Panicked));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between tags, result shapes, faults and `Result`
pub mod convert;
/// Builder macros for failures
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for termination and `Result` interop
pub mod traits;
/// Result shapes, tags and the fault type
pub mod types;
/// Guarded execution
pub mod wrap;

/// Tracing hook for failed outcomes (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use convert::*;
pub use traits::*;
pub use types::*;
pub use wrap::{wrap, wrap_flat, wrap_flat_with, wrap_result, wrap_with};
