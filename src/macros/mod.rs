//! Builder macros for writing failures at a call site.
//!
//! - [`macro@crate::fail`] - formats a message into a [`FailTag<Fault>`](crate::FailTag)
//!   ready to convert into any result shape.
//! - [`macro@crate::ensure`] - returns early with such a failure when a
//!   condition does not hold.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{ensure, fail, Outcome, Status};
//!
//! fn reserve(seats: u32, free: u32) -> Outcome<u32> {
//!     ensure!(seats > 0, "at least one seat is required");
//!     if seats > free {
//!         return fail!("only {free} seats left").into();
//!     }
//!     Outcome::from_ok(free - seats)
//! }
//!
//! assert_eq!(reserve(2, 5), Outcome::from_ok(3));
//! assert_eq!(reserve(9, 5).fail_message().as_deref(), Some("only 5 seats left"));
//!
//! let status: Status = reserve(0, 5).into();
//! assert!(status.is_fail());
//! ```

/// Formats a failure message into a [`FailTag<Fault>`](crate::FailTag).
///
/// Accepts the same arguments as `format!`. The resulting fault is a
/// [`Fault::Message`](crate::Fault::Message).
///
/// # Examples
///
/// ```
/// use outcome_rail::{fail, Outcome};
///
/// let shard = 7;
/// let out: Outcome<()> = fail!("shard {} unreachable", shard).into();
/// assert_eq!(out.fail_message().as_deref(), Some("shard 7 unreachable"));
/// ```
#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {
        $crate::fail($crate::Fault::new($crate::types::alloc_type::format!($($arg)*)))
    };
}

/// Returns early with a formatted failure unless `cond` holds.
///
/// The enclosing function must return a shape that a
/// [`FailTag<Fault>`](crate::FailTag) converts into: [`Outcome`](crate::Outcome),
/// [`Status`](crate::Status) or `DualOutcome<_, Fault>`.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ensure, Status};
///
/// fn check_len(buf: &[u8]) -> Status {
///     ensure!(buf.len() <= 4, "frame too long: {} bytes", buf.len());
///     Status::success()
/// }
///
/// assert!(check_len(b"abc").is_ok());
/// assert_eq!(check_len(b"abcdef").to_string(), "Fail(frame too long: 6 bytes)");
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)+) => {
        if !($cond) {
            return $crate::fail!($($arg)+).into();
        }
    };
}
