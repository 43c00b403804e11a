//! Extension trait lifting `core::result::Result` into the result shapes.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::ResultExt;
//! use outcome_rail::Fault;
//!
//! let port = "80a".parse::<u16>().outcome_with(Fault::from_error);
//! assert!(port.is_fail());
//! ```
use crate::types::{DualOutcome, Fault, Outcome};

/// Extension methods for `Result`.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::ResultExt;
///
/// let read: Result<String, std::io::Error> = std::fs::read_to_string("missing.toml");
/// let outcome = read.into_outcome();
/// assert!(outcome.is_fail());
/// ```
pub trait ResultExt<T, E> {
    /// Converts into an [`Outcome`], turning the error into a [`Fault`].
    fn into_outcome(self) -> Outcome<T>
    where
        E: Into<Fault>;

    /// Converts into an [`Outcome`], mapping the error lazily.
    ///
    /// `f` only runs on the `Err` path.
    fn outcome_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(E) -> Fault;

    /// Converts into a [`DualOutcome`] keeping the error type.
    fn into_dual(self) -> DualOutcome<T, E>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T>
    where
        E: Into<Fault>,
    {
        self.into()
    }

    #[inline]
    fn outcome_with<F>(self, f: F) -> Outcome<T>
    where
        F: FnOnce(E) -> Fault,
    {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(f(error)),
        }
    }

    #[inline]
    fn into_dual(self) -> DualOutcome<T, E> {
        self.into()
    }
}
