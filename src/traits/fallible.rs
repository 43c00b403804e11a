//! Termination operations shared by every result shape.
//!
//! [`Fallible`] is implemented for [`Status`], [`Outcome`] and
//! [`DualOutcome`] (the latter only when its failure converts into a
//! [`Fault`], so unwrapping a non-error failure is rejected at compile time
//! rather than at run time).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Fallible, Fault, Outcome, Status};
//!
//! fn migrate(step: Status) -> Result<&'static str, Fault> {
//!     step.throw_if_fail()?;
//!     Ok("migrated")
//! }
//!
//! assert_eq!(migrate(Status::success()), Ok("migrated"));
//! assert_eq!(migrate(Status::from_fail("lock held")), Err(Fault::from("lock held")));
//!
//! assert_eq!(Outcome::from_ok(7).unwrap(), 7);
//! ```
use crate::types::{DualOutcome, Fault, FaultResult, Outcome, Status};
use crate::wrap::raise;

/// A result shape whose failure can be raised as a [`Fault`].
pub trait Fallible: Sized {
    /// Value produced on success; `()` for [`Status`].
    type Success;

    /// The carried failure as a [`Fault`], `None` when ok.
    fn to_fault(&self) -> Option<Fault>;

    /// Converts into a `Result` so `?` can propagate the fault.
    fn into_result(self) -> FaultResult<Self::Success>;

    /// Returns `Ok(())` on success and `Err(fault)` on failure.
    ///
    /// This is the Rust rendition of "throw if failed": the caller re-raises
    /// with `?`.
    #[inline]
    fn throw_if_fail(&self) -> FaultResult<()> {
        match self.to_fault() {
            Some(fault) => Err(fault),
            None => Ok(()),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Raises the carried fault. The panic message is the fault's `Display`
    /// text, and a surrounding [`wrap`](crate::wrap) captures exactly that
    /// fault.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{wrap, Fallible, Fault, Outcome};
    ///
    /// let fault = Fault::from("expired token");
    /// let failed = Outcome::<u32>::from_fail(fault.clone());
    /// assert_eq!(wrap(|| failed.unwrap()), Outcome::from_fail(fault));
    /// ```
    #[inline]
    #[track_caller]
    fn unwrap(self) -> Self::Success {
        match self.into_result() {
            Ok(value) => value,
            Err(fault) => raise(fault),
        }
    }
}

impl Fallible for Status {
    type Success = ();

    #[inline]
    fn to_fault(&self) -> Option<Fault> {
        self.error().cloned()
    }

    #[inline]
    fn into_result(self) -> FaultResult<()> {
        self.into()
    }
}

impl<T> Fallible for Outcome<T> {
    type Success = T;

    #[inline]
    fn to_fault(&self) -> Option<Fault> {
        self.error().cloned()
    }

    #[inline]
    fn into_result(self) -> FaultResult<T> {
        self.into()
    }
}

impl<S, F> Fallible for DualOutcome<S, F>
where
    F: Into<Fault> + Clone,
{
    type Success = S;

    #[inline]
    fn to_fault(&self) -> Option<Fault> {
        self.error().cloned().map(Into::into)
    }

    #[inline]
    fn into_result(self) -> FaultResult<S> {
        match self {
            DualOutcome::Success(value) => Ok(value),
            DualOutcome::Failure(error) => Err(error.into()),
        }
    }
}
