//! Conversions between tag helpers, the three result shapes, [`Fault`] and
//! `core::result::Result`.
//!
//! Each `From` impl below is one source/target pair of the conversion table:
//!
//! | source                        | target                      |
//! |-------------------------------|-----------------------------|
//! | `OkTag<T>`                    | `Outcome<T>`                |
//! | `FailTag<E: Into<Fault>>`     | `Outcome<T>`, `Status`      |
//! | `Fault`                       | `Outcome<T>`, `Status`      |
//! | `Outcome<T>`                  | `Status`                    |
//! | `DualOutcome<T, Fault>`       | `Outcome<T>` (and back)     |
//! | `OkTag<S>`, `FailTag<F>`      | `DualOutcome<S, F>`         |
//! | `Result<T, E: Into<Fault>>`   | `Outcome<T>`                |
//! | `Outcome<T>`                  | `Result<T, Fault>`          |
//! | `Result<(), E: Into<Fault>>`  | `Status` (and back)         |
//! | `Result<S, F>`                | `DualOutcome<S, F>` (and back) |
//!
//! A bare success value has no blanket `From<T>` (it would overlap with the
//! tag conversions); use [`Outcome::from_ok`] or [`success`](crate::success).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::{DualOutcome, Fault, Outcome};
//!
//! let result: Result<i32, &'static str> = Err("failed");
//! let outcome = result_to_outcome(result);
//! assert_eq!(outcome.fail_message().as_deref(), Some("failed"));
//!
//! let dual: DualOutcome<i32, Fault> = outcome_to_dual(outcome.clone());
//! assert_eq!(dual_to_outcome(dual), outcome);
//! ```
use crate::types::{DualOutcome, FailTag, Fault, OkTag, Outcome, Status};

impl<T> From<OkTag<T>> for Outcome<T> {
    #[inline]
    fn from(tag: OkTag<T>) -> Self {
        Outcome::Success(tag.value)
    }
}

impl<T, E> From<FailTag<E>> for Outcome<T>
where
    E: Into<Fault>,
{
    #[inline]
    fn from(tag: FailTag<E>) -> Self {
        Outcome::Failure(tag.into_fault())
    }
}

impl<T> From<Fault> for Outcome<T> {
    #[inline]
    fn from(fault: Fault) -> Self {
        Outcome::Failure(fault)
    }
}

impl<E> From<FailTag<E>> for Status
where
    E: Into<Fault>,
{
    #[inline]
    fn from(tag: FailTag<E>) -> Self {
        Status::Failure(tag.into_fault())
    }
}

impl From<Fault> for Status {
    #[inline]
    fn from(fault: Fault) -> Self {
        Status::Failure(fault)
    }
}

impl<T> From<Outcome<T>> for Status {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(_) => Status::Success,
            Outcome::Failure(fault) => Status::Failure(fault),
        }
    }
}

impl<T> From<DualOutcome<T, Fault>> for Outcome<T> {
    #[inline]
    fn from(dual: DualOutcome<T, Fault>) -> Self {
        match dual {
            DualOutcome::Success(value) => Outcome::Success(value),
            DualOutcome::Failure(fault) => Outcome::Failure(fault),
        }
    }
}

impl<T> From<Outcome<T>> for DualOutcome<T, Fault> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(value) => DualOutcome::Success(value),
            Outcome::Failure(fault) => DualOutcome::Failure(fault),
        }
    }
}

impl<S, F> From<OkTag<S>> for DualOutcome<S, F> {
    #[inline]
    fn from(tag: OkTag<S>) -> Self {
        DualOutcome::Success(tag.value)
    }
}

impl<S, F> From<FailTag<F>> for DualOutcome<S, F> {
    #[inline]
    fn from(tag: FailTag<F>) -> Self {
        DualOutcome::Failure(tag.value)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T>
where
    E: Into<Fault>,
{
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error.into()),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, Fault> {
    #[inline]
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(fault) => Err(fault),
        }
    }
}

impl<E> From<Result<(), E>> for Status
where
    E: Into<Fault>,
{
    #[inline]
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Status::Success,
            Err(error) => Status::Failure(error.into()),
        }
    }
}

impl From<Status> for Result<(), Fault> {
    #[inline]
    fn from(status: Status) -> Self {
        match status {
            Status::Success => Ok(()),
            Status::Failure(fault) => Err(fault),
        }
    }
}

impl<S, F> From<Result<S, F>> for DualOutcome<S, F> {
    #[inline]
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => DualOutcome::Success(value),
            Err(error) => DualOutcome::Failure(error),
        }
    }
}

impl<S, F> From<DualOutcome<S, F>> for Result<S, F> {
    #[inline]
    fn from(dual: DualOutcome<S, F>) -> Self {
        match dual {
            DualOutcome::Success(value) => Ok(value),
            DualOutcome::Failure(error) => Err(error),
        }
    }
}

/// Converts a `Result` into an [`Outcome`], turning the error into a
/// [`Fault`].
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
///
/// let ok: Result<u8, String> = Ok(1);
/// assert!(result_to_outcome(ok).is_ok());
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T>
where
    E: Into<Fault>,
{
    result.into()
}

/// Converts an [`Outcome`] into a `Result` so `?` can propagate the fault.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::{Fault, Outcome};
///
/// fn load() -> Result<u32, Fault> {
///     let retries = outcome_to_result(Outcome::from_ok(3))?;
///     Ok(retries * 2)
/// }
///
/// assert_eq!(load(), Ok(6));
/// ```
#[inline]
pub fn outcome_to_result<T>(outcome: Outcome<T>) -> Result<T, Fault> {
    outcome.into()
}

/// Lossless narrowing of a [`DualOutcome`] whose failure is a [`Fault`].
#[inline]
pub fn dual_to_outcome<T>(dual: DualOutcome<T, Fault>) -> Outcome<T> {
    dual.into()
}

/// Lossless widening of an [`Outcome`] into a [`DualOutcome`].
#[inline]
pub fn outcome_to_dual<T>(outcome: Outcome<T>) -> DualOutcome<T, Fault> {
    outcome.into()
}

/// Drops the success value, keeping only whether the step failed.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_status;
/// use outcome_rail::{Outcome, Status};
///
/// assert_eq!(outcome_to_status(Outcome::from_ok(5)), Status::success());
/// assert!(outcome_to_status(Outcome::<u8>::from_fail("nope")).is_fail());
/// ```
#[inline]
pub fn outcome_to_status<T>(outcome: Outcome<T>) -> Status {
    outcome.into()
}

/// Converts a [`DualOutcome`] with any failure type into an [`Outcome`] by
/// mapping its failure into a [`Fault`].
///
/// Unlike [`dual_to_outcome`] this accepts any `F: Into<Fault>`, such as a
/// `String` failure.
#[inline]
pub fn dual_into_outcome<S, F>(dual: DualOutcome<S, F>) -> Outcome<S>
where
    F: Into<Fault>,
{
    match dual {
        DualOutcome::Success(value) => Outcome::Success(value),
        DualOutcome::Failure(error) => Outcome::Failure(error.into()),
    }
}
