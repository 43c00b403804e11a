//! Guarded execution.
//!
//! The `wrap*` functions run a computation and turn anything that escapes it
//! into the failure slot of an [`Outcome`]. In Rust a computation "raises" in
//! two ways: it panics, or it returns `Err`. Panics are captured by every
//! function here; [`wrap_result`] additionally captures `Err` returns.
//!
//! A fault raised by [`Fallible::unwrap`](crate::Fallible::unwrap) is
//! captured as that exact fault, as is a panic whose payload is a [`Fault`].
//! Other `&str` and `String` payloads become [`Fault::Panicked`].
//!
//! Capture needs the `std` feature and a build with `panic = "unwind"`.
//! Without `std` the computation runs unguarded.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{wrap, wrap_result, FaultKind, Outcome};
//!
//! let parsed = wrap_result(|| "42".parse::<i32>().map_err(outcome_rail::Fault::from_error));
//! assert_eq!(parsed, Outcome::from_ok(42));
//!
//! let captured: Outcome<i32> = wrap(|| panic!("index out of range"));
//! assert_eq!(captured.error().map(|f| f.kind()), Some(FaultKind::Panicked));
//! ```
#[cfg(feature = "std")]
use core::cell::Cell;

use crate::types::alloc_type::ToString;
use crate::types::fault::Fault;
use crate::types::outcome::Outcome;

#[cfg(feature = "std")]
std::thread_local! {
    // Fault behind the latest `raise` on this thread, until a guard takes it.
    static RAISED: Cell<Option<Fault>> = const { Cell::new(None) };
}

/// Runs `f`, capturing a panic as a failed outcome.
#[inline]
pub fn wrap<T, F>(f: F) -> Outcome<T>
where
    F: FnOnce() -> T,
{
    match guard(f) {
        Ok(value) => Outcome::Success(value),
        Err(fault) => Outcome::Failure(fault),
    }
}

/// Runs `f(arg)`, capturing a panic as a failed outcome.
#[inline]
pub fn wrap_with<A, T, F>(f: F, arg: A) -> Outcome<T>
where
    F: FnOnce(A) -> T,
{
    wrap(move || f(arg))
}

/// Runs an outcome-producing `f`, capturing a panic as a failed outcome.
///
/// # Examples
///
/// ```
/// use outcome_rail::{wrap_flat, Outcome};
///
/// let out = wrap_flat(|| Outcome::<u8>::from_fail("not ready"));
/// assert_eq!(out, Outcome::from_fail("not ready"));
/// ```
#[inline]
pub fn wrap_flat<T, F>(f: F) -> Outcome<T>
where
    F: FnOnce() -> Outcome<T>,
{
    guard(f).unwrap_or_else(Outcome::Failure)
}

#[inline]
pub fn wrap_flat_with<A, T, F>(f: F, arg: A) -> Outcome<T>
where
    F: FnOnce(A) -> Outcome<T>,
{
    wrap_flat(move || f(arg))
}

/// Runs a `Result`-producing `f`, capturing both `Err` returns and panics.
#[inline]
pub fn wrap_result<T, E, F>(f: F) -> Outcome<T>
where
    E: Into<Fault>,
    F: FnOnce() -> Result<T, E>,
{
    match guard(f) {
        Ok(Ok(value)) => Outcome::Success(value),
        Ok(Err(error)) => Outcome::Failure(error.into()),
        Err(fault) => Outcome::Failure(fault),
    }
}

#[cfg(feature = "std")]
fn guard<R, F>(f: F) -> Result<R, Fault>
where
    F: FnOnce() -> R,
{
    std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)).map_err(|payload| {
        let fault = fault_from_panic(payload);
        #[cfg(feature = "tracing")]
        tracing::debug!(kind = %fault.kind(), fault = %fault, "captured panic in guarded computation");
        fault
    })
}

#[cfg(not(feature = "std"))]
#[inline]
fn guard<R, F>(f: F) -> Result<R, Fault>
where
    F: FnOnce() -> R,
{
    Ok(f())
}

#[cfg(feature = "std")]
fn fault_from_panic(payload: Box<dyn core::any::Any + Send + 'static>) -> Fault {
    let raised = RAISED.try_with(Cell::take).ok().flatten();
    let payload = match payload.downcast::<Fault>() {
        Ok(fault) => return *fault,
        Err(other) => other,
    };
    let message = match payload.downcast::<String>() {
        Ok(message) => *message,
        Err(other) => {
            return match other.downcast::<&'static str>() {
                Ok(message) => Fault::panicked(*message),
                Err(_) => Fault::panicked("opaque panic payload"),
            }
        }
    };
    match raised {
        Some(fault) if fault.to_string() == message => fault,
        _ => Fault::panicked(message),
    }
}

/// Raises `fault`: panics with its `Display` text as the message.
///
/// With `std` the fault is also parked in a thread-local slot, so the guard
/// that catches the panic recovers the original value.
#[cold]
#[track_caller]
pub(crate) fn raise(fault: Fault) -> ! {
    let message = fault.to_string();
    #[cfg(feature = "std")]
    let _ = RAISED.try_with(|slot| slot.set(Some(fault)));
    panic!("{message}")
}
