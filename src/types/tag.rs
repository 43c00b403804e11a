//! Tag helpers produced by [`success`] and [`fail`].
//!
//! A tag only carries a payload. It exists so a call site can write a bare
//! value and let the surrounding `From`/`Into` conversion pick the right
//! shape:
//!
//! ```
//! use outcome_rail::{fail, success, DualOutcome, Outcome, Status};
//!
//! let ok: Outcome<u16> = success(8080).into();
//! let failed: Outcome<u16> = fail("port already in use").into();
//! let status: Status = fail("disk full").into();
//! let dual: DualOutcome<u16, i32> = fail(-1).into();
//!
//! assert!(ok.is_ok());
//! assert!(failed.is_fail());
//! assert!(status.is_fail());
//! assert_eq!(dual.error(), Some(&-1));
//! ```
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::fault::Fault;

/// Success payload awaiting conversion into a result shape.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct OkTag<T> {
    pub value: T,
}

/// Failure payload awaiting conversion into a result shape.
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct FailTag<E> {
    pub value: E,
}

impl<T> OkTag<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        Self { value }
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<E> FailTag<E> {
    #[inline]
    pub fn new(value: E) -> Self {
        Self { value }
    }

    /// Builds a tag from a payload that may be absent.
    ///
    /// A failure must always carry a concrete payload, so `None` is rejected
    /// with [`Fault::InvalidArgument`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{FailTag, FaultKind};
    ///
    /// assert!(FailTag::try_new(Some("timeout")).is_ok());
    ///
    /// let err = FailTag::<&str>::try_new(None).unwrap_err();
    /// assert_eq!(err.kind(), FaultKind::InvalidArgument);
    /// ```
    #[inline]
    pub fn try_new(value: Option<E>) -> Result<Self, Fault> {
        match value {
            Some(value) => Ok(Self { value }),
            None => Err(absent_payload()),
        }
    }

    #[inline]
    pub fn into_inner(self) -> E {
        self.value
    }

    /// Converts the payload into the canonical [`Fault`].
    ///
    /// This is where string payloads become [`Fault::Message`].
    #[inline]
    pub fn into_fault(self) -> Fault
    where
        E: Into<Fault>,
    {
        self.value.into()
    }
}

#[inline]
fn absent_payload() -> Fault {
    Fault::invalid_argument("failure payload must not be absent")
}

/// Tags `value` as a success.
#[inline]
pub fn success<T>(value: T) -> OkTag<T> {
    OkTag::new(value)
}

/// Tags `value` as a failure.
#[inline]
pub fn fail<E>(value: E) -> FailTag<E> {
    FailTag::new(value)
}

/// Tags an optional payload as a failure.
///
/// # Panics
///
/// Raises [`Fault::InvalidArgument`] when `value` is `None`;
/// [`wrap`](crate::wrap) captures it unchanged.
///
/// # Examples
///
/// ```
/// use outcome_rail::{fail_some, Outcome};
///
/// let reason: Option<&'static str> = Some("quota exceeded");
/// let outcome: Outcome<()> = fail_some(reason).into();
/// assert!(outcome.is_fail());
/// ```
#[inline]
#[track_caller]
pub fn fail_some<E>(value: Option<E>) -> FailTag<E> {
    match FailTag::try_new(value) {
        Ok(tag) => tag,
        Err(fault) => crate::wrap::raise(fault),
    }
}
