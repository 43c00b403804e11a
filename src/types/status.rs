use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::alloc_type::Cow;
use crate::types::fault::Fault;
use crate::types::outcome::Outcome;
use crate::wrap::{wrap, wrap_flat};

/// Success without a payload, or a [`Fault`].
///
/// The shape for fallible operations that return nothing on success.
///
/// # Examples
///
/// ```
/// use outcome_rail::{fail, Status};
///
/// fn flush(dirty: bool) -> Status {
///     if dirty {
///         fail("write-back cache not empty").into()
///     } else {
///         Status::success()
///     }
/// }
///
/// assert!(flush(false).is_ok());
/// assert_eq!(flush(true).to_string(), "Fail(write-back cache not empty)");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug, Hash, Default)]
pub enum Status {
    #[default]
    Success,
    Failure(Fault),
}

impl Status {
    #[inline]
    pub fn success() -> Self {
        Self::Success
    }

    /// Promotes a bare failure; strings become [`Fault::Message`].
    #[inline]
    pub fn from_fail<E>(error: E) -> Self
    where
        E: Into<Fault>,
    {
        Self::Failure(error.into())
    }

    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success)
    }

    #[must_use]
    #[inline]
    pub fn is_fail(&self) -> bool {
        !self.is_ok()
    }

    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&Fault> {
        match self {
            Self::Success => None,
            Self::Failure(fault) => Some(fault),
        }
    }

    #[must_use]
    #[inline]
    pub fn fail_message(&self) -> Option<Cow<'_, str>> {
        self.error().map(Fault::message)
    }

    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<Fault> {
        match self {
            Self::Success => None,
            Self::Failure(fault) => Some(fault),
        }
    }

    /// Destructures into `(is_ok, error)`.
    #[inline]
    pub fn into_parts(self) -> (bool, Option<Fault>) {
        match self {
            Self::Success => (true, None),
            Self::Failure(fault) => (false, Some(fault)),
        }
    }

    /// Continues a successful step with a value-producing `f`.
    ///
    /// A panic in `f` becomes a failure; an existing failure propagates.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Status};
    ///
    /// let next = Status::success().map(|| "connected");
    /// assert_eq!(next, Outcome::from_ok("connected"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce() -> U,
    {
        match self {
            Self::Success => wrap(f),
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }

    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce() -> Outcome<U>,
    {
        match self {
            Self::Success => wrap_flat(f),
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }

    /// Collapses into a plain value. The callbacks are not guarded.
    #[inline]
    pub fn fold<R, OkF, FailF>(self, ok_map: OkF, fail_map: FailF) -> R
    where
        OkF: FnOnce() -> R,
        FailF: FnOnce(Fault) -> R,
    {
        match self {
            Self::Success => ok_map(),
            Self::Failure(fault) => fail_map(fault),
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("Success"),
            Self::Failure(fault) => write!(f, "Fail({})", fault.message()),
        }
    }
}
