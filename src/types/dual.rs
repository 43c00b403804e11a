use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::alloc_type::String;
use crate::types::fault::Fault;
use crate::wrap::raise;

/// Success payload `S`, or failure payload `F`, both chosen by the caller.
///
/// The most general shape. When `F` is [`Fault`] it is isomorphic to
/// [`Outcome`](crate::Outcome) and converts to and from it losslessly.
///
/// Unlike `Outcome`, the combinators here are not guarded: a captured panic
/// has no way into an arbitrary `F`. Convert to `Outcome` first when capture
/// is needed.
///
/// # Examples
///
/// ```
/// use outcome_rail::{fail, success, DualOutcome};
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum Rejection {
///     TooLarge(usize),
///     Empty,
/// }
///
/// fn accept(body: &[u8]) -> DualOutcome<usize, Rejection> {
///     match body.len() {
///         0 => fail(Rejection::Empty).into(),
///         n if n > 1024 => fail(Rejection::TooLarge(n)).into(),
///         n => success(n).into(),
///     }
/// }
///
/// assert_eq!(accept(b"hello").value(), Some(&5));
/// assert_eq!(accept(b"").error(), Some(&Rejection::Empty));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum DualOutcome<S, F> {
    Success(S),
    Failure(F),
}

impl<S, F> DualOutcome<S, F> {
    #[inline]
    pub fn from_ok(value: S) -> Self {
        Self::Success(value)
    }

    #[inline]
    pub fn from_fail(error: F) -> Self {
        Self::Failure(error)
    }

    #[must_use]
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    #[inline]
    pub fn is_fail(&self) -> bool {
        !self.is_ok()
    }

    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&F> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<F> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Human-readable failure description, `None` when ok.
    ///
    /// The payload is converted into a [`Fault`] and its
    /// [`message`](Fault::message) returned, so a `DualOutcome<T, Fault>`
    /// reports the same text as the equivalent [`Outcome<T>`](crate::Outcome).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{DualOutcome, Fault};
    ///
    /// let failed = DualOutcome::<u8, Fault>::from_fail(Fault::from("corrupt header"));
    /// assert_eq!(failed.fail_message().as_deref(), Some("corrupt header"));
    /// ```
    #[must_use]
    pub fn fail_message(&self) -> Option<String>
    where
        F: Into<Fault> + Clone,
    {
        self.error()
            .map(|error| Into::<Fault>::into(error.clone()).message().into_owned())
    }

    /// Destructures into `(is_ok, value, error)`.
    #[inline]
    pub fn into_parts(self) -> (bool, Option<S>, Option<F>) {
        match self {
            Self::Success(value) => (true, Some(value), None),
            Self::Failure(error) => (false, None, Some(error)),
        }
    }

    #[inline]
    pub fn as_ref(&self) -> DualOutcome<&S, &F> {
        match self {
            Self::Success(value) => DualOutcome::Success(value),
            Self::Failure(error) => DualOutcome::Failure(error),
        }
    }

    #[inline]
    pub fn map<U, M>(self, f: M) -> DualOutcome<U, F>
    where
        M: FnOnce(S) -> U,
    {
        match self {
            Self::Success(value) => DualOutcome::Success(f(value)),
            Self::Failure(error) => DualOutcome::Failure(error),
        }
    }

    #[inline]
    pub fn flat_map<U, M>(self, f: M) -> DualOutcome<U, F>
    where
        M: FnOnce(S) -> DualOutcome<U, F>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(error) => DualOutcome::Failure(error),
        }
    }

    /// Transforms the failure payload, leaving a success untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::DualOutcome;
    ///
    /// let coded = DualOutcome::<(), u16>::from_fail(404).map_fail(|code| format!("HTTP {code}"));
    /// assert_eq!(coded.error().map(String::as_str), Some("HTTP 404"));
    /// ```
    #[inline]
    pub fn map_fail<G, M>(self, f: M) -> DualOutcome<S, G>
    where
        M: FnOnce(F) -> G,
    {
        match self {
            Self::Success(value) => DualOutcome::Success(value),
            Self::Failure(error) => DualOutcome::Failure(f(error)),
        }
    }

    #[inline]
    pub fn flat_map_fail<G, M>(self, f: M) -> DualOutcome<S, G>
    where
        M: FnOnce(F) -> DualOutcome<S, G>,
    {
        match self {
            Self::Success(value) => DualOutcome::Success(value),
            Self::Failure(error) => f(error),
        }
    }

    /// Monadic bind followed by a projection of both success values.
    ///
    /// Short-circuits on the first failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::DualOutcome;
    ///
    /// let width = DualOutcome::<u32, &str>::from_ok(640);
    /// let area = width.select_many(|_| DualOutcome::from_ok(480u32), |w, h| w * h);
    /// assert_eq!(area, DualOutcome::from_ok(307_200));
    ///
    /// let missing = width.select_many(|_| DualOutcome::<u32, _>::from_fail("no height"), |w, h| w * h);
    /// assert_eq!(missing, DualOutcome::from_fail("no height"));
    /// ```
    pub fn select_many<U, R, Sel, P>(self, selector: Sel, projection: P) -> DualOutcome<R, F>
    where
        Sel: FnOnce(&S) -> DualOutcome<U, F>,
        P: FnOnce(S, U) -> R,
    {
        let value = match self {
            Self::Success(value) => value,
            Self::Failure(error) => return DualOutcome::Failure(error),
        };
        match selector(&value) {
            DualOutcome::Success(second) => DualOutcome::Success(projection(value, second)),
            DualOutcome::Failure(error) => DualOutcome::Failure(error),
        }
    }

    /// Collapses into a plain value; exactly one of the callbacks runs.
    #[inline]
    pub fn fold<R, OkF, FailF>(self, ok_map: OkF, fail_map: FailF) -> R
    where
        OkF: FnOnce(S) -> R,
        FailF: FnOnce(F) -> R,
    {
        match self {
            Self::Success(value) => ok_map(value),
            Self::Failure(error) => fail_map(error),
        }
    }

    #[inline]
    pub fn unwrap_or(self, default: S) -> S {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    #[inline]
    pub fn unwrap_or_else<M>(self, f: M) -> S
    where
        M: FnOnce(F) -> S,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => f(error),
        }
    }

    /// Returns the failure payload.
    ///
    /// # Panics
    ///
    /// Raises [`Fault::InvalidOperation`] if the outcome is a success.
    #[track_caller]
    pub fn unwrap_fail(self) -> F {
        match self {
            Self::Success(_) => raise(Fault::invalid_operation("unwrap_fail called on a success")),
            Self::Failure(error) => error,
        }
    }
}

impl<S: Display, F: Display> Display for DualOutcome<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Success({value})"),
            Self::Failure(error) => write!(f, "Fail({error})"),
        }
    }
}
