use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::alloc_type::Cow;
use crate::types::fault::Fault;
use crate::wrap::{raise, wrap_flat_with, wrap_with};

/// Success value of type `T`, or a [`Fault`].
///
/// `Outcome` is the common case: one success type and a uniform failure
/// representation. The primary transforming combinators ([`map`](Self::map),
/// [`flat_map`](Self::flat_map), [`map_fail`](Self::map_fail),
/// [`flat_map_fail`](Self::flat_map_fail)) run their closure under
/// [`wrap`](crate::wrap), so a panic inside the closure becomes a failed
/// outcome instead of unwinding through the caller.
///
/// # Serde Support
///
/// With the `serde` feature the two variants serialize as plain data
/// (`{"Success": value}` / `{"Failure": fault}`).
///
/// # Examples
///
/// ```
/// use outcome_rail::{fail, success, Outcome};
///
/// fn parse_port(raw: &str) -> Outcome<u16> {
///     match raw.parse::<u16>() {
///         Ok(port) => success(port).into(),
///         Err(_) => fail(format!("invalid port: {raw}")).into(),
///     }
/// }
///
/// assert_eq!(parse_port("8080").map(|p| p + 1), Outcome::from_ok(8081));
/// assert_eq!(
///     parse_port("http").fail_message().as_deref(),
///     Some("invalid port: http")
/// );
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum Outcome<T> {
    Success(T),
    Failure(Fault),
}

impl<T> Outcome<T> {
    /// Promotes a bare success value.
    #[inline]
    pub fn from_ok(value: T) -> Self {
        Self::Success(value)
    }

    /// Promotes a bare failure; strings become [`Fault::Message`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Fault, Outcome};
    ///
    /// let out = Outcome::<i32>::from_fail("missing header");
    /// assert_eq!(out.error(), Some(&Fault::from("missing header")));
    /// ```
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
        matches!(self, Self::Success(_))
    }

    #[must_use]
    #[inline]
    pub fn is_fail(&self) -> bool {
        !self.is_ok()
    }

    /// Borrows the success value, if any.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the fault, if any.
    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&Fault> {
        match self {
            Self::Success(_) => None,
            Self::Failure(fault) => Some(fault),
        }
    }

    /// Message of the carried fault, `None` when ok.
    #[must_use]
    #[inline]
    pub fn fail_message(&self) -> Option<Cow<'_, str>> {
        self.error().map(Fault::message)
    }

    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<Fault> {
        match self {
            Self::Success(_) => None,
            Self::Failure(fault) => Some(fault),
        }
    }

    /// Destructures into `(is_ok, value, error)`.
    ///
    /// Exactly one of `value` and `error` is `Some`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let (is_ok, value, error) = Outcome::from_ok("ready").into_parts();
    /// assert!(is_ok);
    /// assert_eq!(value, Some("ready"));
    /// assert!(error.is_none());
    /// ```
    #[inline]
    pub fn into_parts(self) -> (bool, Option<T>, Option<Fault>) {
        match self {
            Self::Success(value) => (true, Some(value), None),
            Self::Failure(fault) => (false, None, Some(fault)),
        }
    }

    #[inline]
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(fault) => Outcome::Failure(fault.clone()),
        }
    }

    /// Transforms the success value; a panic in `f` becomes a failure.
    ///
    /// Failures propagate untouched and `f` is never invoked for them.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let doubled = Outcome::from_ok(21).map(|x| x * 2);
    /// assert_eq!(doubled, Outcome::from_ok(42));
    ///
    /// let failed = Outcome::<i32>::from_fail("no input").map(|x| x * 2);
    /// assert_eq!(failed, Outcome::from_fail("no input"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => wrap_with(f, value),
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }

    /// Sequences another fallible step; a panic in `f` becomes a failure.
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => wrap_flat_with(f, value),
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }

    /// Recovers from a failure with a fallback value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let timeout = Outcome::<u64>::from_fail("lookup failed").map_fail(|_| 30);
    /// assert_eq!(timeout, Outcome::from_ok(30));
    /// ```
    #[inline]
    pub fn map_fail<F>(self, f: F) -> Self
    where
        F: FnOnce(Fault) -> T,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(fault) => wrap_with(f, fault),
        }
    }

    #[inline]
    pub fn flat_map_fail<F>(self, f: F) -> Self
    where
        F: FnOnce(Fault) -> Outcome<T>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(fault) => wrap_flat_with(f, fault),
        }
    }

    /// Monadic bind followed by a projection of both success values.
    ///
    /// Short-circuits on the first failure. Neither `selector` nor
    /// `projection` is guarded: a panic in them propagates to the caller.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let sum = Outcome::from_ok(2).select_many(|x| Outcome::from_ok(x + 3), |x, y| x + y);
    /// assert_eq!(sum, Outcome::from_ok(7));
    /// ```
    pub fn select_many<U, R, S, P>(self, selector: S, projection: P) -> Outcome<R>
    where
        S: FnOnce(&T) -> Outcome<U>,
        P: FnOnce(T, U) -> R,
    {
        let value = match self {
            Self::Success(value) => value,
            Self::Failure(fault) => return Outcome::Failure(fault),
        };
        match selector(&value) {
            Outcome::Success(second) => Outcome::Success(projection(value, second)),
            Outcome::Failure(fault) => Outcome::Failure(fault),
        }
    }

    /// Collapses into a plain value; exactly one of the callbacks runs.
    ///
    /// The callbacks are not guarded.
    #[inline]
    pub fn fold<R, OkF, FailF>(self, ok_map: OkF, fail_map: FailF) -> R
    where
        OkF: FnOnce(T) -> R,
        FailF: FnOnce(Fault) -> R,
    {
        match self {
            Self::Success(value) => ok_map(value),
            Self::Failure(fault) => fail_map(fault),
        }
    }

    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            f(value);
        }
        self
    }

    #[inline]
    pub fn inspect_fail<F>(self, f: F) -> Self
    where
        F: FnOnce(&Fault),
    {
        if let Self::Failure(fault) = &self {
            f(fault);
        }
        self
    }

    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(Fault) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(fault) => f(fault),
        }
    }

    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }

    /// Returns the fault.
    ///
    /// # Panics
    ///
    /// Raises [`Fault::InvalidOperation`] if the outcome is a success.
    #[track_caller]
    pub fn unwrap_fail(self) -> Fault {
        match self {
            Self::Success(_) => raise(Fault::invalid_operation("unwrap_fail called on a success")),
            Self::Failure(fault) => fault,
        }
    }
}

impl<T: Display> Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Success({value})"),
            Self::Failure(fault) => write!(f, "Fail({})", fault.message()),
        }
    }
}

/// Collects outcomes, stopping at the first failure.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let all: Outcome<Vec<i32>> = vec![Outcome::from_ok(1), Outcome::from_ok(2)].into_iter().collect();
/// assert_eq!(all, Outcome::from_ok(vec![1, 2]));
///
/// let first: Outcome<Vec<i32>> = vec![
///     Outcome::from_ok(1),
///     Outcome::from_fail("second"),
///     Outcome::from_fail("third"),
/// ]
/// .into_iter()
/// .collect();
/// assert_eq!(first, Outcome::from_fail("second"));
/// ```
impl<T, V> FromIterator<Outcome<T>> for Outcome<V>
where
    V: FromIterator<T>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Outcome<T>>,
    {
        let mut first_fault = None;
        let collected = iter
            .into_iter()
            .map_while(|outcome| match outcome {
                Outcome::Success(value) => Some(value),
                Outcome::Failure(fault) => {
                    first_fault = Some(fault);
                    None
                }
            })
            .collect();
        match first_fault {
            Some(fault) => Outcome::Failure(fault),
            None => Outcome::Success(collected),
        }
    }
}
