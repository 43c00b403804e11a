//! The canonical failure payload carried by [`Status`](crate::Status) and
//! [`Outcome`](crate::Outcome).
//!
//! A [`Fault`] is a tagged value rather than a thrown object: it is either a
//! plain message, one of the crate's own argument/operation failures, a
//! captured panic, or an arbitrary [`core::error::Error`] kept behind an
//! [`Arc`] so that cloning a failed outcome stays cheap.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{Fault, FaultKind};
//!
//! let fault = Fault::from("connection refused");
//! assert_eq!(fault.kind(), FaultKind::Message);
//! assert_eq!(fault.message(), "connection refused");
//!
//! let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml");
//! let fault = Fault::from(io);
//! assert_eq!(fault.kind(), FaultKind::Source);
//! assert!(fault.downcast_ref::<std::io::Error>().is_some());
//! ```
use core::error::Error;
use core::fmt::{self, Display};
use core::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::alloc_type::{Arc, Box, Cow, String, ToString};

/// Shared, thread-safe error object stored by [`Fault::Source`].
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// Field-less discriminant of a [`Fault`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum FaultKind {
    Message,
    InvalidArgument,
    InvalidOperation,
    Panicked,
    Source,
}

impl FaultKind {
    /// Short lowercase label, used by `Display` and the tracing hook.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::InvalidArgument => "invalid_argument",
            Self::InvalidOperation => "invalid_operation",
            Self::Panicked => "panicked",
            Self::Source => "source",
        }
    }
}

impl Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error object carried in the failure slot of [`Status`](crate::Status)
/// and [`Outcome`](crate::Outcome).
///
/// String failures always become [`Fault::Message`] whose message is the
/// string itself, so `fail("timeout")` and `Fault::from("timeout")` compare
/// equal.
///
/// # Equality
///
/// Message-carrying kinds compare by kind and text. [`Fault::Source`]
/// compares by identity of the shared error object, so two clones of the same
/// fault are equal while two independently built sources are not.
///
/// # Examples
///
/// ```
/// use outcome_rail::Fault;
///
/// let a = Fault::from("boom");
/// let b = Fault::new(String::from("boom"));
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "boom");
///
/// let arg = Fault::invalid_argument("value must not be absent");
/// assert_eq!(arg.to_string(), "invalid argument: value must not be absent");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "FaultRepr", from = "FaultRepr"))]
#[derive(Clone, Debug)]
pub enum Fault {
    /// Plain failure message.
    Message(Cow<'static, str>),
    /// A precondition on an argument was violated.
    InvalidArgument(Cow<'static, str>),
    /// The operation is not valid for the current state.
    InvalidOperation(Cow<'static, str>),
    /// A panic captured by a guarded computation.
    Panicked(Cow<'static, str>),
    /// Any other error object.
    Source(SharedError),
}

impl Fault {
    /// Creates a [`Fault::Message`].
    #[inline]
    pub fn new<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self::Message(message.into())
    }

    /// Creates a [`Fault::InvalidArgument`].
    #[inline]
    pub fn invalid_argument<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self::InvalidArgument(message.into())
    }

    /// Creates a [`Fault::InvalidOperation`].
    #[inline]
    pub fn invalid_operation<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self::InvalidOperation(message.into())
    }

    /// Creates a [`Fault::Panicked`] from a captured panic message.
    #[inline]
    pub fn panicked<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self::Panicked(message.into())
    }

    /// Wraps an arbitrary error object.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Fault, FaultKind};
    ///
    /// let parse = "x1".parse::<u8>().unwrap_err();
    /// let fault = Fault::from_error(parse);
    /// assert_eq!(fault.kind(), FaultKind::Source);
    /// assert_eq!(fault.message(), "invalid digit found in string");
    /// ```
    #[inline]
    pub fn from_error<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Source(Arc::new(error))
    }

    /// Returns the field-less discriminant.
    #[inline]
    pub fn kind(&self) -> FaultKind {
        match self {
            Self::Message(_) => FaultKind::Message,
            Self::InvalidArgument(_) => FaultKind::InvalidArgument,
            Self::InvalidOperation(_) => FaultKind::InvalidOperation,
            Self::Panicked(_) => FaultKind::Panicked,
            Self::Source(_) => FaultKind::Source,
        }
    }

    /// Human-readable description without the kind prefix used by `Display`.
    ///
    /// Borrowed for every kind except [`Fault::Source`], whose message is the
    /// source's own `Display` output.
    pub fn message(&self) -> Cow<'_, str> {
        match self {
            Self::Message(text)
            | Self::InvalidArgument(text)
            | Self::InvalidOperation(text)
            | Self::Panicked(text) => Cow::Borrowed(&**text),
            Self::Source(source) => Cow::Owned(source.to_string()),
        }
    }

    /// Returns the wrapped error object for [`Fault::Source`].
    #[inline]
    pub fn source_error(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        match self {
            Self::Source(source) => Some(&**source),
            _ => None,
        }
    }

    /// Attempts to view the wrapped error object as a concrete type.
    #[inline]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.source_error()?.downcast_ref::<E>()
    }

    /// Checks whether the fault is of `kind`.
    #[inline]
    pub fn is_kind(&self, kind: FaultKind) -> bool {
        self.kind() == kind
    }
}

impl Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(text) => f.write_str(text),
            Self::InvalidArgument(text) => write!(f, "invalid argument: {text}"),
            Self::InvalidOperation(text) => write!(f, "invalid operation: {text}"),
            Self::Panicked(text) => write!(f, "panicked: {text}"),
            Self::Source(source) => Display::fmt(source, f),
        }
    }
}

impl Error for Fault {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Source(source) => Some(&**source),
            _ => None,
        }
    }
}

impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Message(a), Self::Message(b))
            | (Self::InvalidArgument(a), Self::InvalidArgument(b))
            | (Self::InvalidOperation(a), Self::InvalidOperation(b))
            | (Self::Panicked(a), Self::Panicked(b)) => a == b,
            (Self::Source(a), Self::Source(b)) => {
                core::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => false,
        }
    }
}

impl Eq for Fault {}

impl Hash for Fault {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            Self::Message(text)
            | Self::InvalidArgument(text)
            | Self::InvalidOperation(text)
            | Self::Panicked(text) => text.hash(state),
            Self::Source(source) => (Arc::as_ptr(source) as *const () as usize).hash(state),
        }
    }
}

impl From<&'static str> for Fault {
    #[inline]
    fn from(message: &'static str) -> Self {
        Self::Message(Cow::Borrowed(message))
    }
}

impl From<String> for Fault {
    #[inline]
    fn from(message: String) -> Self {
        Self::Message(Cow::Owned(message))
    }
}

impl From<Cow<'static, str>> for Fault {
    #[inline]
    fn from(message: Cow<'static, str>) -> Self {
        Self::Message(message)
    }
}

impl From<Box<dyn Error + Send + Sync + 'static>> for Fault {
    #[inline]
    fn from(error: Box<dyn Error + Send + Sync + 'static>) -> Self {
        Self::Source(Arc::from(error))
    }
}

impl From<SharedError> for Fault {
    #[inline]
    fn from(error: SharedError) -> Self {
        Self::Source(error)
    }
}

impl From<fmt::Error> for Fault {
    #[inline]
    fn from(error: fmt::Error) -> Self {
        Self::from_error(error)
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Fault {
    #[inline]
    fn from(error: std::io::Error) -> Self {
        Self::from_error(error)
    }
}

/// Plain-data form of a [`Fault`] used on the serde boundary.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct FaultRepr {
    kind: FaultKind,
    message: String,
}

#[cfg(feature = "serde")]
impl From<Fault> for FaultRepr {
    fn from(fault: Fault) -> Self {
        Self { kind: fault.kind(), message: fault.message().into_owned() }
    }
}

#[cfg(feature = "serde")]
impl From<FaultRepr> for Fault {
    fn from(repr: FaultRepr) -> Self {
        let text = Cow::Owned(repr.message);
        match repr.kind {
            FaultKind::Message => Self::Message(text),
            FaultKind::InvalidArgument => Self::InvalidArgument(text),
            FaultKind::InvalidOperation => Self::InvalidOperation(text),
            FaultKind::Panicked => Self::Panicked(text),
            FaultKind::Source => Self::Source(Arc::new(DetachedSource(text.into_owned()))),
        }
    }
}

/// Stand-in for a source error that crossed a serialization boundary.
#[cfg(feature = "serde")]
#[derive(Debug)]
struct DetachedSource(String);

#[cfg(feature = "serde")]
impl Display for DetachedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl Error for DetachedSource {}
