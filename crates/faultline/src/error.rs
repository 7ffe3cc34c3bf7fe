//! The chain node type for everything that is not a boundary.

use std::borrow::Cow;
use std::fmt;

use crate::chain::{self, Chain};
use crate::{BoxError, Capability, ErrorKind, Node, Origin};

/// A node in a failure chain.
///
/// Nodes are immutable once built. A wrapping node exclusively owns its cause,
/// except for standalone capability markers, which point at a shared static
/// base node.
pub struct Error {
    repr: Repr,
    origin: Option<Origin>,
    cause: Option<Cause>,
}

enum Repr {
    Plain(Cow<'static, str>),
    Annotated(String),
    Trace,
    Temporary,
    Timeout,
}

enum Cause {
    Owned(BoxError),
    Static(&'static Error),
}

impl Cause {
    fn as_node(&self) -> &Node {
        match self {
            Cause::Owned(err) => &**err,
            Cause::Static(err) => *err,
        }
    }
}

pub(crate) static TEMPORARY_BASE: Error = Error::base("temporary error occurred");
pub(crate) static TIMEOUT_BASE: Error = Error::base("operation timed out");

impl Error {
    /// Create a plain failure. Its origin is the caller.
    #[track_caller]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new_at(message, Origin::capture())
    }

    /// Create a plain failure with an explicitly captured origin.
    pub fn new_at(message: impl Into<Cow<'static, str>>, origin: Origin) -> Self {
        Self {
            repr: Repr::Plain(message.into()),
            origin: Some(origin),
            cause: None,
        }
    }

    /// Wrap `cause`, prefixing `prefix: ` onto its message.
    #[track_caller]
    pub fn annotated(cause: impl Into<BoxError>, prefix: impl Into<String>) -> Self {
        Self::annotated_at(cause, prefix, Origin::capture())
    }

    pub fn annotated_at(
        cause: impl Into<BoxError>,
        prefix: impl Into<String>,
        origin: Origin,
    ) -> Self {
        Self {
            repr: Repr::Annotated(prefix.into()),
            origin: Some(origin),
            cause: Some(Cause::Owned(cause.into())),
        }
    }

    /// Wrap `cause` with a call site and nothing else.
    #[track_caller]
    pub fn traced(cause: impl Into<BoxError>) -> Self {
        Self {
            repr: Repr::Trace,
            origin: Some(Origin::capture()),
            cause: Some(Cause::Owned(cause.into())),
        }
    }

    /// Mark `cause` with a capability. Without a cause the marker wraps the
    /// capability's shared base node.
    pub fn with_capability(capability: Capability, cause: Option<BoxError>) -> Self {
        let repr = match capability {
            Capability::Temporary => Repr::Temporary,
            Capability::Timeout => Repr::Timeout,
        };
        let cause = match cause {
            Some(err) => Cause::Owned(err),
            None => Cause::Static(capability.base()),
        };
        Self {
            repr,
            origin: None,
            cause: Some(cause),
        }
    }

    const fn base(message: &'static str) -> Self {
        Self {
            repr: Repr::Plain(Cow::Borrowed(message)),
            origin: None,
            cause: None,
        }
    }

    /// Get the node kind.
    pub fn kind(&self) -> ErrorKind {
        match self.repr {
            Repr::Plain(_) => ErrorKind::Plain,
            Repr::Annotated(_) => ErrorKind::Annotated,
            Repr::Trace => ErrorKind::Trace,
            Repr::Temporary => ErrorKind::Temporary,
            Repr::Timeout => ErrorKind::Timeout,
        }
    }

    /// Get the call site this node was built at. Capability markers and the
    /// shared base nodes have none.
    pub fn origin(&self) -> Option<Origin> {
        self.origin
    }

    /// Get the capability this node marks, if any.
    pub fn capability(&self) -> Option<Capability> {
        self.kind().capability()
    }

    /// Get the node this one wraps.
    pub fn direct_cause(&self) -> Option<&Node> {
        self.cause.as_ref().map(Cause::as_node)
    }

    /// Iterate the chain starting at this node.
    pub fn chain(&self) -> Chain<'_> {
        chain::chain(self)
    }

    /// Get the oldest node of the chain.
    pub fn deepest_cause(&self) -> &Node {
        chain::deepest_cause(self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.repr, self.direct_cause()) {
            (Repr::Plain(message), _) => f.write_str(message),
            (Repr::Annotated(prefix), Some(cause)) => write!(f, "{}: {}", prefix, cause),
            (Repr::Annotated(prefix), None) => f.write_str(prefix),
            (_, Some(cause)) => fmt::Display::fmt(cause, f),
            (_, None) => Ok(()),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())?;
        if let Some(origin) = &self.origin {
            write!(f, " at {:?}", origin)?;
        }
        writeln!(f)?;
        writeln!(f, "    Message: {}", self)?;

        if let Some(cause) = self.direct_cause() {
            writeln!(f)?;
            writeln!(f, "    Source: {:?}", cause)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.direct_cause()
    }
}

impl From<String> for Error {
    #[track_caller]
    fn from(message: String) -> Self {
        Error::new(message)
    }
}

impl From<&'static str> for Error {
    #[track_caller]
    fn from(message: &'static str) -> Self {
        Error::new(message)
    }
}

/// Annotate a failure with context. An absent failure stays absent.
#[track_caller]
pub fn annotate<E>(cause: Option<E>, prefix: impl Into<String>) -> Option<Error>
where
    E: Into<BoxError>,
{
    match cause {
        Some(cause) => Some(Error::annotated(cause, prefix)),
        None => None,
    }
}

/// Extend the backtrace of a failure without touching its message. An absent
/// failure stays absent.
#[track_caller]
pub fn trace<E>(cause: Option<E>) -> Option<Error>
where
    E: Into<BoxError>,
{
    match cause {
        Some(cause) => Some(Error::traced(cause)),
        None => None,
    }
}

/// Mark a failure as temporary. Without a failure, a standalone temporary
/// failure is produced.
pub fn temporary<E>(cause: Option<E>) -> Error
where
    E: Into<BoxError>,
{
    Error::with_capability(Capability::Temporary, cause.map(Into::into))
}

/// Mark a failure as timed out. Without a failure, a standalone timeout
/// failure is produced.
pub fn timeout<E>(cause: Option<E>) -> Error
where
    E: Into<BoxError>,
{
    Error::with_capability(Capability::Timeout, cause.map(Into::into))
}
