//! Node kinds defined by faultline.

use strum_macros::{Display, IntoStaticStr};

use crate::Capability;

/// The kind of an [`Error`](crate::Error) node.
///
/// Together with [`BoundaryError`](crate::BoundaryError) these are the node
/// kinds this crate owns. Any other error value found in a chain is foreign
/// and treated as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    /// An originating failure with a fixed message and no cause
    Plain,

    /// Context prefixed onto the cause's message
    Annotated,

    /// Records a call site only; the message is the cause's
    Trace,

    /// Marks the chain as temporary; the message is the cause's
    Temporary,

    /// Marks the chain as timed out; the message is the cause's
    Timeout,
}

impl ErrorKind {
    /// Returns the kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Whether a boundary lookup may look through this kind to its cause.
    pub fn is_transparent(&self) -> bool {
        !matches!(self, ErrorKind::Plain)
    }

    /// The capability this kind contributes, if any.
    pub fn capability(&self) -> Option<Capability> {
        match self {
            ErrorKind::Temporary => Some(Capability::Temporary),
            ErrorKind::Timeout => Some(Capability::Timeout),
            _ => None,
        }
    }
}
