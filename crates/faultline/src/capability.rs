//! Orthogonal failure capabilities.

use std::io;

use strum_macros::{Display, EnumIter, IntoStaticStr};

use crate::chain;
use crate::error::{TEMPORARY_BASE, TIMEOUT_BASE};
use crate::{Error, Node};

/// A property attachable to any chain, independent of its message.
///
/// Capabilities survive further wrapping: annotating a temporary failure
/// still yields a temporary failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Capability {
    /// Retrying may succeed
    Temporary,

    /// An operation ran out of time
    Timeout,
}

impl Capability {
    /// Returns the capability as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// The shared node a standalone marker of this capability wraps.
    pub fn base(self) -> &'static Error {
        match self {
            Capability::Temporary => &TEMPORARY_BASE,
            Capability::Timeout => &TIMEOUT_BASE,
        }
    }

    /// Whether `node` itself, not its causes, exposes this capability.
    ///
    /// Besides faultline's own markers, `std::io::Error` values are classified
    /// by their kind.
    pub fn exposed_by(self, node: &Node) -> bool {
        if let Some(err) = node.downcast_ref::<Error>() {
            return err.capability() == Some(self);
        }
        if let Some(err) = node.downcast_ref::<io::Error>() {
            return match self {
                Capability::Temporary => matches!(
                    err.kind(),
                    io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted
                ),
                Capability::Timeout => err.kind() == io::ErrorKind::TimedOut,
            };
        }
        false
    }
}

/// Whether any node of the chain exposes `capability`.
pub fn has_capability(node: &Node, capability: Capability) -> bool {
    chain::is_by(node, |n| capability.exposed_by(n))
}

/// Whether the chain was marked temporary anywhere.
pub fn is_temporary(node: &Node) -> bool {
    has_capability(node, Capability::Temporary)
}

/// Whether the chain was marked as timed out anywhere.
pub fn is_timeout(node: &Node) -> bool {
    has_capability(node, Capability::Timeout)
}
