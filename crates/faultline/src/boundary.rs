//! The public/internal boundary.
//!
//! A [`BoundaryError`] carries a status code and a message that are safe to
//! show an external caller, plus an optional internal cause that is not. Its
//! `Display` output renders only the public half. The internal cause stays
//! reachable through `source()`, so chain traversal and capability checks
//! still see through the boundary.

use std::fmt;

use crate::chain;
use crate::status::{Status, canonical_reason};
use crate::{BoxError, Error, Node, Origin};

/// A failure with a public face.
pub struct BoundaryError {
    code: u16,
    message: String,
    internal: Option<BoxError>,
    origin: Origin,
}

impl BoundaryError {
    /// Create a boundary error. An empty `message` is replaced by the
    /// standard phrase for `code` when one is known.
    #[track_caller]
    pub fn new(internal: Option<BoxError>, code: u16, message: impl Into<String>) -> Self {
        Self::new_at(internal, code, message, Origin::capture())
    }

    /// Like [`new`](Self::new), with an explicitly captured origin.
    pub fn new_at(
        internal: Option<BoxError>,
        code: u16,
        message: impl Into<String>,
        origin: Origin,
    ) -> Self {
        let mut message = message.into();
        if message.is_empty() {
            if let Some(reason) = canonical_reason(code) {
                message.push_str(reason);
            }
        }
        Self::from_parts(internal, code, message, origin)
    }

    /// Create a boundary error with a formatted message, used as given.
    #[track_caller]
    pub fn with_template(internal: Option<BoxError>, code: u16, args: fmt::Arguments<'_>) -> Self {
        Self::from_parts(internal, code, args.to_string(), Origin::capture())
    }

    pub(crate) fn from_parts(
        internal: Option<BoxError>,
        code: u16,
        message: String,
        origin: Origin,
    ) -> Self {
        tracing::trace!(code, internal = internal.is_some(), "boundary error raised");
        Self {
            code,
            message,
            internal,
            origin,
        }
    }

    /// Status code shown to the caller.
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Message shown to the caller.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The named status for [`code`](Self::code), if it has one.
    pub fn status(&self) -> Option<Status> {
        Status::from_code(self.code)
    }

    /// The internal cause. Never show this to an external caller.
    pub fn internal(&self) -> Option<&Node> {
        match &self.internal {
            Some(err) => Some(&**err),
            None => None,
        }
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// The public body of this error, without its internal cause.
    pub fn public(&self) -> PublicError {
        PublicError {
            code: self.code,
            error: self.message.clone(),
        }
    }

    /// Find the boundary error attached closest to the origin of the failure.
    ///
    /// Starting at the internal cause, faultline's own wrapping nodes are
    /// skipped. Reaching another boundary error continues the search from
    /// there. Anything else (a plain failure, a foreign error, or the end of
    /// the chain) stops the search and `self` is returned: a foreign node
    /// cannot be proven safe to look through.
    pub fn deepest_boundary_error(&self) -> &BoundaryError {
        let mut current = self.internal();
        while let Some(node) = current {
            if let Some(boundary) = node.downcast_ref::<BoundaryError>() {
                return boundary.deepest_boundary_error();
            }
            match node.downcast_ref::<Error>() {
                Some(err) if err.kind().is_transparent() => current = err.direct_cause(),
                _ => {
                    tracing::trace!(code = self.code, "boundary lookup stopped at an opaque node");
                    break;
                }
            }
        }
        self
    }
}

/// Find the first boundary error in the chain, then the deepest boundary
/// error reachable from it.
pub fn deepest_boundary_error(node: &Node) -> Option<&BoundaryError> {
    chain::find::<BoundaryError>(node).map(BoundaryError::deepest_boundary_error)
}

/// Create a boundary error around an optional cause. An empty `message` is
/// replaced by the standard phrase for `code` when one is known.
#[track_caller]
pub fn boundary<E>(cause: Option<E>, code: u16, message: impl Into<String>) -> BoundaryError
where
    E: Into<BoxError>,
{
    BoundaryError::new(cause.map(Into::into), code, message)
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "code={}", self.code)?;
        if !self.message.is_empty() {
            write!(f, ", message={}", self.message)?;
        }
        Ok(())
    }
}

impl fmt::Debug for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundaryError")
            .field("code", &self.code)
            .field("message", &self.message)
            .field("origin", &self.origin)
            .field("internal", &self.internal)
            .finish()
    }
}

impl std::error::Error for BoundaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.internal()
    }
}

/// The representation of a boundary error that may cross a trust boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PublicError {
    pub code: u16,
    pub error: String,
}

impl From<&BoundaryError> for PublicError {
    fn from(err: &BoundaryError) -> Self {
        err.public()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BoundaryError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.public(), serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{annotate, temporary};

    #[test]
    fn test_display_hides_internal() {
        let err = boundary(Some(Error::new("db password rejected")), 400, "bad input");
        assert_eq!(err.to_string(), "code=400, message=bad input");
        assert_eq!(err.internal().unwrap().to_string(), "db password rejected");
    }

    #[test]
    fn test_display_code_only() {
        let err = BoundaryError::new(None, 799, "");
        assert_eq!(err.message(), "");
        assert_eq!(err.to_string(), "code=799");
    }

    #[test]
    fn test_empty_message_uses_reason() {
        let err = boundary(None::<Error>, 404, "");
        assert_eq!(err.message(), "Not Found");
        assert_eq!(err.status(), Some(Status::NotFound));
    }

    #[test]
    fn test_template_keeps_empty_message() {
        let err = BoundaryError::with_template(None, 404, format_args!(""));
        assert_eq!(err.message(), "");
    }

    #[test]
    fn test_deepest_without_internal() {
        let err = boundary(None::<Error>, 500, "internal");
        assert!(std::ptr::eq(err.deepest_boundary_error(), &err));
    }

    #[test]
    fn test_deepest_skips_own_wrappers() {
        let inner = boundary(Some(Error::new("no rows")), 404, "not found");
        let wrapped = temporary(Some(Error::traced(annotate(Some(inner), "ctx").unwrap())));
        let outer = boundary(Some(wrapped), 500, "");

        let deepest = outer.deepest_boundary_error();
        assert_eq!(deepest.code(), 404);
        assert_eq!(deepest.message(), "not found");
    }

    #[test]
    fn test_deepest_stops_at_plain() {
        let outer = boundary(Some(Error::new("no rows")), 500, "internal");
        assert!(std::ptr::eq(outer.deepest_boundary_error(), &outer));
    }

    #[test]
    fn test_free_function() {
        let plain = Error::new("x");
        assert!(deepest_boundary_error(&plain).is_none());

        let inner = boundary(None::<Error>, 410, "");
        let err = Error::annotated(boundary(Some(inner), 500, ""), "handler");
        let found = deepest_boundary_error(&err).unwrap();
        assert_eq!(found.code(), 410);
        assert_eq!(found.message(), "Gone");
    }

    #[test]
    fn test_public_body() {
        let err = boundary(Some(Error::new("secret")), 403, "no access");
        assert_eq!(
            err.public(),
            PublicError {
                code: 403,
                error: "no access".to_string()
            }
        );
    }
}
