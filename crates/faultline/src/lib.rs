//! # faultline
//!
//! Diagnostic failure chains that keep what a caller may see apart from what
//! only the logs should.
//!
//! ## Design Philosophy
//!
//! - **Chain**: each node wraps at most one direct cause, exposed through
//!   `std::error::Error::source`, so foreign errors take part in every walk
//! - **Annotation**: context is prefixed onto the message, call sites are
//!   recorded for the backtrace
//! - **Capability**: temporary/timeout markers survive any wrapping above them
//! - **Boundary**: a [`BoundaryError`] renders only its code and public
//!   message; the internal cause is reachable by traversal only
//!
//! ## Usage
//!
//! ```rust
//! use faultline::{Error, ResultExt, deepest_boundary_error, not_found};
//!
//! fn find_document(_id: &str) -> Result<String, faultline::BoundaryError> {
//!     Err(not_found(Some(Error::new("no rows")), "document not found"))
//! }
//!
//! fn handler() -> Result<String, faultline::BoundaryError> {
//!     find_document("doc123")
//!         .annotate("while user 123 opened doc123")
//!         .boundary(500, "")
//! }
//!
//! let err = handler().unwrap_err();
//! let public = deepest_boundary_error(&err).unwrap();
//! assert_eq!(public.code(), 404);
//! assert_eq!(public.message(), "document not found");
//! ```
//!
//! ## Principles
//!
//! - Absence propagates: wrapping `None`/`Ok` never manufactures a failure
//! - Constructing a node never fails and never panics
//! - Only a boundary error's `Display` output may cross a trust boundary

mod backtrace;
mod boundary;
mod capability;
mod chain;
mod error;
mod ext;
mod helpers;
mod kind;
mod macros;
#[doc(hidden)]
pub mod origin;
mod status;

pub use backtrace::{Backtrace, Frame, backtrace, origin_of};
pub use boundary::{BoundaryError, PublicError, boundary, deepest_boundary_error};
pub use capability::{Capability, has_capability, is_temporary, is_timeout};
pub use chain::{Chain, chain, deepest_cause, direct_cause, find, is, is_by, is_same};
pub use error::{Error, annotate, temporary, timeout, trace};
pub use ext::ResultExt;
pub use helpers::{when, whenf};
pub use kind::ErrorKind;
pub use origin::Origin;
pub use status::{
    Status, bad_gateway, bad_gatewayf, bad_request, bad_requestf, canonical_reason, forbidden,
    forbiddenf, gone, gonef, internal_server_error, internal_server_errorf, method_not_allowed,
    method_not_allowedf, not_found, not_foundf, request_entity_too_large,
    request_entity_too_largef, request_timeout, request_timeoutf, service_unavailable,
    service_unavailablef, too_many_requests, too_many_requestsf, unauthorized, unauthorizedf,
    unsupported_media_type, unsupported_media_typef,
};

/// An owned failure of any kind, faultline's or foreign.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A borrowed chain node of any kind.
pub type Node = dyn std::error::Error + 'static;

/// Result type alias using faultline Error
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[doc(hidden)]
pub mod __private {
    use crate::{BoundaryError, BoxError, Error, Origin};

    pub fn annotate_at<E>(cause: Option<E>, prefix: String, origin: Origin) -> Option<Error>
    where
        E: Into<BoxError>,
    {
        cause.map(|cause| Error::annotated_at(cause, prefix, origin))
    }

    pub fn boundary_at<E>(cause: Option<E>, code: u16, message: String, origin: Origin) -> BoundaryError
    where
        E: Into<BoxError>,
    {
        BoundaryError::from_parts(cause.map(Into::into), code, message, origin)
    }
}
