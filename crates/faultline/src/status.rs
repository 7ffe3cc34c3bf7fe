//! Public-facing status codes and their boundary constructors.

use std::fmt;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, IntoStaticStr};

use crate::{BoundaryError, BoxError};

/// A status a boundary error can be raised with through a named constructor.
///
/// Any other numeric code is still accepted by [`boundary`](crate::boundary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display, EnumIter)]
#[non_exhaustive]
pub enum Status {
    // =========================================================================
    // Client errors
    // =========================================================================
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    RequestTimeout,
    Gone,
    RequestEntityTooLarge,
    UnsupportedMediaType,
    TooManyRequests,

    // =========================================================================
    // Server errors
    // =========================================================================
    InternalServerError,
    BadGateway,
    ServiceUnavailable,
}

impl Status {
    /// Numeric status code
    pub const fn code(self) -> u16 {
        match self {
            Status::BadRequest => 400,
            Status::Unauthorized => 401,
            Status::Forbidden => 403,
            Status::NotFound => 404,
            Status::MethodNotAllowed => 405,
            Status::RequestTimeout => 408,
            Status::Gone => 410,
            Status::RequestEntityTooLarge => 413,
            Status::UnsupportedMediaType => 415,
            Status::TooManyRequests => 429,
            Status::InternalServerError => 500,
            Status::BadGateway => 502,
            Status::ServiceUnavailable => 503,
        }
    }

    /// Look up the named status for a numeric code.
    pub fn from_code(code: u16) -> Option<Self> {
        Status::iter().find(|status| status.code() == code)
    }

    /// Standard human-readable phrase for this status.
    pub fn reason(self) -> &'static str {
        canonical_reason(self.code()).unwrap_or_else(|| self.into())
    }

    pub fn is_server_error(self) -> bool {
        self.code() >= 500
    }

    /// Build a boundary error with this status. An empty `message` is
    /// replaced by [`reason`](Self::reason).
    #[track_caller]
    pub fn wrap<E>(self, cause: Option<E>, message: impl Into<String>) -> BoundaryError
    where
        E: Into<BoxError>,
    {
        BoundaryError::new(cause.map(Into::into), self.code(), message)
    }

    /// Build a boundary error with this status and a formatted message.
    #[track_caller]
    pub fn wrapf<E>(self, cause: Option<E>, args: fmt::Arguments<'_>) -> BoundaryError
    where
        E: Into<BoxError>,
    {
        BoundaryError::with_template(cause.map(Into::into), self.code(), args)
    }
}

/// Standard phrase for a status code, as the `http` crate knows it.
pub fn canonical_reason(code: u16) -> Option<&'static str> {
    http::StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
}

macro_rules! status_constructors {
    ($($name:ident => $status:ident,)*) => {
        paste::paste! {
            $(
                #[doc = "Build a `" $status "` boundary error around an optional cause."]
                #[doc = ""]
                #[doc = "An empty `message` is replaced by the status' standard phrase."]
                #[track_caller]
                pub fn $name<E>(cause: Option<E>, message: impl Into<String>) -> BoundaryError
                where
                    E: Into<BoxError>,
                {
                    Status::$status.wrap(cause, message)
                }

                #[doc = "Build a `" $status "` boundary error with a formatted message."]
                #[track_caller]
                pub fn [<$name f>]<E>(cause: Option<E>, args: fmt::Arguments<'_>) -> BoundaryError
                where
                    E: Into<BoxError>,
                {
                    Status::$status.wrapf(cause, args)
                }
            )*
        }
    };
}

status_constructors! {
    bad_request => BadRequest,
    unauthorized => Unauthorized,
    forbidden => Forbidden,
    not_found => NotFound,
    method_not_allowed => MethodNotAllowed,
    request_timeout => RequestTimeout,
    gone => Gone,
    request_entity_too_large => RequestEntityTooLarge,
    unsupported_media_type => UnsupportedMediaType,
    too_many_requests => TooManyRequests,
    internal_server_error => InternalServerError,
    bad_gateway => BadGateway,
    service_unavailable => ServiceUnavailable,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_codes_roundtrip() {
        for status in Status::iter() {
            assert_eq!(Status::from_code(status.code()), Some(status));
            assert!(!status.reason().is_empty());
        }
        assert_eq!(Status::from_code(418), None);
    }

    #[test]
    fn test_reason() {
        assert_eq!(Status::NotFound.reason(), "Not Found");
        assert_eq!(Status::InternalServerError.reason(), "Internal Server Error");
        assert_eq!(canonical_reason(999), None);
    }

    #[test]
    fn test_named_constructors() {
        let err = not_found(Some(Error::new("no rows")), "");
        assert_eq!(err.code(), 404);
        assert_eq!(err.message(), "Not Found");

        let err = bad_request(None::<Error>, "missing field");
        assert_eq!(err.code(), 400);
        assert_eq!(err.message(), "missing field");
        assert!(err.internal().is_none());

        let err = service_unavailablef(None::<Error>, format_args!("retry in {}s", 30));
        assert_eq!(err.code(), 503);
        assert_eq!(err.message(), "retry in 30s");
    }

    #[test]
    fn test_server_error() {
        assert!(Status::BadGateway.is_server_error());
        assert!(!Status::Gone.is_server_error());
    }
}
