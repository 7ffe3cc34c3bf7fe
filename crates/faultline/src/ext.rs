//! Wrapping the error side of a `Result`.

use crate::{BoundaryError, BoxError, Capability, Error};

/// Chain-building operations on `Result`. `Ok` values pass through untouched,
/// so these can be applied unconditionally.
pub trait ResultExt<T> {
    /// Prefix context onto the error.
    fn annotate(self, prefix: impl Into<String>) -> Result<T, Error>;

    /// Prefix lazily built context onto the error.
    fn annotate_with<S, F>(self, prefix: F) -> Result<T, Error>
    where
        S: Into<String>,
        F: FnOnce() -> S;

    /// Record the call site without changing the message.
    fn trace(self) -> Result<T, Error>;

    /// Mark the error temporary.
    fn temporary(self) -> Result<T, Error>;

    /// Mark the error as timed out.
    fn timeout(self) -> Result<T, Error>;

    /// Seal the error behind a public status and message.
    fn boundary(self, code: u16, message: impl Into<String>) -> Result<T, BoundaryError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[track_caller]
    fn annotate(self, prefix: impl Into<String>) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Error::annotated(err, prefix)),
        }
    }

    #[track_caller]
    fn annotate_with<S, F>(self, prefix: F) -> Result<T, Error>
    where
        S: Into<String>,
        F: FnOnce() -> S,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Error::annotated(err, prefix())),
        }
    }

    #[track_caller]
    fn trace(self) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Error::traced(err)),
        }
    }

    fn temporary(self) -> Result<T, Error> {
        self.map_err(|err| Error::with_capability(Capability::Temporary, Some(err.into())))
    }

    fn timeout(self) -> Result<T, Error> {
        self.map_err(|err| Error::with_capability(Capability::Timeout, Some(err.into())))
    }

    #[track_caller]
    fn boundary(self, code: u16, message: impl Into<String>) -> Result<T, BoundaryError> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(BoundaryError::new(Some(err.into()), code, message)),
        }
    }
}
