//! Conditional construction.

use std::fmt;

use crate::{BoxError, Status};

/// Raise `status` around `cause` only when there is a failure.
///
/// Without a status the failure passes through unchanged, and an absent
/// failure always stays absent.
#[track_caller]
pub fn when<E>(cause: Option<E>, status: Option<Status>, message: &str) -> Option<BoxError>
where
    E: Into<BoxError>,
{
    let cause: BoxError = cause?.into();
    match status {
        Some(status) => Some(status.wrap(Some(cause), message).into()),
        None => Some(cause),
    }
}

/// Like [`when`], with a formatted message.
#[track_caller]
pub fn whenf<E>(
    cause: Option<E>,
    status: Option<Status>,
    args: fmt::Arguments<'_>,
) -> Option<BoxError>
where
    E: Into<BoxError>,
{
    let cause: BoxError = cause?.into();
    match status {
        Some(status) => Some(status.wrapf(Some(cause), args).into()),
        None => Some(cause),
    }
}
