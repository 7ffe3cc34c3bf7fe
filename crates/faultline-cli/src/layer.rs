//! Textual chain descriptions.
//!
//! A chain is described innermost layer first, one layer per argument:
//!
//! - `plain:TEXT` a plain failure
//! - `foreign:TEXT` an opaque error foreign to faultline
//! - `io:KIND[:TEXT]` a `std::io::Error` (`timed-out`, `would-block`,
//!   `interrupted`, `not-found`, `other`)
//! - `annotate:TEXT`, `trace`, `temporary`, `timeout`
//! - `boundary:CODE[:MESSAGE]`

use std::io;
use std::str::FromStr;

use anyhow::{Context, bail};
use faultline::{BoundaryError, BoxError, Error};

/// One layer of a chain description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layer {
    Plain(String),
    Foreign(String),
    Io(io::ErrorKind, String),
    Annotate(String),
    Trace,
    Temporary,
    Timeout,
    Boundary(u16, String),
}

impl FromStr for Layer {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let (head, rest) = match s.split_once(':') {
            Some((head, rest)) => (head, Some(rest)),
            None => (s, None),
        };

        let layer = match (head, rest) {
            ("plain", Some(text)) => Layer::Plain(text.to_string()),
            ("foreign", Some(text)) => Layer::Foreign(text.to_string()),
            ("annotate", Some(text)) => Layer::Annotate(text.to_string()),
            ("io", Some(rest)) => {
                let (kind, text) = rest.split_once(':').unwrap_or((rest, ""));
                Layer::Io(parse_io_kind(kind)?, text.to_string())
            }
            ("boundary", Some(rest)) => {
                let (code, message) = rest.split_once(':').unwrap_or((rest, ""));
                let code = code
                    .parse::<u16>()
                    .with_context(|| format!("invalid status code '{}'", code))?;
                Layer::Boundary(code, message.to_string())
            }
            ("trace", None) => Layer::Trace,
            ("temporary", None) => Layer::Temporary,
            ("timeout", None) => Layer::Timeout,
            ("plain" | "foreign" | "annotate" | "io" | "boundary", None) => {
                bail!("layer '{}' needs an argument", head)
            }
            _ => bail!("unknown layer '{}'", s),
        };
        Ok(layer)
    }
}

fn parse_io_kind(kind: &str) -> anyhow::Result<io::ErrorKind> {
    Ok(match kind {
        "timed-out" => io::ErrorKind::TimedOut,
        "would-block" => io::ErrorKind::WouldBlock,
        "interrupted" => io::ErrorKind::Interrupted,
        "not-found" => io::ErrorKind::NotFound,
        "other" => io::ErrorKind::Other,
        _ => bail!("unknown io error kind '{}'", kind),
    })
}

impl Layer {
    /// Apply this layer on top of `inner`. Wrapping layers keep an absent
    /// failure absent, except capability markers, which stand alone.
    pub fn apply(&self, inner: Option<BoxError>) -> Option<BoxError> {
        tracing::debug!(layer = ?self, present = inner.is_some(), "applying layer");
        match self {
            Layer::Plain(text) => Some(Box::new(Error::new(text.clone()))),
            Layer::Foreign(text) => Some(text.clone().into()),
            Layer::Io(kind, text) if text.is_empty() => Some(Box::new(io::Error::from(*kind))),
            Layer::Io(kind, text) => Some(Box::new(io::Error::new(*kind, text.clone()))),
            Layer::Annotate(text) => faultline::annotate(inner, text.clone()).map(boxed),
            Layer::Trace => faultline::trace(inner).map(boxed),
            Layer::Temporary => Some(Box::new(faultline::temporary(inner))),
            Layer::Timeout => Some(Box::new(faultline::timeout(inner))),
            Layer::Boundary(code, message) => {
                Some(Box::new(BoundaryError::new(inner, *code, message.clone())))
            }
        }
    }
}

fn boxed(err: Error) -> BoxError {
    Box::new(err)
}

/// Build a chain from layers given innermost first.
pub fn build_chain(layers: &[Layer]) -> Option<BoxError> {
    layers.iter().fold(None, |inner, layer| layer.apply(inner))
}
