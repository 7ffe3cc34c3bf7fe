//! Backtraces assembled from the origins recorded along a chain.

use std::fmt;

use crate::chain;
use crate::{BoundaryError, Error, Node, Origin};

/// One resolved origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame {
    function: &'static str,
    file: &'static str,
    line: u32,
    column: u32,
}

impl Frame {
    pub fn new(function: &'static str, file: &'static str, line: u32, column: u32) -> Self {
        Self {
            function,
            file,
            line,
            column,
        }
    }

    /// Enclosing function path, empty when unresolved.
    pub fn function(&self) -> &'static str {
        self.function
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.function.is_empty() {
            write!(f, "{} ", self.function)?;
        }
        write!(f, "[{}:{}]", self.file, self.line)
    }
}

/// Frames of a chain, outermost (most recently added) first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Backtrace {
    frames: Vec<Frame>,
}

impl Backtrace {
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }
}

impl<'a> IntoIterator for &'a Backtrace {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Backtrace {
    type Item = Frame;
    type IntoIter = std::vec::IntoIter<Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.into_iter()
    }
}

impl fmt::Display for Backtrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frame) in self.frames.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", frame)?;
        }
        Ok(())
    }
}

/// The origin recorded on `node` itself, if it is a faultline node that has one.
pub fn origin_of(node: &Node) -> Option<Origin> {
    if let Some(err) = node.downcast_ref::<Error>() {
        return err.origin();
    }
    node.downcast_ref::<BoundaryError>()
        .map(BoundaryError::origin)
}

/// Collect the origins along the chain. Nodes without one are passed over.
pub fn backtrace(node: &Node) -> Backtrace {
    let frames = chain::chain(node)
        .filter_map(origin_of)
        .map(|origin| origin.resolve())
        .collect();
    Backtrace { frames }
}
