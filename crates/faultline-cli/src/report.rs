//! What the inspection operations see in a chain.

use std::fmt;

use faultline::{BoundaryError, Error, Node, PublicError};
use serde::Serialize;

/// Inspection results for one chain.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub message: String,
    pub deepest_cause: String,
    pub kinds: Vec<&'static str>,
    pub temporary: bool,
    pub timeout: bool,
    pub public: Option<PublicError>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub backtrace: Vec<String>,
}

impl Report {
    pub fn inspect(node: &Node, with_backtrace: bool) -> Self {
        let backtrace = if with_backtrace {
            faultline::backtrace(node)
                .iter()
                .map(ToString::to_string)
                .collect()
        } else {
            Vec::new()
        };

        Self {
            message: node.to_string(),
            deepest_cause: faultline::deepest_cause(node).to_string(),
            kinds: faultline::chain(node).map(kind_name).collect(),
            temporary: faultline::is_temporary(node),
            timeout: faultline::is_timeout(node),
            public: faultline::deepest_boundary_error(node).map(BoundaryError::public),
            backtrace,
        }
    }
}

fn kind_name(node: &Node) -> &'static str {
    if let Some(err) = node.downcast_ref::<Error>() {
        return err.kind().as_str();
    }
    if node.is::<BoundaryError>() {
        return "Boundary";
    }
    "Foreign"
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "message:       {}", self.message)?;
        writeln!(f, "deepest cause: {}", self.deepest_cause)?;
        writeln!(f, "chain:         {}", self.kinds.join(" -> "))?;
        writeln!(f, "temporary:     {}", self.temporary)?;
        writeln!(f, "timeout:       {}", self.timeout)?;
        match &self.public {
            Some(public) => writeln!(f, "public:        {} {}", public.code, public.error)?,
            None => writeln!(f, "public:        none")?,
        }
        if !self.backtrace.is_empty() {
            writeln!(f, "backtrace:")?;
            for frame in &self.backtrace {
                writeln!(f, "    {}", frame)?;
            }
        }
        Ok(())
    }
}
