//! Call-site capture for chain nodes.

use std::fmt;
use std::panic::Location;

use crate::backtrace::Frame;

/// The call site a chain node was constructed at.
///
/// Captured through `#[track_caller]`, so every constructor that forwards the
/// attribute reports the location of *its* caller rather than its own body.
/// The function name is only known when the node was built through one of the
/// crate macros; otherwise it resolves to an empty string.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Origin {
    location: &'static Location<'static>,
    function: &'static str,
}

impl Origin {
    /// Capture the location of the caller.
    #[track_caller]
    #[inline]
    pub fn capture() -> Self {
        Self {
            location: Location::caller(),
            function: "",
        }
    }

    /// Capture the location of the caller, tagged with the enclosing function path.
    #[track_caller]
    #[inline]
    pub fn capture_in(function: &'static str) -> Self {
        Self {
            location: Location::caller(),
            function,
        }
    }

    /// Enclosing function path, empty when it could not be resolved.
    pub fn function(&self) -> &'static str {
        self.function
    }

    pub fn file(&self) -> &'static str {
        self.location.file()
    }

    pub fn line(&self) -> u32 {
        self.location.line()
    }

    pub fn column(&self) -> u32 {
        self.location.column()
    }

    /// Resolve into a printable backtrace frame.
    pub fn resolve(&self) -> Frame {
        Frame::new(self.function, self.file(), self.line(), self.column())
    }
}

impl fmt::Debug for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.function.is_empty() {
            write!(f, "{}:{}", self.file(), self.line())
        } else {
            write!(f, "{} ({}:{})", self.function, self.file(), self.line())
        }
    }
}

/// Strip the `::{{closure}}` segments `type_name` adds inside closures.
#[doc(hidden)]
pub fn trim_closures(mut name: &'static str) -> &'static str {
    while let Some(stripped) = name.strip_suffix("::{{closure}}") {
        name = stripped;
    }
    name
}
