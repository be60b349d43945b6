//! Configuration errors raised while validating breakpoints, queries, and responsive values.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
/// Fatal configuration errors surfaced synchronously when a layout is rendered.
pub enum ConfigurationError {
    /// A query or responsive value referenced a breakpoint missing from the table.
    #[error("unknown breakpoint `{name}`")]
    UnknownBreakpoint {
        /// Breakpoint name that failed to resolve.
        name: String,
    },
    /// `for` was combined with `from` and/or `to`.
    #[error("`for` cannot be combined with `from` or `to` in a responsive query")]
    ConflictingQuery,
    /// `from` is ordered after `to` in the breakpoint table.
    #[error("responsive range `{from}`..`{to}` is inverted")]
    InvertedRange {
        /// Lower breakpoint name.
        from: String,
        /// Upper breakpoint name.
        to: String,
    },
    /// Two breakpoints share the same name.
    #[error("duplicate breakpoint `{name}`")]
    DuplicateBreakpoint {
        /// Duplicated breakpoint name.
        name: String,
    },
    /// The breakpoint table has no entries.
    #[error("breakpoint table is empty")]
    EmptyBreakpointTable,
    /// A breakpoint declares `max_width` below its `min_width`.
    #[error("breakpoint `{name}` has max width {max_width} below min width {min_width}")]
    InvalidRange {
        /// Offending breakpoint name.
        name: String,
        /// Declared minimum width.
        min_width: f64,
        /// Declared maximum width.
        max_width: f64,
    },
    /// The configured default breakpoint is not part of the table.
    #[error("default breakpoint `{name}` is not defined")]
    UnknownDefaultBreakpoint {
        /// Configured default breakpoint name.
        name: String,
    },
    /// Layout options could not be deserialized.
    #[error("failed to parse layout options: {0}")]
    Parse(String),
}

impl ConfigurationError {
    pub(crate) fn unknown_breakpoint(name: &str) -> Self {
        Self::UnknownBreakpoint {
            name: name.to_string(),
        }
    }
}
