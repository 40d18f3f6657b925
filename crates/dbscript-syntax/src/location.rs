//! Source locations for declarations and diagnostics

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Position of a declaration in its original source file.
///
/// Carried on every tree node and into every diagnostic so a host can point
/// at the offending declaration. Lines and columns are one-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    file: String,
    line: u32,
    column: u32,
}

impl SourceLocation {
    /// Create a new location
    #[inline]
    #[must_use]
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }

    /// Source file path as given by the host
    #[inline]
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// One-based line number
    #[inline]
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// One-based column number
    #[inline]
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}
