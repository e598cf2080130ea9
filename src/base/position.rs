//! Line/column positions as reported by the inspection tool.
//!
//! Positions coming from the tool are 1-based; editors want 0-based ones.
//! No validation of non-negativity is performed, callers keep the basing
//! consistent.

use std::fmt;

/// A position in source code, optionally without a column (line-only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: i64,
    pub column: Option<i64>,
}

impl Position {
    pub fn new(line: i64, column: i64) -> Self {
        Self {
            line,
            column: Some(column),
        }
    }

    /// A position that only knows its line.
    pub fn line_only(line: i64) -> Self {
        Self { line, column: None }
    }

    /// Shift a 1-based position to 0-based. A missing column stays missing.
    pub fn to_zero_based(self) -> Self {
        Self {
            line: self.line - 1,
            column: self.column.map(|c| c - 1),
        }
    }

    /// Shift a 0-based position to 1-based.
    pub fn from_zero_based(self) -> Self {
        Self {
            line: self.line + 1,
            column: self.column.map(|c| c + 1),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.column {
            Some(column) => write!(f, "{}:{}", self.line, column),
            None => write!(f, "{}", self.line),
        }
    }
}
