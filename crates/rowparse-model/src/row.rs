//! Raw rows and per-row validation failures.

use serde::{Deserialize, Serialize};

use crate::issue::Issue;

/// Trimmed fields of one input line, in line order.
pub type RawRow = Vec<String>;

/// One row a schema rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowError {
    /// 1-based position of the row in the file.
    pub row: usize,
    /// Fields as they were read, before any transformation.
    pub raw: RawRow,
    /// Everything the schema reported for this row.
    pub issues: Vec<Issue>,
}

impl RowError {
    pub fn new(row: usize, raw: RawRow, issues: Vec<Issue>) -> Self {
        Self { row, raw, issues }
    }

    /// Issues joined into a single line for summaries.
    pub fn summary(&self) -> String {
        self.issues
            .iter()
            .map(Issue::message)
            .collect::<Vec<_>>()
            .join("; ")
    }
}
