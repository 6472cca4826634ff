//! Error types for row ingestion.

use std::path::PathBuf;

use rowparse_model::RowError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while parsing a file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// File does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// File could not be opened or a read failed mid-stream.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Validation Errors ===
    /// One or more rows were rejected by the schema.
    #[error(transparent)]
    Validation(#[from] ValidationFailure),
}

impl IngestError {
    /// Classify an I/O error raised for `path`.
    pub(crate) fn io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }

    /// Row errors, when this is a validation failure.
    pub fn validation(&self) -> Option<&ValidationFailure> {
        match self {
            Self::Validation(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Every row error from a single parse call, in file order.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("CSV validation failed for {} row(s).", .rows.len())]
pub struct ValidationFailure {
    rows: Vec<RowError>,
}

impl ValidationFailure {
    pub fn new(rows: Vec<RowError>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[RowError] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<RowError> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 1-based numbers of the rejected rows.
    pub fn row_numbers(&self) -> Vec<usize> {
        self.rows.iter().map(|error| error.row).collect()
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
