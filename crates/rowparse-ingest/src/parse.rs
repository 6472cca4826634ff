//! Whole-file parsing with optional schema validation.

use std::io::BufRead;
use std::path::Path;

use rowparse_model::{RawRow, RowError, Schema};
use serde::Serialize;

use crate::error::{Result, ValidationFailure};
use crate::reader::RowReader;

/// Output of [`parse`]: raw rows without a schema, validated values with one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Parsed<T> {
    Raw(Vec<RawRow>),
    Validated(Vec<T>),
}

impl<T> Parsed<T> {
    pub fn len(&self) -> usize {
        match self {
            Parsed::Raw(rows) => rows.len(),
            Parsed::Validated(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_raw(self) -> Option<Vec<RawRow>> {
        match self {
            Parsed::Raw(rows) => Some(rows),
            Parsed::Validated(_) => None,
        }
    }

    pub fn into_validated(self) -> Option<Vec<T>> {
        match self {
            Parsed::Raw(_) => None,
            Parsed::Validated(values) => Some(values),
        }
    }
}

/// Reads every line of `path` as a trimmed, comma-split row.
///
/// The first row is returned like any other; header handling is up to the
/// caller. Only I/O errors are possible.
pub fn read_rows(path: impl AsRef<Path>) -> Result<Vec<RawRow>> {
    collect_rows(RowReader::open(path)?)
}

/// Reads `path` and validates every row with `schema`.
///
/// All rows are validated in file order before returning. If any row is
/// rejected the call fails with [`IngestError::Validation`] listing every
/// rejected row, and no values are returned.
///
/// [`IngestError::Validation`]: crate::IngestError::Validation
pub fn read_validated<S: Schema>(path: impl AsRef<Path>, schema: &S) -> Result<Vec<S::Output>> {
    validate_reader(RowReader::open(path)?, schema)
}

/// Like [`read_validated`], for rows from any [`RowReader`].
pub fn validate_reader<R, S>(reader: RowReader<R>, schema: &S) -> Result<Vec<S::Output>>
where
    R: BufRead,
    S: Schema,
{
    let source = reader.source().to_path_buf();
    let rows = collect_rows(reader)?;
    let total_rows = rows.len();

    match validate_rows(rows, schema) {
        Ok(values) => Ok(values),
        Err(failure) => {
            tracing::warn!(
                path = %source.display(),
                failed_rows = failure.len(),
                total_rows,
                "row validation failed"
            );
            Err(failure.into())
        }
    }
}

fn collect_rows<R: BufRead>(reader: RowReader<R>) -> Result<Vec<RawRow>> {
    let source = reader.source().to_path_buf();
    let rows = reader.collect::<Result<Vec<_>>>()?;
    tracing::debug!(path = %source.display(), rows = rows.len(), "collected raw rows");
    Ok(rows)
}

/// Reads `path`, validating with `schema` when one is given.
pub fn parse<S: Schema>(path: impl AsRef<Path>, schema: Option<&S>) -> Result<Parsed<S::Output>> {
    match schema {
        Some(schema) => read_validated(path, schema).map(Parsed::Validated),
        None => read_rows(path).map(Parsed::Raw),
    }
}

/// Applies `schema` to already-split rows.
///
/// One forward pass, no short-circuit. Row numbers are 1-based positions in
/// `rows`.
pub fn validate_rows<S: Schema>(
    rows: Vec<RawRow>,
    schema: &S,
) -> std::result::Result<Vec<S::Output>, ValidationFailure> {
    let mut values = Vec::with_capacity(rows.len());
    let mut errors = Vec::new();

    for (index, row) in rows.into_iter().enumerate() {
        match schema.validate(&row) {
            Ok(value) => values.push(value),
            Err(issues) => errors.push(RowError::new(index + 1, row, issues)),
        }
    }

    if errors.is_empty() {
        Ok(values)
    } else {
        Err(ValidationFailure::new(errors))
    }
}
