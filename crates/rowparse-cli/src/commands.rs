//! Command implementations.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, trace};

use rowparse_ingest::{
    IngestError, RawRow, RowReader, ValidationFailure, read_rows, read_validated, validate_reader,
};
use rowparse_model::Schema;
use rowparse_schema::{Record, RowSchema, SchemaExt, Value};

use crate::logging::redact_value;

/// Where rows come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// `-` means standard input.
    pub fn from_arg(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path.to_path_buf())
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => f.write_str("<stdin>"),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Options for the `check` command.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Column spec, e.g. `name:text,age:number`.
    pub columns: String,
    pub allow_extra: bool,
    /// Accept a first row equal to the column names.
    pub skip_header: bool,
}

/// Result of `check`.
#[derive(Debug)]
pub struct CheckReport {
    pub columns: Vec<String>,
    pub outcome: CheckOutcome,
}

#[derive(Debug)]
pub enum CheckOutcome {
    /// Every row passed. Header rows accepted by `skip_header` are dropped.
    Valid(Vec<Vec<Value>>),
    Invalid(ValidationFailure),
}

impl CheckReport {
    pub fn is_valid(&self) -> bool {
        matches!(self.outcome, CheckOutcome::Valid(_))
    }
}

/// Read raw rows from `input`.
pub fn run_rows(input: &Input) -> Result<Vec<RawRow>> {
    let span = info_span!("rows", input = %input);
    let _guard = span.enter();

    let rows = load_rows(input).with_context(|| format!("failed to read {input}"))?;
    info!(rows = rows.len(), "read rows");
    Ok(rows)
}

/// Validate every row of `input` against the column spec.
pub fn run_check(input: &Input, options: &CheckOptions) -> Result<CheckReport> {
    let span = info_span!("check", input = %input);
    let _guard = span.enter();

    let schema = RowSchema::parse_spec(&options.columns)
        .context("invalid column spec")?
        .allow_extra(options.allow_extra);
    let columns = schema.names();
    debug!(columns = ?columns, "built schema");

    let result: rowparse_ingest::Result<Vec<Vec<Value>>> = if options.skip_header {
        let schema = schema.or_header(columns.clone());
        validate_input(input, &schema)
            .map(|records| records.into_iter().filter_map(Record::data).collect())
    } else {
        validate_input(input, &schema)
    };

    let outcome = match result {
        Ok(values) => {
            info!(rows = values.len(), "all rows valid");
            CheckOutcome::Valid(values)
        }
        Err(IngestError::Validation(failure)) => {
            for error in failure.rows() {
                debug!(row = error.row, issues = %error.summary(), "row rejected");
                trace!(row = error.row, fields = %redact_value(&error.raw.join(",")), "rejected fields");
            }
            CheckOutcome::Invalid(failure)
        }
        Err(other) => {
            return Err(anyhow::Error::new(other).context(format!("failed to read {input}")));
        }
    };

    Ok(CheckReport { columns, outcome })
}

fn load_rows(input: &Input) -> rowparse_ingest::Result<Vec<RawRow>> {
    match input {
        Input::File(path) => read_rows(path),
        Input::Stdin => RowReader::new(io::stdin().lock(), "<stdin>").collect(),
    }
}

fn validate_input<S: Schema>(input: &Input, schema: &S) -> rowparse_ingest::Result<Vec<S::Output>> {
    match input {
        Input::File(path) => read_validated(path, schema),
        Input::Stdin => validate_reader(RowReader::new(io::stdin().lock(), "<stdin>"), schema),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_from_arg() {
        assert_eq!(Input::from_arg(Path::new("-")), Input::Stdin);
        assert_eq!(
            Input::from_arg(Path::new("people.csv")),
            Input::File(PathBuf::from("people.csv"))
        );
        assert_eq!(Input::Stdin.to_string(), "<stdin>");
    }
}
