//! Row parsing and validation for comma-separated text files.
//!
//! This crate reads a file line by line, splits each line on commas into
//! trimmed fields, and optionally validates every row with a caller-supplied
//! [`Schema`].
//!
//! # Features
//!
//! - **Raw rows**: [`read_rows`] returns every line as a `Vec<String>`
//! - **Validated rows**: [`read_validated`] applies a schema to every row and
//!   either returns all values or fails with every rejected row
//! - **Streaming**: [`RowReader`] yields rows one at a time from any reader
//!
//! Line endings (`\n`, `\r\n` or a lone `\r`) do not affect the result. Quoted fields are
//! not supported; a comma always splits.
//!
//! # Example
//!
//! ```ignore
//! use rowparse_ingest::{IngestError, read_rows, read_validated};
//!
//! let rows = read_rows("data/people.csv")?;
//!
//! match read_validated("data/people.csv", &person_schema) {
//!     Ok(people) => println!("{} people", people.len()),
//!     Err(IngestError::Validation(failure)) => {
//!         for error in failure.rows() {
//!             eprintln!("row {}: {}", error.row, error.summary());
//!         }
//!     }
//!     Err(other) => return Err(other.into()),
//! }
//! ```

mod error;
mod parse;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result, ValidationFailure};

// === Parsing ===
pub use parse::{Parsed, parse, read_rows, read_validated, validate_reader, validate_rows};

// === Streaming ===
pub use reader::{DELIMITER, RowReader, split_line};

// === Shared Types ===
pub use rowparse_model::{Issue, RawRow, RowError, Schema};
