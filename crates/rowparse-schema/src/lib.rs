//! Ready-made schemas for rowparse.
//!
//! A [`RowSchema`] is a positional list of typed [`Field`]s. It validates a
//! raw row into `Vec<Value>`, and [`SchemaExt`] adapters turn that into a
//! caller type or exempt a header row.
//!
//! # Example
//!
//! ```ignore
//! use rowparse_schema::{Field, RowSchema, SchemaExt};
//!
//! let people = RowSchema::new(vec![Field::text("name"), Field::number("age")])
//!     .map(|values| (values[0].to_string(), values[1].as_f64()))
//!     .or_header(["name", "age"]);
//! ```

mod adapters;
mod error;
mod field;
mod row_schema;

pub use adapters::{AndThen, Mapped, OrHeader, Record, SchemaExt};
pub use error::SchemaError;
pub use field::{Field, FieldKind, Value, parse_number};
pub use row_schema::RowSchema;

pub use rowparse_model::{Issue, Schema};
