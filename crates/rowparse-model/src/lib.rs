//! Shared vocabulary for rowparse: raw rows, validation issues, row errors,
//! and the [`Schema`] capability.

pub mod issue;
pub mod row;
pub mod schema;

pub use issue::Issue;
pub use row::{RawRow, RowError};
pub use schema::Schema;
