//! The validation capability the parser consumes.

use crate::issue::Issue;

/// Validates one raw row and turns it into a typed value.
///
/// A rejection should carry at least one issue. The parser calls
/// `validate` exactly once per row, in file order.
pub trait Schema {
    /// Value produced for an accepted row.
    type Output;

    fn validate(&self, row: &[String]) -> Result<Self::Output, Vec<Issue>>;
}

/// Plain functions and closures are schemas.
impl<F, T> Schema for F
where
    F: Fn(&[String]) -> Result<T, Vec<Issue>>,
{
    type Output = T;

    fn validate(&self, row: &[String]) -> Result<T, Vec<Issue>> {
        self(row)
    }
}
