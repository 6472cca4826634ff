//! Error types for schema construction.

use thiserror::Error;

/// Errors raised while building a schema from a column spec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Spec has no columns.
    #[error("column spec is empty")]
    EmptySpec,

    /// Entry could not be read as `name[:kind][?]`.
    #[error("invalid column spec '{entry}': {reason}")]
    InvalidSpec { entry: String, reason: &'static str },

    /// Kind name is not recognized.
    #[error("unknown kind '{kind}' for column '{column}'")]
    UnknownKind { column: String, kind: String },

    /// Column name appears twice.
    #[error("duplicate column '{column}'")]
    DuplicateColumn { column: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SchemaError::UnknownKind {
            column: "age".to_string(),
            kind: "decimal".to_string(),
        };
        assert_eq!(err.to_string(), "unknown kind 'decimal' for column 'age'");
    }
}
