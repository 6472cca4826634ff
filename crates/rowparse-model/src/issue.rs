//! Validation issue types.
//!
//! Each variant carries only the data it needs. Every issue can report what
//! was expected and what was found, so a row error can be rendered without
//! knowing which schema produced it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single reason a schema rejected a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum Issue {
    /// Row has a different number of fields than the schema declares.
    Arity { expected: usize, found: usize },

    /// Required field is empty.
    Required { field: usize },

    /// Field value could not be coerced to the expected kind.
    TypeMismatch {
        field: usize,
        expected: String,
        found: String,
    },

    /// Field value does not match the required pattern.
    Pattern {
        field: usize,
        pattern: String,
        found: String,
    },

    /// Caller-defined rule.
    Custom {
        field: Option<usize>,
        expected: String,
        found: String,
        message: String,
    },
}

impl Issue {
    /// Convenience constructor for a field-scoped custom issue.
    pub fn custom(
        field: Option<usize>,
        expected: impl Into<String>,
        found: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Custom {
            field,
            expected: expected.into(),
            found: found.into(),
            message: message.into(),
        }
    }

    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Issue::Arity { .. } => "arity",
            Issue::Required { .. } => "required",
            Issue::TypeMismatch { .. } => "type_mismatch",
            Issue::Pattern { .. } => "pattern",
            Issue::Custom { .. } => "custom",
        }
    }

    /// Zero-based field index, when the issue concerns a single field.
    pub fn field(&self) -> Option<usize> {
        match self {
            Issue::Arity { .. } => None,
            Issue::Required { field }
            | Issue::TypeMismatch { field, .. }
            | Issue::Pattern { field, .. } => Some(*field),
            Issue::Custom { field, .. } => *field,
        }
    }

    /// What the schema expected.
    pub fn expected(&self) -> String {
        match self {
            Issue::Arity { expected, .. } => format!("{expected} field(s)"),
            Issue::Required { .. } => "non-empty value".to_string(),
            Issue::TypeMismatch { expected, .. } => expected.clone(),
            Issue::Pattern { pattern, .. } => format!("match for /{pattern}/"),
            Issue::Custom { expected, .. } => expected.clone(),
        }
    }

    /// What the row actually contained.
    pub fn found(&self) -> String {
        match self {
            Issue::Arity { found, .. } => format!("{found} field(s)"),
            Issue::Required { .. } => "empty value".to_string(),
            Issue::TypeMismatch { found, .. }
            | Issue::Pattern { found, .. }
            | Issue::Custom { found, .. } => found.clone(),
        }
    }

    /// Human-readable message.
    pub fn message(&self) -> String {
        match self {
            Issue::Arity { expected, found } => {
                format!("expected {expected} field(s), found {found}")
            }
            Issue::Required { field } => format!("field {field} is required"),
            Issue::TypeMismatch {
                field,
                expected,
                found,
            } => format!("field {field}: expected {expected}, found '{found}'"),
            Issue::Pattern {
                field,
                pattern,
                found,
            } => format!("field {field}: '{found}' does not match /{pattern}/"),
            Issue::Custom { message, .. } => message.clone(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}
