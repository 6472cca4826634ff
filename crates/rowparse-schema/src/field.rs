//! Column definitions and value coercion.

use std::fmt;

use regex::Regex;
use serde::Serialize;

use rowparse_model::Issue;

/// Target type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Any string, kept as-is.
    Text,
    /// 64-bit float. NaN is rejected.
    Number,
    /// 64-bit signed integer.
    Integer,
    /// `true/false`, `yes/no`, `1/0`, case-insensitive.
    Boolean,
}

impl FieldKind {
    /// Parse a kind name as written in a column spec.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "string" | "str" => Some(Self::Text),
            "number" | "num" | "float" => Some(Self::Number),
            "integer" | "int" => Some(Self::Integer),
            "boolean" | "bool" => Some(Self::Boolean),
            _ => None,
        }
    }

    /// Name used in issues and specs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
        }
    }

    /// Coerce a non-empty, trimmed value.
    pub fn coerce(&self, value: &str) -> Option<Value> {
        match self {
            Self::Text => Some(Value::Text(value.to_string())),
            Self::Number => parse_number(value).map(Value::Number),
            Self::Integer => value.parse().ok().map(Value::Integer),
            Self::Boolean => parse_boolean(value).map(Value::Boolean),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a string to f64.
///
/// Accepts standard and scientific notation plus `inf`/`infinity`.
/// NaN never counts as a number.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
}

fn parse_boolean(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// A coerced field value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Text(String),
    Number(f64),
    Integer(i64),
    Boolean(bool),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Text(s) => f.write_str(s),
            Value::Number(n) => write!(f, "{n}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Boolean(b) => write!(f, "{b}"),
        }
    }
}

/// One column of a [`RowSchema`](crate::RowSchema).
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    /// Empty values are rejected when set, otherwise they become [`Value::Null`].
    pub required: bool,
    pub pattern: Option<Regex>,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: true,
            pattern: None,
        }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Number)
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Integer)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    /// Allow empty values.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Require non-empty values to match `pattern` before coercion.
    #[must_use]
    pub fn matching(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Check one trimmed value at position `index`.
    pub fn check(&self, index: usize, value: &str) -> Result<Value, Issue> {
        if value.is_empty() {
            return if self.required {
                Err(Issue::Required { field: index })
            } else {
                Ok(Value::Null)
            };
        }

        if let Some(pattern) = &self.pattern
            && !pattern.is_match(value)
        {
            return Err(Issue::Pattern {
                field: index,
                pattern: pattern.as_str().to_string(),
                found: value.to_string(),
            });
        }

        self.kind.coerce(value).ok_or_else(|| Issue::TypeMismatch {
            field: index,
            expected: self.kind.name().to_string(),
            found: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("23"), Some(23.0));
        assert_eq!(parse_number(" -0.5 "), Some(-0.5));
        assert_eq!(parse_number("1.5e3"), Some(1500.0));
        assert_eq!(parse_number("inf"), Some(f64::INFINITY));
        assert_eq!(parse_number("thirty"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_kind_parse_aliases() {
        assert_eq!(FieldKind::parse("Number"), Some(FieldKind::Number));
        assert_eq!(FieldKind::parse("int"), Some(FieldKind::Integer));
        assert_eq!(FieldKind::parse("string"), Some(FieldKind::Text));
        assert_eq!(FieldKind::parse("date"), None);
    }

    #[test]
    fn test_boolean_coercion() {
        assert_eq!(FieldKind::Boolean.coerce("YES"), Some(Value::Boolean(true)));
        assert_eq!(FieldKind::Boolean.coerce("0"), Some(Value::Boolean(false)));
        assert_eq!(FieldKind::Boolean.coerce("maybe"), None);
        assert_eq!(FieldKind::Boolean.coerce("y"), None);
        assert_eq!(FieldKind::Boolean.coerce("N"), None);
    }

    #[test]
    fn test_integer_rejects_fraction() {
        assert_eq!(FieldKind::Integer.coerce("42"), Some(Value::Integer(42)));
        assert_eq!(FieldKind::Integer.coerce("4.2"), None);
    }

    #[test]
    fn test_required_and_optional() {
        assert_eq!(
            Field::number("age").check(1, ""),
            Err(Issue::Required { field: 1 })
        );
        assert_eq!(Field::number("age").optional().check(1, ""), Ok(Value::Null));
    }

    #[test]
    fn test_type_mismatch_reports_expected_kind() {
        let issue = Field::number("age").check(1, "thirty").unwrap_err();
        assert_eq!(
            issue,
            Issue::TypeMismatch {
                field: 1,
                expected: "number".to_string(),
                found: "thirty".to_string(),
            }
        );
    }

    #[test]
    fn test_pattern_checked_before_coercion() {
        let field = Field::text("name").matching(Regex::new("^[A-Za-z]+$").unwrap());
        assert_eq!(field.check(0, "Alice"), Ok(Value::Text("Alice".to_string())));
        assert!(matches!(
            field.check(0, "Mary Ann"),
            Err(Issue::Pattern { field: 0, .. })
        ));
    }

    #[test]
    fn test_value_display_and_json() {
        assert_eq!(Value::Number(23.0).to_string(), "23");
        assert_eq!(Value::Null.to_string(), "");
        let json = serde_json::to_string(&vec![
            Value::Text("Alice".to_string()),
            Value::Number(23.0),
            Value::Null,
        ])
        .unwrap();
        assert_eq!(json, r#"["Alice",23.0,null]"#);
    }
}
