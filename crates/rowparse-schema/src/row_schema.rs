//! Positional row schemas.

use rowparse_model::{Issue, Schema};

use crate::error::SchemaError;
use crate::field::{Field, FieldKind, Value};

/// A fixed sequence of typed columns.
///
/// A row must have exactly one field per column unless `allow_extra` is
/// set, in which case trailing fields are dropped. Field checks still run
/// over the columns a short row does have, so one rejection lists every
/// problem in the row.
#[derive(Debug, Clone, Default)]
pub struct RowSchema {
    fields: Vec<Field>,
    allow_extra: bool,
}

impl RowSchema {
    pub fn new(fields: Vec<Field>) -> Self {
        Self {
            fields,
            allow_extra: false,
        }
    }

    /// Append a column.
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Accept rows with more fields than columns.
    #[must_use]
    pub fn allow_extra(mut self, allow: bool) -> Self {
        self.allow_extra = allow;
        self
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Column names, in order.
    pub fn names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name.clone()).collect()
    }

    /// Build a schema from a column spec such as `name:text,age:number?`.
    ///
    /// Each entry is `name[:kind][?]`. A missing kind means text; a trailing
    /// `?` makes the column optional.
    pub fn parse_spec(spec: &str) -> Result<Self, SchemaError> {
        if spec.trim().is_empty() {
            return Err(SchemaError::EmptySpec);
        }

        let mut fields: Vec<Field> = Vec::new();
        for entry in spec.split(',') {
            let entry = entry.trim();
            let (entry, optional) = match entry.strip_suffix('?') {
                Some(rest) => (rest.trim_end(), true),
                None => (entry, false),
            };

            let (name, kind) = match entry.split_once(':') {
                Some((name, kind)) => {
                    let kind = FieldKind::parse(kind).ok_or_else(|| SchemaError::UnknownKind {
                        column: name.trim().to_string(),
                        kind: kind.trim().to_string(),
                    })?;
                    (name.trim(), kind)
                }
                None => (entry, FieldKind::Text),
            };

            if name.is_empty() {
                return Err(SchemaError::InvalidSpec {
                    entry: entry.to_string(),
                    reason: "column name is empty",
                });
            }
            if fields.iter().any(|f| f.name == name) {
                return Err(SchemaError::DuplicateColumn {
                    column: name.to_string(),
                });
            }

            let field = Field::new(name, kind);
            fields.push(if optional { field.optional() } else { field });
        }

        Ok(Self::new(fields))
    }
}

impl Schema for RowSchema {
    type Output = Vec<Value>;

    fn validate(&self, row: &[String]) -> Result<Vec<Value>, Vec<Issue>> {
        let mut issues = Vec::new();

        let too_many = row.len() > self.fields.len() && !self.allow_extra;
        if row.len() < self.fields.len() || too_many {
            issues.push(Issue::Arity {
                expected: self.fields.len(),
                found: row.len(),
            });
        }

        let mut values = Vec::with_capacity(self.fields.len());
        for (index, (field, raw)) in self.fields.iter().zip(row).enumerate() {
            match field.check(index, raw) {
                Ok(value) => values.push(value),
                Err(issue) => issues.push(issue),
            }
        }

        if issues.is_empty() {
            Ok(values)
        } else {
            Err(issues)
        }
    }
}
