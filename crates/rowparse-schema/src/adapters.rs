//! Schema combinators: transforms and header exemption.

use serde::Serialize;

use rowparse_model::{Issue, RawRow, Schema};

/// Adapters available on every [`Schema`].
pub trait SchemaExt: Schema + Sized {
    /// Transform every accepted value.
    fn map<F, U>(self, f: F) -> Mapped<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Mapped { inner: self, f }
    }

    /// Transform every accepted value with a step that may itself reject.
    fn and_then<F, U>(self, f: F) -> AndThen<Self, F>
    where
        F: Fn(Self::Output) -> Result<U, Vec<Issue>>,
    {
        AndThen { inner: self, f }
    }

    /// Accept a row equal to `names` as a header instead of validating it.
    ///
    /// Names are compared case-insensitively after trimming.
    fn or_header<I, N>(self, names: I) -> OrHeader<Self>
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        OrHeader {
            inner: self,
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Schema> SchemaExt for S {}

/// See [`SchemaExt::map`].
#[derive(Debug, Clone)]
pub struct Mapped<S, F> {
    inner: S,
    f: F,
}

impl<S, F, U> Schema for Mapped<S, F>
where
    S: Schema,
    F: Fn(S::Output) -> U,
{
    type Output = U;

    fn validate(&self, row: &[String]) -> Result<U, Vec<Issue>> {
        self.inner.validate(row).map(&self.f)
    }
}

/// See [`SchemaExt::and_then`].
#[derive(Debug, Clone)]
pub struct AndThen<S, F> {
    inner: S,
    f: F,
}

impl<S, F, U> Schema for AndThen<S, F>
where
    S: Schema,
    F: Fn(S::Output) -> Result<U, Vec<Issue>>,
{
    type Output = U;

    fn validate(&self, row: &[String]) -> Result<U, Vec<Issue>> {
        self.inner.validate(row).and_then(&self.f)
    }
}

/// A validated row, or a row accepted as a header.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record<T> {
    Header(RawRow),
    Data(T),
}

impl<T> Record<T> {
    pub fn data(self) -> Option<T> {
        match self {
            Record::Header(_) => None,
            Record::Data(value) => Some(value),
        }
    }

    pub fn is_header(&self) -> bool {
        matches!(self, Record::Header(_))
    }
}

/// See [`SchemaExt::or_header`].
#[derive(Debug, Clone)]
pub struct OrHeader<S> {
    inner: S,
    names: Vec<String>,
}

impl<S> OrHeader<S> {
    fn is_header(&self, row: &[String]) -> bool {
        row.len() == self.names.len()
            && row
                .iter()
                .zip(&self.names)
                .all(|(value, name)| value.trim().eq_ignore_ascii_case(name.trim()))
    }
}

impl<S: Schema> Schema for OrHeader<S> {
    type Output = Record<S::Output>;

    fn validate(&self, row: &[String]) -> Result<Self::Output, Vec<Issue>> {
        if self.is_header(row) {
            return Ok(Record::Header(row.to_vec()));
        }
        self.inner.validate(row).map(Record::Data)
    }
}
