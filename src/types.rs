//! Shared identifier aliases and the scalar value domain.

use rusqlite::ToSql;
use rusqlite::types::{ToSqlOutput, Value, ValueRef};
use serde::{Deserialize, Serialize};

/// Queue document identifier.
pub type DocId = String;
/// Data-table object identifier.
pub type ObjectId = String;

/// Single attribute value as it appears in payloads and data rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Text value.
    Text(String),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
}

impl Scalar {
    /// Returns true for the empty string, the one scalar treated as absent
    /// during plan validation. Zero and `false` are legitimate values.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl ToSql for Scalar {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            Self::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
            Self::Int(i) => ToSqlOutput::Owned(Value::Integer(*i)),
            Self::Float(f) => ToSqlOutput::Owned(Value::Real(*f)),
            Self::Bool(b) => ToSqlOutput::Owned(Value::Integer(i64::from(*b))),
        })
    }
}

/// Declared prior value of a plan entry: one scalar or a set of accepted
/// scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OldValue {
    /// Any of the listed values is accepted.
    Many(Vec<Scalar>),
    /// Exactly this value is accepted.
    One(Scalar),
}

impl OldValue {
    /// Returns true when nothing can ever match: an empty set or a blank
    /// scalar.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Many(set) => set.is_empty(),
            Self::One(value) => value.is_blank(),
        }
    }

    /// Tests whether a row's current value satisfies this declared prior
    /// value: equality for a scalar, membership for a set.
    pub fn matches(&self, value: &Scalar) -> bool {
        match self {
            Self::Many(set) => set.contains(value),
            Self::One(expected) => expected == value,
        }
    }
}
