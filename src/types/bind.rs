//! Bind values for parameterized statements.

use super::value::Value;

/// Host type of a bind variable, used to bind an explicit typed NULL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindType {
    String,
    DateTime,
    Integer,
    Float,
}

/// One positional bind for a parameterized statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Bind {
    /// A non-null value.
    Value(Value),
    /// NULL carrying the column's host type.
    TypedNull(BindType),
}

impl Bind {
    /// Check if this bind is a typed NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Bind::TypedNull(_))
    }

    /// Get the bound value, `None` for typed NULLs.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Bind::Value(v) => Some(v),
            Bind::TypedNull(_) => None,
        }
    }
}
