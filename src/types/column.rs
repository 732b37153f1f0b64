//! Column descriptor.
//!
//! One column of a table, decoded from a dictionary row. Descriptors are
//! immutable once the table metadata is loaded.

use std::fmt;

use crate::error::{Error, Result};

use super::bind::BindType;
use super::data_type::DataType;
use super::row::Row;
use super::value::Value;

/// Number of positional fields in a metadata row.
pub(crate) const METADATA_ROW_FIELDS: usize = 7;

/// Metadata for one table column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name, upper-cased.
    pub name: String,
    /// Column data type.
    pub data_type: DataType,
    /// Declared maximum length (characters for character types, bytes for RAW).
    pub max_length: u32,
    /// Numeric precision, `None` when not declared.
    pub precision: Option<u32>,
    /// Numeric scale, `None` when not declared.
    pub scale: Option<i32>,
    /// Declared column position (1-based).
    pub position: u32,
    /// Whether NULL values are allowed.
    pub nullable: bool,
}

impl Column {
    /// Decode a column from a metadata row.
    ///
    /// Fields are positional: name, data type, length, precision, scale,
    /// position, nullable flag (`'N'` means NOT NULL, anything else nullable).
    pub fn from_row(row: &Row) -> Result<Self> {
        if row.len() < METADATA_ROW_FIELDS {
            return Err(Error::metadata_row(format!(
                "expected {} fields, got {}",
                METADATA_ROW_FIELDS,
                row.len()
            )));
        }

        let name = text_field(row, 0, "column name")?.to_uppercase();
        let data_type = DataType::parse(text_field(row, 1, "data type")?);
        let max_length = optional_number(row, 2, &name)?.unwrap_or(0);
        let precision = optional_number(row, 3, &name)?;
        let scale = optional_number(row, 4, &name)?;
        let position = optional_number(row, 5, &name)?.unwrap_or(0);
        let nullable = !matches!(row.get(6), Some(Value::String(flag)) if flag.eq_ignore_ascii_case("N"));

        Ok(Self {
            name,
            data_type,
            max_length,
            precision,
            scale,
            position,
            nullable,
        })
    }

    /// Whether the column accepts NULL.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Host type used to bind a NULL into this column.
    pub fn bind_type(&self) -> Result<BindType> {
        match self.data_type {
            DataType::Char | DataType::Varchar | DataType::Clob | DataType::Raw => {
                Ok(BindType::String)
            }
            DataType::Date | DataType::DateTime | DataType::Timestamp => Ok(BindType::DateTime),
            DataType::Integer => Ok(BindType::Integer),
            DataType::Number if self.scale == Some(0) => Ok(BindType::Integer),
            DataType::Number => Ok(BindType::Float),
            DataType::Unsupported(ref name) => Err(Error::UnsupportedDataType {
                data_type: name.clone(),
            }),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opt = |v: Option<String>| v.unwrap_or_default();
        write!(
            f,
            "{} {} {} {} {} {}",
            self.name,
            self.data_type,
            self.max_length,
            opt(self.scale.map(|s| s.to_string())),
            opt(self.precision.map(|p| p.to_string())),
            self.position
        )
    }
}

fn text_field<'a>(row: &'a Row, index: usize, what: &str) -> Result<&'a str> {
    row.get(index)
        .and_then(Value::as_str)
        .ok_or_else(|| Error::metadata_row(format!("{} must be text", what)))
}

fn optional_number<T: TryFrom<i64>>(row: &Row, index: usize, column: &str) -> Result<Option<T>> {
    match row.get(index) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .to_i64()
            .and_then(|n| T::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| {
                Error::metadata_row(format!(
                    "field {} of column {} is not a valid number: {}",
                    index, column, value
                ))
            }),
    }
}
