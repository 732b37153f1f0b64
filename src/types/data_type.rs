//! Column data type enum.
//!
//! Closed set of the data types the generator knows how to populate. Type
//! names not in the set are kept as `Unsupported` so that metadata loading
//! never fails on an exotic column; generation yields NULL for them and
//! bind-type mapping rejects them.

use std::fmt;

/// Column data type as reported by the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    /// CHAR(size) - fixed-length string.
    Char,
    /// VARCHAR2(size) - variable-length string.
    Varchar,
    /// CLOB - Character Large Object.
    Clob,
    /// RAW(size) - binary data, generated as hex text.
    Raw,
    /// DATE - date/time (no timezone).
    Date,
    /// DATETIME.
    DateTime,
    /// TIMESTAMP, with or without fractional precision.
    Timestamp,
    /// NUMBER(precision, scale).
    Number,
    /// INTEGER.
    Integer,
    /// Any other type name, upper-cased.
    Unsupported(String),
}

impl DataType {
    /// Parse a dictionary type name (case-insensitive).
    pub fn parse(name: &str) -> Self {
        let upper = name.trim().to_uppercase();
        match upper.as_str() {
            "CHAR" => DataType::Char,
            "VARCHAR2" | "VARCHAR" => DataType::Varchar,
            "CLOB" => DataType::Clob,
            "RAW" => DataType::Raw,
            "DATE" => DataType::Date,
            "DATETIME" => DataType::DateTime,
            "NUMBER" => DataType::Number,
            "INTEGER" => DataType::Integer,
            // user_tab_columns reports e.g. TIMESTAMP(6)
            s if s == "TIMESTAMP" || (s.starts_with("TIMESTAMP(") && s.ends_with(')')) => {
                DataType::Timestamp
            }
            _ => DataType::Unsupported(upper),
        }
    }

    /// String-family types, quoted as text literals.
    pub fn is_character(&self) -> bool {
        matches!(
            self,
            DataType::Char | DataType::Varchar | DataType::Clob | DataType::Raw
        )
    }

    /// Date/time family types.
    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            DataType::Date | DataType::DateTime | DataType::Timestamp
        )
    }

    /// Canonical type name.
    pub fn name(&self) -> &str {
        match self {
            DataType::Char => "CHAR",
            DataType::Varchar => "VARCHAR2",
            DataType::Clob => "CLOB",
            DataType::Raw => "RAW",
            DataType::Date => "DATE",
            DataType::DateTime => "DATETIME",
            DataType::Timestamp => "TIMESTAMP",
            DataType::Number => "NUMBER",
            DataType::Integer => "INTEGER",
            DataType::Unsupported(name) => name,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(DataType::parse("varchar2"), DataType::Varchar);
        assert_eq!(DataType::parse("Number"), DataType::Number);
        assert_eq!(DataType::parse("DATE"), DataType::Date);
    }

    #[test]
    fn test_parse_timestamp_with_precision() {
        assert_eq!(DataType::parse("TIMESTAMP(6)"), DataType::Timestamp);
        assert_eq!(DataType::parse("timestamp"), DataType::Timestamp);
        assert_eq!(
            DataType::parse("TIMESTAMP(6) WITH TIME ZONE"),
            DataType::Unsupported("TIMESTAMP(6) WITH TIME ZONE".to_string())
        );
    }

    #[test]
    fn test_parse_unsupported() {
        assert_eq!(
            DataType::parse("xmltype"),
            DataType::Unsupported("XMLTYPE".to_string())
        );
        assert_eq!(DataType::parse("xmltype").to_string(), "XMLTYPE");
    }

    #[test]
    fn test_families() {
        assert!(DataType::Raw.is_character());
        assert!(!DataType::Number.is_character());
        assert!(DataType::Timestamp.is_temporal());
        assert!(!DataType::Clob.is_temporal());
    }
}
