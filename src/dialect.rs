//! SQL dialect strategy.
//!
//! Everything that depends on the target database's SQL flavour lives
//! behind the `Dialect` trait: the dictionary query used to load column
//! metadata, the bind placeholder syntax, and literal rendering for
//! `Record::where_clause_for`. `OracleDialect` is the default.

use std::fmt;

use crate::types::{Column, Value};

/// Per-database SQL conventions.
pub trait Dialect: fmt::Debug + Send + Sync {
    /// Query returning the columns of one table, ordered by position.
    ///
    /// The query takes the upper-cased table name as its only bind and must
    /// return seven fields per row: column name, data type, length,
    /// precision, scale, position, nullable flag (`'N'` for NOT NULL).
    fn metadata_query(&self) -> &str;

    /// Bind placeholder for a column in an insert statement.
    fn bind_placeholder(&self, column: &str) -> String;

    /// Render a non-null value as a SQL literal for the given column.
    fn quote_literal(&self, column: &Column, value: &Value) -> String;
}

/// Dictionary query against `user_tab_columns`.
///
/// `char_length` is 0 for non-character types such as RAW and CLOB, so the
/// byte length is used there.
const ORACLE_METADATA_QUERY: &str = "select column_name, \
            data_type, \
            decode(char_length, 0, data_length, char_length), \
            data_precision, \
            data_scale, \
            column_id, \
            nullable \
     from user_tab_columns \
     where table_name = :table_name \
     order by column_id asc";

/// Oracle SQL conventions.
#[derive(Debug, Default, Clone, Copy)]
pub struct OracleDialect;

impl OracleDialect {
    /// strftime format matching `DATE_MASK`.
    const DATE_FORMAT: &'static str = "%Y%m%d %H:%M:%S";
    const DATE_MASK: &'static str = "YYYYMMDD HH24:MI:SS";
}

impl Dialect for OracleDialect {
    fn metadata_query(&self) -> &str {
        ORACLE_METADATA_QUERY
    }

    fn bind_placeholder(&self, column: &str) -> String {
        format!(":{}", column)
    }

    fn quote_literal(&self, column: &Column, value: &Value) -> String {
        if column.data_type.is_temporal() {
            if let Value::Timestamp(ts) = value {
                return format!(
                    "to_date('{}', '{}')",
                    ts.format(Self::DATE_FORMAT),
                    Self::DATE_MASK
                );
            }
            return quote_string(&value.to_string());
        }
        if column.data_type.is_character() {
            return quote_string(&value.to_string());
        }
        value.to_string()
    }
}

fn quote_string(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DataType;
    use chrono::NaiveDate;

    fn column(data_type: DataType) -> Column {
        Column {
            name: "C".to_string(),
            data_type,
            max_length: 20,
            precision: None,
            scale: None,
            position: 1,
            nullable: false,
        }
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(OracleDialect.bind_placeholder("COL1"), ":COL1");
    }

    #[test]
    fn test_metadata_query_shape() {
        let sql = OracleDialect.metadata_query();
        assert!(sql.contains("from user_tab_columns"));
        assert!(sql.contains("decode(char_length, 0, data_length, char_length)"));
        assert!(sql.ends_with("order by column_id asc"));
    }

    #[test]
    fn test_quote_character() {
        let col = column(DataType::Varchar);
        assert_eq!(
            OracleDialect.quote_literal(&col, &Value::from("abc")),
            "'abc'"
        );
        assert_eq!(
            OracleDialect.quote_literal(&col, &Value::from("O'Brien")),
            "'O''Brien'"
        );
    }

    #[test]
    fn test_quote_date() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 1)
            .unwrap();
        assert_eq!(
            OracleDialect.quote_literal(&column(DataType::Date), &Value::Timestamp(ts)),
            "to_date('20240309 07:05:01', 'YYYYMMDD HH24:MI:SS')"
        );
    }

    #[test]
    fn test_quote_number_unquoted() {
        assert_eq!(
            OracleDialect.quote_literal(&column(DataType::Number), &Value::Float(22.23)),
            "22.23"
        );
        assert_eq!(
            OracleDialect.quote_literal(&column(DataType::Integer), &Value::Integer(7)),
            "7"
        );
    }
}
