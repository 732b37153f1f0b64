//! Error types for the data factory.

use thiserror::Error;

/// Result type alias for data factory operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for data factory operations.
///
/// Every variant is a setup bug on the caller's side or a failure reported by
/// the database interface. Nothing is retried.
#[derive(Error, Debug)]
pub enum Error {
    /// Metadata load attempted without a table name.
    #[error("Table name is not set")]
    TableNotSet,

    /// Metadata load attempted without a database interface.
    #[error("Database interface is not set")]
    DatabaseInterfaceNotSet,

    /// A column lookup, default or override referenced an unknown column.
    #[error("Column {column} is not in {table}")]
    ColumnNotInTable { column: String, table: String },

    /// Insert execution attempted before the statement was generated.
    #[error("No insert statement has been generated")]
    NoInsertStatement,

    /// The metadata query returned no columns for the table.
    #[error("Table {table} does not exist or has no columns")]
    TableNotExist { table: String },

    /// Data type with no bind type mapping.
    #[error("Unsupported data type: {data_type}")]
    UnsupportedDataType { data_type: String },

    /// Random integer requested with an upper bound below 1.
    #[error("Random integer bound must be at least 1, got {max}")]
    InvalidRandomBound { max: u32 },

    /// A metadata row could not be decoded into a column descriptor.
    #[error("Invalid metadata row: {message}")]
    MetadataRow { message: String },

    /// Failure reported by the database interface.
    #[error("Database error: {message}")]
    Database { message: String },
}

impl Error {
    /// Create a column-not-in-table error.
    pub fn column_not_in_table(column: impl Into<String>, table: impl Into<String>) -> Self {
        Self::ColumnNotInTable {
            column: column.into(),
            table: table.into(),
        }
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    /// Create a metadata row error.
    pub fn metadata_row(message: impl Into<String>) -> Self {
        Self::MetadataRow {
            message: message.into(),
        }
    }
}
