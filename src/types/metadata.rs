//! Table metadata: the column descriptors of one table.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

use super::column::Column;

/// Column descriptors of a table, keyed by upper-cased column name.
///
/// Iteration is in ascending column-name order, which is also the column
/// order of generated insert statements.
#[derive(Debug, Clone)]
pub struct TableMetadata {
    table_name: String,
    columns: BTreeMap<String, Column>,
}

impl TableMetadata {
    /// Create metadata from decoded columns.
    pub fn new(table_name: impl Into<String>, columns: impl IntoIterator<Item = Column>) -> Self {
        Self {
            table_name: table_name.into(),
            columns: columns
                .into_iter()
                .map(|c| (c.name.clone(), c))
                .collect(),
        }
    }

    /// Table the metadata was loaded for.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Find a column by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Column> {
        self.columns.get(&name.to_uppercase())
    }

    /// Find a column by name, failing with `ColumnNotInTable`.
    pub fn column(&self, name: &str) -> Result<&Column> {
        let upper = name.to_uppercase();
        self.columns
            .get(&upper)
            .ok_or_else(|| Error::column_not_in_table(upper, self.table_name.as_str()))
    }

    /// Check if the table has a column (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate over columns in ascending name order.
    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.values()
    }

    /// Column names in ascending name order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(String::as_str).collect()
    }

    /// Columns in declared table position order.
    pub fn columns_by_position(&self) -> Vec<&Column> {
        let mut columns: Vec<&Column> = self.columns.values().collect();
        columns.sort_by_key(|c| c.position);
        columns
    }
}
