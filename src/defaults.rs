//! Column default registry.
//!
//! A default is either a static value or a zero-argument generator invoked
//! each time the default is resolved. Entries may be registered before the
//! table metadata is known; they are checked against the metadata once it
//! is loaded.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::Result;
use crate::types::{TableMetadata, Value};

/// Zero-argument value generator.
pub type DefaultFn = Arc<dyn Fn() -> Value + Send + Sync>;

/// Default value for a column.
#[derive(Clone)]
pub enum ColumnDefault {
    /// Fixed value.
    Static(Value),
    /// Value computed on each resolution.
    Computed(DefaultFn),
}

impl ColumnDefault {
    /// Create a static default.
    pub fn value(value: impl Into<Value>) -> Self {
        ColumnDefault::Static(value.into())
    }

    /// Create a computed default from a closure.
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        ColumnDefault::Computed(Arc::new(f))
    }

    /// Produce the default value, invoking the generator if computed.
    pub fn resolve(&self) -> Value {
        match self {
            ColumnDefault::Static(value) => value.clone(),
            ColumnDefault::Computed(f) => f(),
        }
    }

    /// Check if this default is computed.
    pub fn is_computed(&self) -> bool {
        matches!(self, ColumnDefault::Computed(_))
    }
}

impl fmt::Debug for ColumnDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnDefault::Static(value) => f.debug_tuple("Static").field(value).finish(),
            ColumnDefault::Computed(_) => f.write_str("Computed(<fn>)"),
        }
    }
}

impl From<Value> for ColumnDefault {
    fn from(value: Value) -> Self {
        ColumnDefault::Static(value)
    }
}

/// Column defaults keyed by upper-cased column name.
#[derive(Debug, Clone, Default)]
pub struct DefaultRegistry {
    defaults: BTreeMap<String, ColumnDefault>,
}

impl DefaultRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a default, replacing any previous one for the column.
    pub fn set(&mut self, column: &str, default: impl Into<ColumnDefault>) {
        self.defaults.insert(column.to_uppercase(), default.into());
    }

    /// Get the registered default for a column (case-insensitive).
    pub fn get(&self, column: &str) -> Option<&ColumnDefault> {
        self.defaults.get(&column.to_uppercase())
    }

    /// Resolve the default for a column.
    ///
    /// `None` means no default is registered, which is distinct from a
    /// default of `Value::Null`.
    pub fn resolve(&self, column: &str) -> Option<Value> {
        self.get(column).map(ColumnDefault::resolve)
    }

    /// Iterate over registered defaults in column-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnDefault)> {
        self.defaults.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get the number of registered defaults.
    pub fn len(&self) -> usize {
        self.defaults.len()
    }

    /// Check if no defaults are registered.
    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty()
    }

    /// Check every registered default names a column of the table.
    ///
    /// Fails with `ColumnNotInTable` on the first unknown column.
    pub fn validate(&self, metadata: &TableMetadata) -> Result<()> {
        for column in self.defaults.keys() {
            metadata.column(column)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::{Column, DataType};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_static_default_case_insensitive() {
        let mut registry = DefaultRegistry::new();
        registry.set("col1", ColumnDefault::value("value1"));
        assert_eq!(registry.resolve("COL1"), Some(Value::from("value1")));
        assert_eq!(registry.resolve("Col1"), Some(Value::from("value1")));
    }

    #[test]
    fn test_missing_default_is_distinct_from_null() {
        let mut registry = DefaultRegistry::new();
        registry.set("COL1", Value::Null);
        assert_eq!(registry.resolve("COL1"), Some(Value::Null));
        assert_eq!(registry.resolve("COL2"), None);
    }

    #[test]
    fn test_computed_default_invoked_per_resolve() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let mut registry = DefaultRegistry::new();
        registry.set(
            "COL1",
            ColumnDefault::computed(move || {
                Value::from(counter.fetch_add(1, Ordering::SeqCst) as i64)
            }),
        );

        assert_eq!(registry.resolve("COL1"), Some(Value::Integer(0)));
        assert_eq!(registry.resolve("COL1"), Some(Value::Integer(1)));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(registry.get("COL1").unwrap().is_computed());
    }

    #[test]
    fn test_validate_unknown_column() {
        let metadata = TableMetadata::new(
            "FOOBAR",
            vec![Column {
                name: "COL1".to_string(),
                data_type: DataType::Varchar,
                max_length: 20,
                precision: None,
                scale: None,
                position: 1,
                nullable: true,
            }],
        );

        let mut registry = DefaultRegistry::new();
        registry.set("col1", ColumnDefault::value("ok"));
        assert!(registry.validate(&metadata).is_ok());

        registry.set("not_exists", ColumnDefault::value("value1"));
        match registry.validate(&metadata) {
            Err(Error::ColumnNotInTable { column, table }) => {
                assert_eq!(column, "NOT_EXISTS");
                assert_eq!(table, "FOOBAR");
            }
            other => panic!("Expected ColumnNotInTable, got {:?}", other),
        }
    }
}
