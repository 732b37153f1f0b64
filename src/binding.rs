//! Table bindings and metadata loading.
//!
//! A `TableBinding` is the shared configuration unit records are built from:
//! table name, database interface, column defaults, nullable-column policy,
//! SQL dialect and generation settings. It is immutable once built; the only
//! state that changes afterwards is the lazily loaded table metadata, which
//! is initialized exactly once.

use std::sync::Arc;

use futures::TryStreamExt;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::cursor::{Statement, StatementStreamExt};
use crate::defaults::{ColumnDefault, DefaultRegistry};
use crate::dialect::{Dialect, OracleDialect};
use crate::error::{Error, Result};
use crate::interface::DbInterface;
use crate::record::Record;
use crate::types::{Bind, Column, Row, TableMetadata, Value};

/// Root of a family of table bindings sharing one database interface.
///
/// # Example
///
/// ```ignore
/// let factory = DataFactory::new(interface);
///
/// let employees = factory
///     .table("employee")
///     .column_default("first_name", "john")
///     .build();
///
/// let record = employees.create_and_commit([("id", 1001)]).await?;
/// ```
pub struct DataFactory<D> {
    db: Arc<D>,
}

impl<D: DbInterface> DataFactory<D> {
    /// Create a root owning the database interface.
    pub fn new(db: D) -> Self {
        Self { db: Arc::new(db) }
    }

    /// Create a root from an already shared database interface.
    pub fn from_shared(db: Arc<D>) -> Self {
        Self { db }
    }

    /// Get the shared database interface.
    pub fn database(&self) -> &Arc<D> {
        &self.db
    }

    /// Start a binding for a table, using this root's database interface.
    pub fn table(&self, name: &str) -> TableBindingBuilder<D> {
        TableBinding::builder()
            .table_name(name)
            .database(self.db.clone())
    }
}

impl<D> Clone for DataFactory<D> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}

/// Builder for `TableBinding`.
pub struct TableBindingBuilder<D> {
    table_name: Option<String>,
    db: Option<Arc<D>>,
    defaults: DefaultRegistry,
    populate_nullable_columns: bool,
    dialect: Arc<dyn Dialect>,
    config: GeneratorConfig,
}

impl<D: DbInterface> TableBindingBuilder<D> {
    fn new() -> Self {
        Self {
            table_name: None,
            db: None,
            defaults: DefaultRegistry::new(),
            populate_nullable_columns: false,
            dialect: Arc::new(OracleDialect),
            config: GeneratorConfig::default(),
        }
    }

    /// Set the table name. Stored upper-cased.
    pub fn table_name(mut self, name: &str) -> Self {
        self.table_name = Some(name.to_uppercase());
        self
    }

    /// Set the database interface.
    pub fn database(mut self, db: Arc<D>) -> Self {
        self.db = Some(db);
        self
    }

    /// Register a static default for a column.
    pub fn column_default(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.defaults.set(column, ColumnDefault::value(value));
        self
    }

    /// Register a computed default, invoked once per generated record.
    pub fn column_default_fn<F>(mut self, column: &str, f: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        self.defaults.set(column, ColumnDefault::computed(f));
        self
    }

    /// Generate values for nullable columns instead of leaving them NULL.
    pub fn populate_nullable_columns(mut self, populate: bool) -> Self {
        self.populate_nullable_columns = populate;
        self
    }

    /// Set the SQL dialect.
    pub fn dialect(mut self, dialect: impl Dialect + 'static) -> Self {
        self.dialect = Arc::new(dialect);
        self
    }

    /// Set the value generation settings.
    pub fn generator_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Finish the binding.
    ///
    /// Missing table name or database interface are reported when the
    /// metadata is first loaded.
    pub fn build(self) -> TableBinding<D> {
        TableBinding {
            table_name: self.table_name,
            db: self.db,
            defaults: self.defaults,
            populate_nullable_columns: self.populate_nullable_columns,
            dialect: self.dialect,
            config: self.config,
            metadata: OnceCell::new(),
        }
    }
}

/// Shared, immutable configuration for building records of one table.
pub struct TableBinding<D> {
    table_name: Option<String>,
    db: Option<Arc<D>>,
    defaults: DefaultRegistry,
    populate_nullable_columns: bool,
    dialect: Arc<dyn Dialect>,
    config: GeneratorConfig,
    metadata: OnceCell<TableMetadata>,
}

impl<D: DbInterface> TableBinding<D> {
    /// Start building a binding.
    pub fn builder() -> TableBindingBuilder<D> {
        TableBindingBuilder::new()
    }

    /// Table name, upper-cased.
    pub fn table_name(&self) -> Option<&str> {
        self.table_name.as_deref()
    }

    /// Database interface.
    pub fn database(&self) -> Option<&Arc<D>> {
        self.db.as_ref()
    }

    /// Whether nullable columns get generated values.
    pub fn populate_nullable_columns(&self) -> bool {
        self.populate_nullable_columns
    }

    /// Registered column defaults.
    pub fn column_defaults(&self) -> &DefaultRegistry {
        &self.defaults
    }

    /// Resolve the default for a column, `None` when none is registered.
    pub fn column_default(&self, column: &str) -> Option<Value> {
        self.defaults.resolve(column)
    }

    /// SQL dialect.
    pub fn dialect(&self) -> &dyn Dialect {
        self.dialect.as_ref()
    }

    /// Value generation settings.
    pub fn generator_config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Check if the table metadata has been loaded.
    pub fn is_metadata_loaded(&self) -> bool {
        self.metadata.initialized()
    }

    /// Loaded table metadata, `None` before the first load.
    pub fn metadata(&self) -> Option<&TableMetadata> {
        self.metadata.get()
    }

    /// Load the table's column metadata.
    ///
    /// Only the first successful call queries the database; later calls
    /// return the cached metadata. Concurrent first calls wait on a single
    /// query. Registered defaults are validated against the loaded columns,
    /// and a failed load leaves the metadata unloaded.
    pub async fn load_metadata(&self) -> Result<&TableMetadata> {
        let table = self.table_name.as_deref().ok_or(Error::TableNotSet)?;
        let db = self.db.as_ref().ok_or(Error::DatabaseInterfaceNotSet)?;

        self.metadata
            .get_or_try_init(|| async {
                debug!(table, "loading table metadata");

                let mut stmt = db
                    .execute(
                        self.dialect.metadata_query(),
                        &[Bind::Value(Value::from(table))],
                    )
                    .await?;
                let rows: Result<Vec<Row>> = stmt.rows().try_collect().await;
                stmt.close().await?;

                let columns = rows?
                    .iter()
                    .map(Column::from_row)
                    .collect::<Result<Vec<_>>>()?;
                if columns.is_empty() {
                    return Err(Error::TableNotExist {
                        table: table.to_string(),
                    });
                }

                let metadata = TableMetadata::new(table, columns);
                self.defaults.validate(&metadata)?;

                debug!(table, columns = metadata.len(), "table metadata loaded");
                Ok::<_, Error>(metadata)
            })
            .await
    }

    /// Drop the cached metadata so the next load queries the database again.
    pub fn reset_metadata(&mut self) {
        self.metadata.take();
    }

    /// Metadata for one column, loading the table metadata if needed.
    pub async fn column_detail(&self, column: &str) -> Result<&Column> {
        self.load_metadata().await?.column(column)
    }

    /// Create an empty record, loading the table metadata if needed.
    pub async fn new_record(&self) -> Result<Record<'_, D>> {
        let metadata = self.load_metadata().await?;
        Ok(Record::new(self, metadata))
    }

    /// Build a record with generated values merged with `overrides`.
    ///
    /// Nothing is written to the database.
    pub async fn build<I, K, V>(&self, overrides: I) -> Result<Record<'_, D>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut record = self.new_record().await?;
        record.generate_column_data(overrides)?;
        Ok(record)
    }

    /// Build a record and insert it, without committing.
    pub async fn create<I, K, V>(&self, overrides: I) -> Result<Record<'_, D>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut record = self.build(overrides).await?;
        record.generate_insert()?;
        record.run_insert().await?;
        Ok(record)
    }

    /// Build a record, insert it and commit.
    pub async fn create_and_commit<I, K, V>(&self, overrides: I) -> Result<Record<'_, D>>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let record = self.create(overrides).await?;
        record.commit().await?;
        Ok(record)
    }
}
