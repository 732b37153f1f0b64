//! Record instances: value materialization and insert generation.
//!
//! A `Record` is one in-flight row of a bound table. Its life cycle is
//! `generate_column_data` to fill every column, `generate_insert` to render
//! the statement and binds, then `run_insert` (and optionally `commit`).

use std::collections::HashMap;

use chrono::Local;
use rand::Rng;
use tracing::{debug, trace};

use crate::binding::TableBinding;
use crate::config::GeneratorConfig;
use crate::cursor::Statement;
use crate::error::{Error, Result};
use crate::interface::DbInterface;
use crate::random::{random_hex_string_upto, random_integer, random_string_upto};
use crate::types::{Bind, Column, DataType, TableMetadata, Value};

/// Empty override set, for building a record from defaults alone.
pub const NO_OVERRIDES: [(&str, Value); 0] = [];

/// One generated row of a bound table.
pub struct Record<'b, D> {
    binding: &'b TableBinding<D>,
    metadata: &'b TableMetadata,
    column_values: HashMap<String, Value>,
    insert_statement: Option<String>,
    binds: Vec<Bind>,
}

impl<'b, D: DbInterface> Record<'b, D> {
    pub(crate) fn new(binding: &'b TableBinding<D>, metadata: &'b TableMetadata) -> Self {
        Self {
            binding,
            metadata,
            column_values: HashMap::new(),
            insert_statement: None,
            binds: Vec::new(),
        }
    }

    /// Table this record belongs to, upper-cased.
    pub fn table_name(&self) -> &str {
        self.metadata.table_name()
    }

    /// Binding this record was created from.
    pub fn binding(&self) -> &'b TableBinding<D> {
        self.binding
    }

    /// Metadata for one column (case-insensitive).
    pub fn column_detail(&self, column: &str) -> Result<&'b Column> {
        self.metadata.column(column)
    }

    /// All column values, keyed by upper-cased column name.
    pub fn column_values(&self) -> &HashMap<String, Value> {
        &self.column_values
    }

    /// Value of one column.
    ///
    /// Fails with `ColumnNotInTable` for unknown columns; `None` means no
    /// value has been generated yet.
    pub fn column_value(&self, column: &str) -> Result<Option<&Value>> {
        let column = self.metadata.column(column)?;
        Ok(self.column_values.get(&column.name))
    }

    /// Insert statement rendered by `generate_insert`.
    pub fn insert_statement(&self) -> Option<&str> {
        self.insert_statement.as_deref()
    }

    /// Binds rendered by `generate_insert`, in statement column order.
    pub fn binds(&self) -> &[Bind] {
        &self.binds
    }

    /// Generate values for every column, then apply `overrides`.
    ///
    /// Each column gets its registered default if there is one, NULL if it
    /// is nullable and the binding does not populate nullable columns, or a
    /// random value for its data type otherwise. Override keys are matched
    /// case-insensitively and win over everything else. An unknown override
    /// key fails with `ColumnNotInTable` and leaves the record unchanged.
    pub fn generate_column_data<I, K, V>(&mut self, overrides: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        self.generate_column_data_with_rng(&mut rand::thread_rng(), overrides)
    }

    /// `generate_column_data` with a caller-supplied RNG.
    pub fn generate_column_data_with_rng<R, I, K, V>(
        &mut self,
        rng: &mut R,
        overrides: I,
    ) -> Result<()>
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let defaults = self.binding.column_defaults();
        let populate_nullable = self.binding.populate_nullable_columns();
        let config = self.binding.generator_config();

        let mut values = HashMap::with_capacity(self.metadata.len());
        for column in self.metadata.iter() {
            let value = match defaults.resolve(&column.name) {
                Some(value) => value,
                None if column.is_nullable() && !populate_nullable => Value::Null,
                None => random_value(rng, column, config)?,
            };
            trace!(column = %column.name, value = %value, "generated column value");
            values.insert(column.name.clone(), value);
        }

        let mut normalized: Vec<(String, Value)> = Vec::new();
        for (key, value) in overrides {
            let column = self.metadata.column(key.as_ref())?;
            normalized.push((column.name.clone(), value.into()));
        }
        values.extend(normalized);

        self.column_values = values;
        Ok(())
    }

    /// Render the insert statement and binds for the current values.
    ///
    /// Columns appear in ascending name order, not table position. NULL
    /// values are bound as NULLs typed after the column's data type.
    pub fn generate_insert(&mut self) -> Result<&str> {
        let dialect = self.binding.dialect();

        let mut names = Vec::with_capacity(self.metadata.len());
        let mut placeholders = Vec::with_capacity(self.metadata.len());
        let mut binds = Vec::with_capacity(self.metadata.len());
        for column in self.metadata.iter() {
            names.push(column.name.as_str());
            placeholders.push(dialect.bind_placeholder(&column.name));
            binds.push(match self.column_values.get(&column.name) {
                Some(value) if !value.is_null() => Bind::Value(value.clone()),
                _ => Bind::TypedNull(column.bind_type()?),
            });
        }

        let statement = format!(
            "insert into {} ({}) values ({})",
            self.metadata.table_name(),
            names.join(","),
            placeholders.join(",")
        );
        debug!(statement = %statement, binds = binds.len(), "generated insert");

        self.binds = binds;
        Ok(self.insert_statement.insert(statement).as_str())
    }

    /// Execute the statement rendered by `generate_insert`.
    ///
    /// Fails with `NoInsertStatement` if `generate_insert` was not called.
    pub async fn run_insert(&self) -> Result<()> {
        let statement = self
            .insert_statement
            .as_deref()
            .ok_or(Error::NoInsertStatement)?;
        let db = self
            .binding
            .database()
            .ok_or(Error::DatabaseInterfaceNotSet)?;

        debug!(table = self.table_name(), "running insert");
        let mut stmt = db.execute(statement, &self.binds).await?;
        stmt.close().await
    }

    /// Commit the current transaction on the binding's database interface.
    pub async fn commit(&self) -> Result<()> {
        let db = self
            .binding
            .database()
            .ok_or(Error::DatabaseInterfaceNotSet)?;
        debug!(table = self.table_name(), "committing");
        db.commit().await
    }

    /// Build a predicate matching the current values of `columns`.
    ///
    /// The result has no `where` keyword, e.g.
    /// `COL1 IS NULL AND COL4 = 'abc'`. Literals are rendered by the
    /// binding's dialect.
    pub fn where_clause_for<I, S>(&self, columns: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dialect = self.binding.dialect();
        let mut predicates = Vec::new();
        for name in columns {
            let column = self.metadata.column(name.as_ref())?;
            let predicate = match self.column_values.get(&column.name) {
                None | Some(Value::Null) => format!("{} IS NULL", column.name),
                Some(value) => format!(
                    "{} = {}",
                    column.name,
                    dialect.quote_literal(column, value)
                ),
            };
            predicates.push(predicate);
        }
        Ok(predicates.join(" AND "))
    }
}

/// Random value for a column, by data type.
pub(crate) fn random_value<R: Rng + ?Sized>(
    rng: &mut R,
    column: &Column,
    config: &GeneratorConfig,
) -> Result<Value> {
    let value = match column.data_type {
        DataType::Char | DataType::Varchar | DataType::Clob => {
            Value::String(random_string_upto(rng, column.max_length)?)
        }
        DataType::Raw => Value::String(random_hex_string_upto(rng, column.max_length)?),
        DataType::Date | DataType::DateTime | DataType::Timestamp => {
            Value::Timestamp(Local::now().naive_local())
        }
        DataType::Number if column.scale == Some(0) => {
            Value::Integer(i64::from(random_integer(rng, config.max_random_integer)?))
        }
        // TODO: derive a random value from precision and scale instead of a constant
        DataType::Number => Value::Float(config.scaled_number_value),
        DataType::Integer => Value::Float(config.integer_value),
        DataType::Unsupported(_) => Value::Null,
    };
    Ok(value)
}
