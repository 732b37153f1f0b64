//! Test data factory for relational tables.
//!
//! Populates database tables for integration tests without hand-written
//! fixtures. A table binding loads the table's column metadata from the
//! data dictionary, generates a plausible value for every column (registered
//! defaults, random strings and numbers bounded by the column's declared
//! size, the current time for dates), merges caller overrides and inserts
//! the row through a parameterized statement.
//!
//! The database itself is reached through the `DbInterface` trait, so any
//! driver that can execute a statement with binds, iterate rows and commit
//! can be plugged in.
//!
//! # Example
//!
//! ```ignore
//! use data_factory_rs::{DataFactory, Result, NO_OVERRIDES};
//!
//! async fn seed(interface: MyOracleInterface) -> Result<()> {
//!     let factory = DataFactory::new(interface);
//!
//!     let employees = factory
//!         .table("employee")
//!         .column_default("first_name", "john")
//!         .build();
//!
//!     // Every column generated, FIRST_NAME from its default
//!     let record = employees.create_and_commit(NO_OVERRIDES).await?;
//!     println!("{}", record.where_clause_for(["employee_id"])?);
//!
//!     // Overrides win over defaults and generated values
//!     employees.create_and_commit([("last_name", "Smith")]).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod binding;
pub mod config;
pub mod cursor;
pub mod defaults;
pub mod dialect;
pub mod error;
pub mod interface;
pub mod random;
pub mod record;
pub mod types;

// Re-export main types
pub use binding::{DataFactory, TableBinding, TableBindingBuilder};
pub use config::GeneratorConfig;
pub use cursor::{Statement, StatementStreamExt};
pub use defaults::{ColumnDefault, DefaultRegistry};
pub use dialect::{Dialect, OracleDialect};
pub use error::{Error, Result};
pub use interface::DbInterface;
pub use record::{Record, NO_OVERRIDES};
pub use types::{Bind, BindType, Column, DataType, Row, TableMetadata, Value};
