//! Column metadata and value types.

mod bind;
mod column;
mod data_type;
mod metadata;
mod row;
mod value;

pub use bind::{Bind, BindType};
pub use column::Column;
pub use data_type::DataType;
pub use metadata::TableMetadata;
pub use row::Row;
pub use value::Value;
