//! Core data types: runtime-context values and catalog views.

mod catalog;
mod value;

pub use catalog::Catalog;
pub use value::Value;
