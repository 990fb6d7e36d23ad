//! Static rule tables for vCard records.
//!
//! - [`ValidationMatrix`] - parameter legality and cardinality per property
//! - [`ValueTypeRegistry`] - default value type per property, for markup renderers

mod matrix;
mod value_type;

pub use matrix::{REGISTERED_PARAMETERS, SINGLE_INSTANCE_PROPERTIES, ValidationMatrix};
pub use value_type::{ValueType, ValueTypeRegistry};
