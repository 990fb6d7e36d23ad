//! vCard record model.

mod card;
mod parameter;
mod property;
mod structured;
mod version;

pub use card::Card;
pub use parameter::{Parameter, ParameterMap, types};
pub use property::{Property, names};
pub use structured::{
    Address, AddressField, GeoField, GeoPosition, NameField, Organization, StructuredName,
};
pub use version::VCardVersion;
