//! vCard implementation (RFC 6350).
//!
//! Reads and writes the vCard text format: unfolding, content line
//! scanning, parameter and cardinality validation, and serialization.
//!
//! ## Usage
//!
//! ### Parsing
//!
//! ```rust
//! use kontakt_rfc::rfc::vcard::{AddressField, parse};
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:3.0\r\n\
//! FN:Forrest Gump\r\n\
//! ADR;TYPE=work:;;42 Plantation St.;Baytown;LA;30314;United States of America\r\n\
//! END:VCARD\r\n";
//!
//! let cards = parse(input);
//! let adr = cards[0].property("ADR").unwrap();
//! assert_eq!(adr.field(AddressField::Region).unwrap(), "LA");
//! ```
//!
//! ### Serializing
//!
//! ```rust
//! use kontakt_rfc::rfc::vcard::{Card, Organization, Property, serialize_single};
//!
//! let mut card = Card::new();
//! card.add_property(Property::new("FN", "Jane Doe")).unwrap();
//! card.add_property(Organization::with_units("Acme", ["R&D"]).into()).unwrap();
//!
//! let output = serialize_single(&card);
//! assert!(output.contains("ORG:Acme;R&D\r\n"));
//! ```
//!
//! ## Round-Trip Fidelity
//!
//! Values are stored in wire form and written back unchanged, in the order
//! the properties were added.
//!
//! ## Submodules
//!
//! - [`core`] - Record model (`Card`, `Property`, `ParameterMap`, etc.)
//! - [`parse`] - Unfolding, scanners and the document reader
//! - [`build`] - Serialization functions
//! - [`validation`] - Parameter and cardinality rules

pub mod build;
pub mod core;
pub mod error;
pub mod parse;
pub mod validation;

#[cfg(test)]
mod tests;

pub use build::{
    serialize, serialize_parameters, serialize_property, serialize_single, serialize_with,
};
pub use self::core::{
    Address, AddressField, Card, GeoField, GeoPosition, NameField, Organization, Parameter,
    ParameterMap, Property, StructuredName, VCardVersion,
};
pub use error::{LookupKind, VCardError, VCardResult};
pub use parse::{
    parse, parse_parameters, parse_property, parse_single, parse_with, read_cards, split,
};
pub use validation::{ValidationMatrix, ValueType, ValueTypeRegistry};
