//! vCard serialization (RFC 6350).
//!
//! ## Usage
//!
//! ```rust
//! use kontakt_rfc::rfc::vcard::{Card, Property, serialize};
//!
//! let mut card = Card::new();
//! card.add_property(Property::new("FN", "John Doe")).unwrap();
//! card.add_property(Property::new("EMAIL", "john@example.com")).unwrap();
//!
//! let output = serialize(&[card]);
//! assert!(output.contains("FN:John Doe\r\n"));
//! ```

mod fold;
mod quote;
mod serializer;

pub use fold::{fold_line, fold_line_default};
pub use quote::needs_quotes;
pub use serializer::{
    serialize, serialize_parameters, serialize_property, serialize_single, serialize_with,
};
