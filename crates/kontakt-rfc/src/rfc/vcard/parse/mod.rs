//! vCard parsing (RFC 6350).
//!
//! ## Usage
//!
//! ```rust
//! use kontakt_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:4.0\r\n\
//! FN:John Doe\r\n\
//! EMAIL:john@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let cards = parse::parse(input);
//! assert_eq!(cards[0].formatted_name().as_deref(), Some("John Doe"));
//! ```
//!
//! ## Stages
//!
//! - [`unfold`] - byte source to logical lines
//! - [`property`] - logical line to property, via [`params`] and [`split`]
//! - [`reader`] - logical lines to cards

pub mod params;
pub mod property;
pub mod reader;
pub mod scan;
pub mod split;
pub mod unfold;

pub use params::parse_parameters;
pub use property::{parse_property, parse_property_with};
pub use reader::{CardReader, parse, parse_single, parse_with, read_cards};
pub use scan::QuoteState;
pub use split::{split, split_value};
pub use unfold::{LineUnfolder, ReadBytes, unfold_str};
