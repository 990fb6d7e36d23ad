//! vCard text engine.
//!
//! Parses and serializes contact cards in the line-oriented vCard text
//! grammar (versions 2.1, 3.0 and 4.0). See [`rfc::vcard`] for the entry
//! points.

pub mod error;
pub mod rfc;
