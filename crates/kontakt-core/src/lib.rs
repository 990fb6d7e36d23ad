//! Shared building blocks for the kontakt workspace.
//!
//! Holds the pieces every other crate leans on: the core error type,
//! runtime settings, and the wire tokens of the vCard text format.

pub mod config;
pub mod constants;
pub mod error;
