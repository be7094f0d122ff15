//! Domain types for import remappings.

pub mod remapping;

pub use remapping::{RemappingParseError, RemappingTable, parse_remappings};
