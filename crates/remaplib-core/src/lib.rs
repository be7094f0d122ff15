//! Core domain types, ports, and services for remaplib.
//!
//! This crate holds everything the host build system needs to obtain a
//! project's import remappings without knowing how they are produced: the
//! [`RemappingTable`] domain type, the pure text-format parser, the port that
//! abstracts the external dependency tool, and the memoizing resolution
//! service. Process spawning lives in adapter crates.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{RemappingParseError, RemappingTable, parse_remappings};
pub use ports::{RemappingToolPort, ToolError};
pub use services::{REMAPPINGS_FILE, RemappingsError, RemappingsService};
