//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types; concrete adapters live in sibling crates.

pub mod remapping_tool;

pub use remapping_tool::{RemappingToolPort, ToolError};
