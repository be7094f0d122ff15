//! Services orchestrating domain logic over the ports.

pub mod remappings;

pub use remappings::{REMAPPINGS_FILE, RemappingsError, RemappingsService};
