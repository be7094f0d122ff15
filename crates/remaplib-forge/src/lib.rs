//! `forge` CLI adapter for remaplib.
//!
//! Implements the core crate's dependency-tool port by shelling out to the
//! Foundry-style `forge` binary. Binary discovery, subprocess invocation,
//! and exit-status classification live here; what the output means is the
//! core crate's business.

#![deny(unused_crate_dependencies)]

mod invocation;
mod translate;

pub use invocation::{FORGE_PATH_ENV, ForgeCli};
pub use translate::classify_exit;
