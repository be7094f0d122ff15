//! Dependency-tool port definition.
//!
//! This port abstracts the external dependency-resolution CLI so the
//! resolution service never spawns processes itself. Implementations live in
//! adapter crates (e.g. the `forge` adapter); tests inject stubs.

use async_trait::async_trait;
use thiserror::Error;

/// Errors reported at the dependency-tool boundary.
///
/// The variants classify how the tool terminated; adapters compose the
/// cause-specific, human-readable message. Every variant makes the
/// resolution service substitute the static remappings file, so none of
/// these reach the host unless the fallback fails too.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// The tool binary could not be located, or it exited with code 127:
    /// the installation is missing or broken.
    #[error("tool not found: {0}")]
    NotInstalled(String),

    /// The tool ran but reported that its own configuration file is
    /// invalid (exit code 134).
    #[error("tool configuration is invalid: {0}")]
    InvalidConfig(String),

    /// The tool failed for any other reason; carries the raw stderr text.
    #[error("unexpected tool failure: {0}")]
    Unexpected(String),

    /// The subprocess could not be spawned at all.
    #[error("failed to launch tool: {0}")]
    LaunchFailed(String),
}

/// Port for the external dependency tool's remapping listing.
///
/// Implementations return the tool's standard output as UTF-8 text without
/// interpreting it; parsing and validation belong to the domain layer.
#[async_trait]
pub trait RemappingToolPort: Send + Sync {
    /// Run the tool's remapping-listing command and capture its stdout.
    async fn list_remappings(&self) -> Result<String, ToolError>;
}
