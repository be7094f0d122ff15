//! Remapping resolution service with once-per-process memoization.
//!
//! The service asks the dependency tool for the project's remappings and
//! substitutes the static `remappings.txt` file when the tool is
//! unavailable. The resolved table is computed at most once; every caller
//! gets the same table for the remainder of the process.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::domain::{RemappingParseError, RemappingTable, parse_remappings};
use crate::ports::RemappingToolPort;

/// Name of the static fallback file, read from the project root when the
/// dependency tool cannot produce the remappings.
pub const REMAPPINGS_FILE: &str = "remappings.txt";

/// Errors surfaced by [`RemappingsService::remappings`].
///
/// Tool failures never appear here: they are recovered locally by reading
/// the fallback file instead.
#[derive(Debug, Error)]
pub enum RemappingsError {
    /// The sourced text failed validation.
    #[error(transparent)]
    Parse(#[from] RemappingParseError),

    /// The fallback file could not be read. Surfaced raw: a missing
    /// `remappings.txt` is an ordinary I/O failure, not a tool problem.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Resolves the project's remapping table exactly once per process.
///
/// The first caller triggers the source-then-parse computation; callers that
/// arrive while it is in flight await that same computation, and every later
/// caller receives the identical resolved table. A failed resolution is not
/// cached: the next call retries.
pub struct RemappingsService {
    tool: Arc<dyn RemappingToolPort>,
    project_root: PathBuf,
    cache: OnceCell<RemappingTable>,
}

impl RemappingsService {
    /// Create a service that asks `tool` first and falls back to
    /// `<project_root>/remappings.txt`.
    pub fn new(tool: Arc<dyn RemappingToolPort>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            tool,
            project_root: project_root.into(),
            cache: OnceCell::new(),
        }
    }

    /// Get the project's remappings, resolving them on first use.
    pub async fn remappings(&self) -> Result<&RemappingTable, RemappingsError> {
        self.cache.get_or_try_init(|| self.resolve()).await
    }

    async fn resolve(&self) -> Result<RemappingTable, RemappingsError> {
        let raw = self.fetch_raw().await?;
        Ok(parse_remappings(&raw)?)
    }

    /// Obtain raw remapping text: the tool is authoritative when it works,
    /// the committed `remappings.txt` covers environments without it.
    async fn fetch_raw(&self) -> Result<String, std::io::Error> {
        match self.tool.list_remappings().await {
            Ok(stdout) => Ok(stdout),
            Err(err) => {
                debug!(
                    error = %err,
                    file = REMAPPINGS_FILE,
                    "dependency tool unavailable, reading fallback file"
                );
                tokio::fs::read_to_string(self.project_root.join(REMAPPINGS_FILE)).await
            }
        }
    }
}
