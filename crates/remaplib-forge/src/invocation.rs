//! Asynchronous invocation of the forge binary.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use remaplib_core::{RemappingToolPort, ToolError};

use crate::translate::classify_exit;

/// Environment variable that overrides forge binary discovery.
pub const FORGE_PATH_ENV: &str = "REMAPLIB_FORGE_PATH";

/// Invokes the `forge` CLI for a single project.
///
/// Binary discovery order: explicit override via [`Self::with_binary`], the
/// `REMAPLIB_FORGE_PATH` environment variable, then a PATH search.
pub struct ForgeCli {
    binary: Option<PathBuf>,
    project_root: PathBuf,
}

impl ForgeCli {
    /// Adapter for the project at `project_root`, discovering `forge` on
    /// PATH.
    #[must_use]
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            binary: None,
            project_root: project_root.into(),
        }
    }

    /// Use `binary` instead of discovering `forge`.
    #[must_use]
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = Some(binary.into());
        self
    }

    fn resolve_binary(&self) -> Result<PathBuf, ToolError> {
        if let Some(binary) = &self.binary {
            return Ok(binary.clone());
        }
        if let Ok(path) = std::env::var(FORGE_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        which::which("forge").map_err(|err| {
            ToolError::NotInstalled(format!(
                "`forge` was not found on PATH ({err}); install Foundry or set {FORGE_PATH_ENV}"
            ))
        })
    }

    /// Run a forge subcommand in the project root and return its stdout.
    ///
    /// Every forge invocation goes through here so exit-status translation
    /// is uniform across subcommands.
    pub async fn run(&self, args: &[&str]) -> Result<String, ToolError> {
        let binary = self.resolve_binary()?;
        debug!(binary = %binary.display(), ?args, "running forge");

        let output = Command::new(&binary)
            .args(args)
            .current_dir(&self.project_root)
            .output()
            .await
            .map_err(|err| {
                ToolError::LaunchFailed(format!("failed to launch `{}`: {err}", binary.display()))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(classify_exit(output.status.code(), &stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl RemappingToolPort for ForgeCli {
    async fn list_remappings(&self) -> Result<String, ToolError> {
        self.run(&["remappings"]).await
    }
}
