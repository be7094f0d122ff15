//! Exit-status classification for forge invocations.
//!
//! The same mapping applies to every forge subcommand the adapter runs, so
//! it lives apart from the invocation plumbing.

use remaplib_core::ToolError;

/// Exit code the shell/OS reports when the binary could not be executed.
const EXIT_NOT_FOUND: i32 = 127;
/// Exit code forge produces when it aborts over an invalid configuration
/// file.
const EXIT_BAD_CONFIG: i32 = 134;

/// Classify a finished forge invocation that did not succeed.
///
/// `code` is the process exit code, `None` when the process was terminated
/// by a signal; `stderr` is the captured diagnostic text.
#[must_use]
pub fn classify_exit(code: Option<i32>, stderr: &str) -> ToolError {
    match code {
        Some(EXIT_NOT_FOUND) => ToolError::NotInstalled(
            "`forge` exited with code 127; Foundry does not appear to be installed correctly"
                .to_string(),
        ),
        Some(EXIT_BAD_CONFIG) => ToolError::InvalidConfig(
            "`forge` aborted because its configuration file (foundry.toml) could not be loaded"
                .to_string(),
        ),
        _ => {
            let detail = if stderr.trim().is_empty() {
                match code {
                    Some(c) => format!("`forge` exited with code {c}"),
                    None => "`forge` was terminated by a signal".to_string(),
                }
            } else {
                stderr.trim().to_string()
            };
            ToolError::Unexpected(detail)
        }
    }
}
