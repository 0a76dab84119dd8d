//! Domain error types

use thiserror::Error;

/// Errors on the dispatch path.
///
/// Argument validation failures never reach this type: the parser rejects
/// them with a usage message and a nonzero exit before an invocation is
/// built. Everything after parsing either succeeds (and this process ceases
/// to exist at exec) or fails with one of these.
#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    #[error("Failed to locate the aisctl install directory: {0}")]
    InstallDirUnresolved(String),

    #[error("Malformed native app command line: {0}")]
    MalformedCommandLine(String),

    #[error("Failed to launch {app}: {message}")]
    LaunchFailed { app: String, message: String },
}
