/// Errors from the external process layer.
use std::process::ExitStatus;

use thiserror::Error;

/// Typed failures of a single external process invocation.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The executable could not be located on `PATH` (or at the given path).
    #[error("'{program}' not found")]
    ProgramNotFound {
        /// Program name as passed to the runner.
        program: String,
    },

    /// The executable exists but the OS refused to start it.
    #[error("failed to start '{program}': {source}")]
    Spawn {
        /// Program name as passed to the runner.
        program: String,
        /// Underlying spawn failure.
        #[source]
        source: std::io::Error,
    },

    /// Feeding standard input to the child failed.
    #[error("failed to write standard input of '{program}': {source}")]
    StdinWrite {
        /// Program name as passed to the runner.
        program: String,
        /// Underlying write failure.
        #[source]
        source: std::io::Error,
    },

    /// Waiting for the child (or collecting its output) failed.
    #[error("failed to wait for '{program}': {source}")]
    Wait {
        /// Program name as passed to the runner.
        program: String,
        /// Underlying wait failure.
        #[source]
        source: std::io::Error,
    },

    /// The child ran to completion but reported failure.
    #[error("'{program}' exited with {status}")]
    NonZeroExit {
        /// Program name as passed to the runner.
        program: String,
        /// Exit status reported by the OS.
        status: ExitStatus,
    },
}
