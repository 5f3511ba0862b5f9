/// Errors from the contract domain layer.
use std::path::PathBuf;

use thiserror::Error;

use crate::process::ProcessError;

/// Errors that can occur while preparing, encoding or storing a contract.
#[derive(Debug, Error)]
pub enum ContractError {
    /// A user-supplied value is missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// An explicitly supplied key or certificate path does not exist.
    #[error("'{}' doesn't exist", path.display())]
    NotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// The input file or folder for archive packaging is not accessible.
    #[error("the path to docker-compose.yaml or pods.yaml is not accessible: '{}'", path.display())]
    PathNotFound {
        /// The input path.
        path: PathBuf,
    },

    /// A file could not be opened or read.
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        /// The file being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A file could not be created or written.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        /// The file being written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The cryptographic tool could not be located or did not answer the probe.
    #[error("{tool} not found - {source}")]
    ToolUnavailable {
        /// Tool that was probed.
        tool: String,
        /// Probe failure.
        #[source]
        source: ProcessError,
    },

    /// Private key generation failed.
    #[error("failed to generate private key - {0}")]
    Generation(String),

    /// An external command failed.
    #[error("external command failed - {0}")]
    Execution(#[from] ProcessError),

    /// The requested format is not one this command understands.
    #[error("invalid format '{value}' (supported: {supported})")]
    UnsupportedFormat {
        /// The value the user passed.
        value: String,
        /// Slash-separated list of accepted values.
        supported: &'static str,
    },

    /// Text or JSON input was empty.
    #[error("input data is missing")]
    EmptyInput,

    /// The encoder rejected the input or failed to produce output.
    #[error("{0}")]
    Encoding(String),
}

/// Exit code mapping for `ContractError` variants.
impl ContractError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) | Self::UnsupportedFormat { .. } | Self::EmptyInput => 2,
            Self::NotFound { .. } | Self::PathNotFound { .. } => 4,
            Self::ToolUnavailable { .. } | Self::Generation(_) | Self::Execution(_) => 5,
            Self::Read { .. } | Self::Write { .. } => 6,
            Self::Encoding(_) => 1,
        }
    }

    /// Machine-readable error code (`snake_case`) for JSON error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::NotFound { .. } => "not_found",
            Self::PathNotFound { .. } => "path_not_found",
            Self::Read { .. } => "read_error",
            Self::Write { .. } => "write_error",
            Self::ToolUnavailable { .. } => "tool_unavailable",
            Self::Generation(_) => "generation_error",
            Self::Execution(_) => "execution_error",
            Self::UnsupportedFormat { .. } => "unsupported_format",
            Self::EmptyInput => "empty_input",
            Self::Encoding(_) => "encoding_error",
        }
    }
}
