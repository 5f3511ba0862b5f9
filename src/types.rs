/// Serializable output types written with `--json`.
///
/// These are decoupled from the domain types so the JSON shape stays stable
/// if `Encoded` or `ContractError` grow fields.
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::contract::{ContractError, Encoded};

/// Encoded contract printed to stdout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodedOutput {
    /// Always `true`.
    pub ok: bool,
    /// The encoded (possibly encrypted) data.
    pub data: String,
    /// SHA-256 (hex) of the raw input.
    pub input_checksum: String,
    /// SHA-256 (hex) of `data`.
    pub output_checksum: String,
}

impl EncodedOutput {
    /// Construct from an `Encoded` result.
    #[must_use]
    pub fn from_encoded(encoded: &Encoded) -> Self {
        Self {
            ok: true,
            data: encoded.data.clone(),
            input_checksum: encoded.input_checksum.clone(),
            output_checksum: encoded.output_checksum.clone(),
        }
    }
}

/// Confirmation that the result was stored in a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredOutput {
    /// Always `true`.
    pub ok: bool,
    /// The command's success notice.
    pub message: String,
    /// Where the data was written.
    pub path: String,
    /// SHA-256 (hex) of the stored data.
    pub output_checksum: String,
}

impl StoredOutput {
    /// Construct from the notice, destination path and stored result.
    #[must_use]
    pub fn new(message: &str, path: &Path, encoded: &Encoded) -> Self {
        Self {
            ok: true,
            message: message.to_owned(),
            path: path.display().to_string(),
            output_checksum: encoded.output_checksum.clone(),
        }
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`snake_case`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a `ContractError`.
    #[must_use]
    pub fn from_contract_error(err: &ContractError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
            },
        }
    }
}
