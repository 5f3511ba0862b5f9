/// The contract encoding seam.
///
/// The dispatcher only ever talks to a [`ContractEncoder`]; how the bytes are
/// archived, encoded and encrypted is the implementation's business.
use std::path::Path;

use sha2::{Digest, Sha256};

use super::errors::ContractError;
use super::keys::Certificate;

/// Encoded contract data plus checksums of what went in and what came out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// The transport-safe encoded (and possibly encrypted) string.
    pub data: String,
    /// SHA-256 (hex) of the raw input.
    pub input_checksum: String,
    /// SHA-256 (hex) of `data`.
    pub output_checksum: String,
}

impl Encoded {
    /// Wrap `data`, computing both checksums.
    #[must_use]
    pub fn new(input: &[u8], data: String) -> Self {
        let input_checksum = sha256_hex(input);
        let output_checksum = sha256_hex(data.as_bytes());
        Self {
            data,
            input_checksum,
            output_checksum,
        }
    }
}

/// Lowercase hex SHA-256 of `bytes`.
#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Operations the dispatcher needs from a contract encoding backend.
pub trait ContractEncoder {
    /// Encode free text.
    ///
    /// # Errors
    ///
    /// Returns `ContractError::Encoding` if the backend fails.
    fn encode_text(&self, text: &str) -> Result<Encoded, ContractError>;

    /// Encode a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `ContractError::Encoding` if the input is not JSON or the backend fails.
    fn encode_json(&self, json: &str) -> Result<Encoded, ContractError>;

    /// Archive and encode a folder (or single file).
    ///
    /// # Errors
    ///
    /// Returns `ContractError` if archiving or encoding fails.
    fn encode_archive(&self, path: &Path) -> Result<Encoded, ContractError>;

    /// Archive, encode and encrypt a folder for the platform `version`.
    ///
    /// # Errors
    ///
    /// Returns `ContractError` if archiving, encoding or encryption fails.
    fn encode_archive_encrypted(
        &self,
        path: &Path,
        version: &str,
        cert: &Certificate,
    ) -> Result<Encoded, ContractError>;

    /// Encrypt free text for the platform `version`.
    ///
    /// # Errors
    ///
    /// Returns `ContractError` if encryption fails.
    fn encode_text_encrypted(
        &self,
        text: &str,
        version: &str,
        cert: &Certificate,
    ) -> Result<Encoded, ContractError>;

    /// Encrypt a JSON document for the platform `version`.
    ///
    /// # Errors
    ///
    /// Returns `ContractError` if the input is not JSON or encryption fails.
    fn encode_json_encrypted(
        &self,
        json: &str,
        version: &str,
        cert: &Certificate,
    ) -> Result<Encoded, ContractError>;
}
