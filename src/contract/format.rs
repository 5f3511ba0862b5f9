/// Output format selection and platform version tags.
use std::fmt;

use super::errors::ContractError;

/// `--format` value for free text.
pub const DATA_FORMAT_TEXT: &str = "text";
/// `--format` value for JSON.
pub const DATA_FORMAT_JSON: &str = "json";
/// `--output` value for a plain (unencrypted) archive.
pub const ARCHIVE_FORMAT_PLAIN: &str = "plain";
/// `--output` value for an encrypted archive.
pub const ARCHIVE_FORMAT_ENCRYPTED: &str = "encrypt";

const DATA_FORMATS: &str = "text / json";
const ARCHIVE_FORMATS: &str = "plain / encrypt";

/// Platform version tag used when none is given.
pub const DEFAULT_VERSION: &str = "hpvs";

/// Platform version tags the encryption path accepts.
pub const SUPPORTED_VERSIONS: [&str; 3] = ["hpvs", "hpcr-rhvs", "hpcc-peerpod"];

/// Which encode path a request takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Free text, encoded.
    PlainText,
    /// JSON document, validated and encoded.
    Json,
    /// Folder archived and encoded.
    ArchiveUnencrypted,
    /// Folder archived, encoded and encrypted.
    ArchiveEncrypted,
    /// Free text, encrypted.
    TextEncrypted,
    /// JSON document, encrypted.
    JsonEncrypted,
}

impl OutputFormat {
    /// Parse the `--format` value of `base64`.
    ///
    /// # Errors
    ///
    /// Returns `ContractError::UnsupportedFormat` for anything but `text` / `json`.
    pub fn parse_data(value: &str) -> Result<Self, ContractError> {
        match value {
            DATA_FORMAT_TEXT => Ok(Self::PlainText),
            DATA_FORMAT_JSON => Ok(Self::Json),
            _ => Err(unsupported(value, DATA_FORMATS)),
        }
    }

    /// Parse the `--format` value of `encrypt-string`.
    ///
    /// # Errors
    ///
    /// Returns `ContractError::UnsupportedFormat` for anything but `text` / `json`.
    pub fn parse_encrypted_data(value: &str) -> Result<Self, ContractError> {
        match value {
            DATA_FORMAT_TEXT => Ok(Self::TextEncrypted),
            DATA_FORMAT_JSON => Ok(Self::JsonEncrypted),
            _ => Err(unsupported(value, DATA_FORMATS)),
        }
    }

    /// Parse the `--output` value of `base64-tgz`.
    ///
    /// # Errors
    ///
    /// Returns `ContractError::UnsupportedFormat` for anything but `plain` / `encrypt`.
    pub fn parse_archive(value: &str) -> Result<Self, ContractError> {
        match value {
            ARCHIVE_FORMAT_PLAIN => Ok(Self::ArchiveUnencrypted),
            ARCHIVE_FORMAT_ENCRYPTED => Ok(Self::ArchiveEncrypted),
            _ => Err(unsupported(value, ARCHIVE_FORMATS)),
        }
    }

    /// Whether this path needs a certificate and a version tag.
    #[must_use]
    pub fn is_encrypted(self) -> bool {
        matches!(
            self,
            Self::ArchiveEncrypted | Self::TextEncrypted | Self::JsonEncrypted
        )
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PlainText => "text",
            Self::Json => "json",
            Self::ArchiveUnencrypted => "tgz",
            Self::ArchiveEncrypted => "tgz-encrypted",
            Self::TextEncrypted => "text-encrypted",
            Self::JsonEncrypted => "json-encrypted",
        };
        f.write_str(name)
    }
}

fn unsupported(value: &str, supported: &'static str) -> ContractError {
    ContractError::UnsupportedFormat {
        value: value.to_owned(),
        supported,
    }
}

/// Resolve the platform version tag, defaulting to [`DEFAULT_VERSION`].
///
/// # Errors
///
/// Returns `ContractError::Validation` for an unknown tag.
pub fn resolve_version(version: Option<&str>) -> Result<&str, ContractError> {
    let version = version.map(str::trim).filter(|v| !v.is_empty());
    match version {
        None => Ok(DEFAULT_VERSION),
        Some(v) if SUPPORTED_VERSIONS.contains(&v) => Ok(v),
        Some(v) => Err(ContractError::Validation(format!(
            "unsupported OS version '{v}' (supported: {})",
            SUPPORTED_VERSIONS.join(" / ")
        ))),
    }
}
