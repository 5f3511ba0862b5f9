/// Private key and certificate acquisition.
///
/// Policy:
///
/// 1. An explicit private key path always wins. It must exist and is returned verbatim.
/// 2. Only when no path is given is `openssl` probed (`openssl version`) and asked
///    for a fresh RSA key (`openssl genrsa 4096`).
/// 3. An absent certificate path yields an empty [`Certificate`] without touching the
///    filesystem; a supplied path that is missing or unreadable is an error.
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::errors::ContractError;
use super::files;
use crate::process::CommandRunner;

/// RSA modulus size for generated keys.
pub const GENERATED_KEY_BITS: &str = "4096";

/// Where a private key came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyProvenance {
    /// Read from this file.
    Loaded(PathBuf),
    /// Freshly produced by `openssl genrsa`.
    Generated,
}

/// PEM-encoded private key. Constructed only on full success and never mutated.
#[derive(Debug)]
pub struct KeyMaterial {
    pem: String,
    provenance: KeyProvenance,
}

impl KeyMaterial {
    /// How this key was obtained.
    #[must_use]
    pub fn provenance(&self) -> &KeyProvenance {
        &self.provenance
    }

    /// Consume the key, yielding the PEM text.
    #[must_use]
    pub fn into_pem(self) -> String {
        self.pem
    }
}

/// Encryption certificate text. Empty means "none supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Certificate(String);

impl Certificate {
    /// Whether no certificate was supplied.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the PEM text (empty when absent).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn non_empty(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| !p.as_os_str().is_empty())
}

/// Resolve a private key from `path`, or generate one when no path is given.
///
/// # Errors
///
/// - `ContractError::NotFound` — the given path does not exist
/// - `ContractError::Read` — the given path could not be read
/// - `ContractError::ToolUnavailable` — `openssl` could not be run
/// - `ContractError::Generation` — `openssl genrsa` failed
pub fn acquire_private_key(
    runner: &dyn CommandRunner,
    openssl: &str,
    path: Option<&Path>,
) -> Result<KeyMaterial, ContractError> {
    let Some(path) = non_empty(path) else {
        return generate_private_key(runner, openssl);
    };

    if !files::exists(path) {
        return Err(ContractError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let pem = files::read_all(path)?;
    debug!(path = %path.display(), "loaded private key");
    Ok(KeyMaterial {
        pem,
        provenance: KeyProvenance::Loaded(path.to_path_buf()),
    })
}

/// Confirm the cryptographic tool can be started and answers `version`.
///
/// # Errors
///
/// Returns `ContractError::ToolUnavailable` if the probe fails for any reason.
pub fn check_tool_available(runner: &dyn CommandRunner, openssl: &str) -> Result<(), ContractError> {
    let version = runner
        .run(openssl, b"", &["version"])
        .map_err(|source| ContractError::ToolUnavailable {
            tool: openssl.to_owned(),
            source,
        })?;
    debug!(version = %String::from_utf8_lossy(&version).trim(), "openssl available");
    Ok(())
}

fn generate_private_key(runner: &dyn CommandRunner, openssl: &str) -> Result<KeyMaterial, ContractError> {
    check_tool_available(runner, openssl)?;

    let output = runner
        .run(openssl, b"", &["genrsa", GENERATED_KEY_BITS])
        .map_err(|e| ContractError::Generation(e.to_string()))?;
    let pem = String::from_utf8(output)
        .map_err(|_| ContractError::Generation("openssl produced non UTF-8 output".to_owned()))?;
    if pem.trim().is_empty() {
        return Err(ContractError::Generation("openssl produced no key".to_owned()));
    }

    info!(bits = GENERATED_KEY_BITS, "generated private key");
    Ok(KeyMaterial {
        pem,
        provenance: KeyProvenance::Generated,
    })
}

/// Resolve the optional encryption certificate.
///
/// # Errors
///
/// - `ContractError::NotFound` — a path was given but does not exist
/// - `ContractError::Read` — a path was given but could not be read
pub fn acquire_certificate(path: Option<&Path>) -> Result<Certificate, ContractError> {
    let Some(path) = non_empty(path) else {
        return Ok(Certificate::default());
    };

    if !files::exists(path) {
        return Err(ContractError::NotFound {
            path: path.to_path_buf(),
        });
    }

    files::read_all(path).map(Certificate)
}
