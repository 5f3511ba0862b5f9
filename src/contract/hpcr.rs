/// `ContractEncoder` backed by base64, the system `tar` and `openssl`.
///
/// Encrypted output uses the `hyper-protect-basic` envelope:
///
/// ```text
/// hyper-protect-basic.<base64(password encrypted to the certificate)>.<base64(AES-256-CBC payload)>
/// ```
///
/// The password is 32 random bytes from `openssl rand -base64 32`. It is encrypted
/// with the recipient certificate's public key (`openssl pkeyutl -encrypt -certin`)
/// and used as the passphrase for `openssl enc -aes-256-cbc -pbkdf2`.
/// Archives are gzip-compressed tarballs; encrypted archives encrypt the base64 text
/// of the tarball.
///
/// The version tag only selects the platform's built-in certificate, which this encoder
/// does not ship. Once a certificate is supplied the tag has no effect on the envelope.
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use super::encoder::{ContractEncoder, Encoded};
use super::errors::ContractError;
use super::files;
use super::keys::{Certificate, check_tool_available};
use crate::process::CommandRunner;

/// Prefix of every encrypted envelope.
pub const ENVELOPE_PREFIX: &str = "hyper-protect-basic";

/// Default encoder implementation.
#[derive(Debug)]
pub struct HpcrEncoder<R> {
    runner: R,
    openssl: String,
    tar: String,
}

impl<R: CommandRunner> HpcrEncoder<R> {
    /// Build an encoder that shells out through `runner`.
    #[must_use]
    pub fn new(runner: R, openssl: &str, tar: &str) -> Self {
        Self {
            runner,
            openssl: openssl.to_owned(),
            tar: tar.to_owned(),
        }
    }

    /// Gzip-compressed tarball of a folder's contents, or of a single file.
    fn archive(&self, path: &Path) -> Result<Vec<u8>, ContractError> {
        // Entries are always `./`-relative so tar never reads a file name as an option.
        let (dir, entry) = if path.is_dir() {
            (path, PathBuf::from("."))
        } else {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .map_or_else(|| PathBuf::from("."), |name| Path::new(".").join(name));
            (dir, name)
        };

        let tgz = self.runner.run(
            &self.tar,
            b"",
            &["-czf", "-", "-C", utf8(dir)?, utf8(&entry)?],
        )?;
        debug!(path = %path.display(), bytes = tgz.len(), "archived input");
        Ok(tgz)
    }

    /// Encrypt `payload` for the holder of `cert`, returning the envelope string.
    fn encrypt(&self, payload: &[u8], version: &str, cert: &Certificate) -> Result<String, ContractError> {
        if cert.is_absent() {
            return Err(ContractError::Encoding(format!(
                "no encryption certificate supplied for '{version}' (use --cert)"
            )));
        }
        check_tool_available(&self.runner, &self.openssl)?;

        let scratch = tempfile::tempdir().map_err(|source| ContractError::Write {
            path: std::env::temp_dir(),
            source,
        })?;
        let cert_path = scratch.path().join("encrypt.crt");
        let password_path = scratch.path().join("password");
        files::write_all(&cert_path, cert.as_str())?;

        let password = self.runner.run(&self.openssl, b"", &["rand", "-base64", "32"])?;
        let password = String::from_utf8_lossy(&password).trim().to_owned();
        if password.is_empty() {
            return Err(ContractError::Encoding(
                "openssl returned an empty password".to_owned(),
            ));
        }
        files::write_all(&password_path, &password)?;

        let encrypted_password = self.runner.run(
            &self.openssl,
            password.as_bytes(),
            &["pkeyutl", "-encrypt", "-certin", "-inkey", utf8(&cert_path)?],
        )?;

        let pass_arg = format!("file:{}", utf8(&password_path)?);
        let encrypted_payload = self.runner.run(
            &self.openssl,
            payload,
            &[
                "enc", "-aes-256-cbc", "-pbkdf2", "-md", "sha256", "-salt", "-pass", pass_arg.as_str(),
            ],
        )?;

        debug!(version, payload_bytes = payload.len(), "encrypted payload");
        Ok(format!(
            "{ENVELOPE_PREFIX}.{}.{}",
            STANDARD.encode(encrypted_password),
            STANDARD.encode(encrypted_payload)
        ))
    }
}

fn utf8(path: &Path) -> Result<&str, ContractError> {
    path.to_str().ok_or_else(|| {
        ContractError::Validation(format!("path '{}' is not valid UTF-8", path.display()))
    })
}

fn validate_json(json: &str) -> Result<(), ContractError> {
    serde_json::from_str::<serde_json::Value>(json)
        .map(|_| ())
        .map_err(|e| ContractError::Encoding(format!("invalid JSON input - {e}")))
}

impl<R: CommandRunner> ContractEncoder for HpcrEncoder<R> {
    fn encode_text(&self, text: &str) -> Result<Encoded, ContractError> {
        Ok(Encoded::new(text.as_bytes(), STANDARD.encode(text)))
    }

    fn encode_json(&self, json: &str) -> Result<Encoded, ContractError> {
        validate_json(json)?;
        self.encode_text(json)
    }

    fn encode_archive(&self, path: &Path) -> Result<Encoded, ContractError> {
        let tgz = self
            .archive(path)
            .map_err(|e| ContractError::Encoding(format!("failed to generate base64 tar - {e}")))?;
        Ok(Encoded::new(&tgz, STANDARD.encode(&tgz)))
    }

    fn encode_archive_encrypted(
        &self,
        path: &Path,
        version: &str,
        cert: &Certificate,
    ) -> Result<Encoded, ContractError> {
        let tgz = self.archive(path).map_err(|e| {
            ContractError::Encoding(format!("failed to generate encrypted base64 tar - {e}"))
        })?;
        let encoded = STANDARD.encode(&tgz);
        let envelope = self.encrypt(encoded.as_bytes(), version, cert)?;
        Ok(Encoded::new(&tgz, envelope))
    }

    fn encode_text_encrypted(
        &self,
        text: &str,
        version: &str,
        cert: &Certificate,
    ) -> Result<Encoded, ContractError> {
        let envelope = self.encrypt(text.as_bytes(), version, cert)?;
        Ok(Encoded::new(text.as_bytes(), envelope))
    }

    fn encode_json_encrypted(
        &self,
        json: &str,
        version: &str,
        cert: &Certificate,
    ) -> Result<Encoded, ContractError> {
        validate_json(json)?;
        self.encode_text_encrypted(json, version, cert)
    }
}
