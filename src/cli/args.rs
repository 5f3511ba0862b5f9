/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// contract-cli — encode and encrypt workload contracts for Hyper Protect hosts.
#[derive(Debug, Parser)]
#[command(
    name = "contract-cli",
    about = "Encode and encrypt workload contracts for Hyper Protect confidential computing hosts",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Print results and errors as JSON objects.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log every pipeline stage and external command to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Log level (trace, debug, info, warn, error). Ignored with --debug.
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,

    /// openssl executable used for key generation and encryption.
    #[arg(long, global = true, env = "OPENSSL_BIN", value_name = "PATH", default_value = "openssl")]
    pub openssl_bin: String,

    /// tar executable used for archive packaging.
    #[arg(long, global = true, env = "TAR_BIN", value_name = "PATH", default_value = "tar")]
    pub tar_bin: String,

    #[command(subcommand)]
    pub command: Command,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Base64 encode text or JSON.
    Base64(Base64Args),
    /// Archive a folder containing docker-compose.yaml or pods.yaml, optionally encrypted.
    #[command(name = "base64-tgz")]
    Base64Tgz(Base64TgzArgs),
    /// Encrypt text or JSON for a Hyper Protect platform.
    EncryptString(EncryptStringArgs),
    /// Load a private key, or generate a new RSA key when no path is given.
    PrivateKey(PrivateKeyArgs),
}

/// Arguments for `contract-cli base64`.
#[derive(Debug, Parser)]
pub struct Base64Args {
    /// Text or JSON to encode.
    #[arg(long = "in", value_name = "DATA", default_value = "")]
    pub input: String,

    /// Input format: text or json.
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub format: String,

    /// Store the result in this file instead of printing it.
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

/// Arguments for `contract-cli base64-tgz`.
#[derive(Debug, Parser)]
pub struct Base64TgzArgs {
    /// Folder (or file) containing docker-compose.yaml or pods.yaml.
    #[arg(long = "in", value_name = "PATH", default_value = "")]
    pub input: String,

    /// Output type: plain or encrypt.
    #[arg(long, value_name = "TYPE", default_value = "plain")]
    pub output: String,

    /// Target platform version: hpvs, hpcr-rhvs or hpcc-peerpod (default hpvs).
    #[arg(long, value_name = "VERSION")]
    pub os: Option<String>,

    /// Encryption certificate (encrypt only).
    #[arg(long, value_name = "PATH")]
    pub cert: Option<PathBuf>,

    /// Store the result in this file instead of printing it.
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

/// Arguments for `contract-cli encrypt-string`.
#[derive(Debug, Parser)]
pub struct EncryptStringArgs {
    /// Text or JSON to encrypt.
    #[arg(long = "in", value_name = "DATA", default_value = "")]
    pub input: String,

    /// Input format: text or json.
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub format: String,

    /// Target platform version: hpvs, hpcr-rhvs or hpcc-peerpod (default hpvs).
    #[arg(long, value_name = "VERSION")]
    pub os: Option<String>,

    /// Encryption certificate.
    #[arg(long, value_name = "PATH")]
    pub cert: Option<PathBuf>,

    /// Store the result in this file instead of printing it.
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}

/// Arguments for `contract-cli private-key`.
#[derive(Debug, Parser)]
pub struct PrivateKeyArgs {
    /// Existing private key. A new 4096-bit RSA key is generated when omitted.
    #[arg(long, value_name = "PATH")]
    pub key: Option<PathBuf>,

    /// Store the key in this file instead of printing it.
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,
}
