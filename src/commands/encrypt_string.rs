/// `encrypt-string` command: encrypt text or JSON for a platform.
use super::encode_and_emit;
use crate::cli::OutputCtx;
use crate::cli::args::EncryptStringArgs;
use crate::config::Settings;
use crate::contract::{ContractError, OutputFormat, Request};

/// Printed after the result has been stored with `--out`.
pub const SUCCESS_NOTICE: &str = "successfully generated encrypted string";

/// Run `contract-cli encrypt-string`.
///
/// # Errors
///
/// Returns `ContractError::UnsupportedFormat` for a format other than text/json,
/// `ContractError::EmptyInput` for empty input, or any certificate/encryption/write failure.
pub fn run(args: &EncryptStringArgs, ctx: &OutputCtx, settings: &Settings) -> Result<(), ContractError> {
    let format = OutputFormat::parse_encrypted_data(&args.format)?;
    let request = Request {
        input: &args.input,
        format,
        version: args.os.as_deref(),
        cert_path: args.cert.as_deref(),
    };
    encode_and_emit(&request, args.out.as_deref(), SUCCESS_NOTICE, ctx, settings)
}
