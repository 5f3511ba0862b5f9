/// `base64-tgz` command: archive a compose/pod folder, optionally encrypted.
use super::encode_and_emit;
use crate::cli::OutputCtx;
use crate::cli::args::Base64TgzArgs;
use crate::config::Settings;
use crate::contract::{ContractError, OutputFormat, Request};

/// Printed after the result has been stored with `--out`.
pub const SUCCESS_NOTICE: &str = "Successfully stored tar tgz data";

/// Run `contract-cli base64-tgz`.
///
/// With `--output encrypt` and no `--cert`, the encoder receives an empty certificate.
///
/// # Errors
///
/// Returns `ContractError::UnsupportedFormat` for an output type other than plain/encrypt,
/// `ContractError::PathNotFound` if the input folder is missing, `ContractError::NotFound`
/// for a missing certificate, or any archive/encryption/write failure.
pub fn run(args: &Base64TgzArgs, ctx: &OutputCtx, settings: &Settings) -> Result<(), ContractError> {
    let format = OutputFormat::parse_archive(&args.output)?;
    let request = Request {
        input: &args.input,
        format,
        version: args.os.as_deref(),
        cert_path: args.cert.as_deref(),
    };
    encode_and_emit(&request, args.out.as_deref(), SUCCESS_NOTICE, ctx, settings)
}
