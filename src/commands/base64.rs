/// `base64` command: encode text or JSON.
use super::encode_and_emit;
use crate::cli::OutputCtx;
use crate::cli::args::Base64Args;
use crate::config::Settings;
use crate::contract::{ContractError, OutputFormat, Request};

/// Printed after the result has been stored with `--out`.
pub const SUCCESS_NOTICE: &str = "successfully generated Base64";

/// Run `contract-cli base64`.
///
/// # Errors
///
/// Returns `ContractError::UnsupportedFormat` for a format other than text/json,
/// `ContractError::EmptyInput` for empty input, or any encoding/write failure.
pub fn run(args: &Base64Args, ctx: &OutputCtx, settings: &Settings) -> Result<(), ContractError> {
    let format = OutputFormat::parse_data(&args.format)?;
    let request = Request {
        input: &args.input,
        format,
        version: None,
        cert_path: None,
    };
    encode_and_emit(&request, args.out.as_deref(), SUCCESS_NOTICE, ctx, settings)
}
