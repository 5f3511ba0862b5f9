/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod base64;
pub mod base64_tgz;
pub mod encrypt_string;
pub mod private_key;

use std::path::Path;

use tracing::info;

use crate::cli::OutputCtx;
use crate::cli::args::Command;
use crate::config::Settings;
use crate::contract::{ContractError, Destination, Emitted, HpcrEncoder, Request, process};
use crate::process::SystemRunner;

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `ContractError` on any command failure.
pub fn dispatch(command: &Command, ctx: &OutputCtx, settings: &Settings) -> Result<(), ContractError> {
    match command {
        Command::Base64(args) => base64::run(args, ctx, settings),
        Command::Base64Tgz(args) => base64_tgz::run(args, ctx, settings),
        Command::EncryptString(args) => encrypt_string::run(args, ctx, settings),
        Command::PrivateKey(args) => private_key::run(args, ctx, settings),
    }
}

/// Encode `request` with the default encoder and emit it to `out` or stdout.
fn encode_and_emit(
    request: &Request<'_>,
    out: Option<&Path>,
    notice: &str,
    ctx: &OutputCtx,
    settings: &Settings,
) -> Result<(), ContractError> {
    let _t = ctx.timer("encode_and_emit");
    let encoder = HpcrEncoder::new(SystemRunner, &settings.openssl, &settings.tar);
    let destination = Destination::from_path(out);
    let stdout = std::io::stdout();
    let emitted = process(request, &encoder, &destination, notice, ctx.json, &mut stdout.lock())?;
    if let Emitted::Stored(path) = emitted {
        info!(path = %path.display(), "stored encoded contract");
    }
    Ok(())
}
