/// `private-key` command: load or generate a private key.
use tracing::info;

use crate::cli::OutputCtx;
use crate::cli::args::PrivateKeyArgs;
use crate::config::Settings;
use crate::contract::{ContractError, Destination, Emitted, Encoded, KeyProvenance, acquire_private_key, emit};
use crate::process::SystemRunner;

/// Printed after the key has been stored with `--out`.
pub const SUCCESS_NOTICE: &str = "successfully stored private key";

/// Run `contract-cli private-key`.
///
/// # Errors
///
/// Returns `ContractError::NotFound` for a missing `--key`, `ContractError::ToolUnavailable`
/// or `ContractError::Generation` when generating, or any write failure.
pub fn run(args: &PrivateKeyArgs, ctx: &OutputCtx, settings: &Settings) -> Result<(), ContractError> {
    let t_key = ctx.timer("acquire_private_key");
    let key = acquire_private_key(&SystemRunner, &settings.openssl, args.key.as_deref())?;
    drop(t_key);

    match key.provenance() {
        KeyProvenance::Generated => info!("using freshly generated private key"),
        KeyProvenance::Loaded(path) => info!(path = %path.display(), "using existing private key"),
    }

    let pem = key.into_pem();
    let encoded = Encoded::new(pem.as_bytes(), pem.clone());
    let destination = Destination::from_path(args.out.as_deref());
    let stdout = std::io::stdout();
    let emitted = emit(&encoded, &destination, SUCCESS_NOTICE, ctx.json, &mut stdout.lock())?;
    if let Emitted::Stored(path) = emitted {
        info!(path = %path.display(), "stored private key");
    }
    Ok(())
}
