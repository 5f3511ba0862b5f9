/// Runtime settings resolved once from flags and environment.
use crate::cli::Cli;

/// External tools and logging level for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// openssl executable (`--openssl-bin`, `OPENSSL_BIN`, default `openssl`).
    pub openssl: String,
    /// tar executable (`--tar-bin`, `TAR_BIN`, default `tar`).
    pub tar: String,
    /// `tracing` filter directive.
    pub log_filter: String,
}

impl Settings {
    /// Build from parsed CLI arguments. `--debug` overrides `--log-level`.
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        let log_filter = if cli.debug {
            "debug".to_owned()
        } else {
            cli.log_level.clone()
        };
        Self {
            openssl: non_blank(&cli.openssl_bin, "openssl"),
            tar: non_blank(&cli.tar_bin, "tar"),
            log_filter,
        }
    }
}

fn non_blank(value: &str, fallback: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        fallback.to_owned()
    } else {
        value.to_owned()
    }
}
