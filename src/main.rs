#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! contract-cli — encode and encrypt workload contracts for Hyper Protect hosts.

mod cli;
mod commands;
mod config;
mod contract;
mod process;
mod types;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use cli::{Cli, OutputCtx, write_error};
use config::Settings;
use types::ErrorOutput;

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    let settings = Settings::from_cli(&cli);
    init_logging(&settings.log_filter);

    let ctx = OutputCtx::new(cli.json, cli.debug);

    match commands::dispatch(&cli.command, &ctx, &settings) {
        Ok(()) => {}
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            let error_output = ErrorOutput::from_contract_error(&err);
            write_error(&error_output, cli.json);
            std::process::exit(err.exit_code());
        }
    }
}
