//! # DCR conformance CLI
//!
//! Runs the OpenBanking Dynamic Client Registration conformance suite
//! against a server under test.

#![forbid(unsafe_code)]

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dcr_cli::{
    cli::{Cli, Command},
    output::error,
    run::run,
};

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match cli.command {
        Command::Run(args) => match run(&args, cli.verbose) {
            Ok(code) => code,
            Err(e) => {
                error(&e.to_string());
                2
            }
        },
    };

    std::process::exit(exit_code);
}
