//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// DCR conformance suite - OpenBanking Dynamic Client Registration.
#[derive(Debug, Parser)]
#[command(name = "dcr")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the conformance suite against a server.
    Run(RunArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, clap::Args)]
pub struct RunArgs {
    /// Path to the suite configuration file.
    #[arg(short, long, env = "DCR_CONFIG")]
    pub config: PathBuf,

    /// Run only scenarios whose name or id contains this expression.
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Override the configured specification version (3.2 or 3.3).
    #[arg(short, long)]
    pub spec_version: Option<String>,

    /// Write a JSON report of the run to this path.
    #[arg(short, long)]
    pub report: Option<PathBuf>,
}
