//! # DCR conformance CLI
//!
//! Command-line runner for the OpenBanking Dynamic Client Registration
//! conformance suite.

#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod report;
pub mod run;

pub use error::{CliError, CliResult};
