//! # sentmd
//!
//! **CLI Binary**
//!
//! This is the entry point for the `sentmd` command-line application.
//! It orchestrates the other crates to perform the requested actions.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Load `sentmd.toml` and merge it under the CLI flags
//! * Install logging
//! * Dispatch commands to appropriate handlers
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

mod commands;
mod config;
mod error_hints;
mod logging;
mod progress;

use anyhow::Result;
use clap::Parser;
use sentmd_config::Cli;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    let toml = config::load_config(cli.global.config.as_deref())?;
    commands::dispatch(cli, &toml)
}

/// Render an error with its cause chain and any matching hints.
pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}
