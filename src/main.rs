//! restyle - rewrite survey component files in place
//!
//! restyle provides:
//! - Recursive discovery of `.tsx` files under `app/survey`
//! - An ordered set of literal and regex rewrite rules
//! - Write-only-if-changed semantics with a per-file status report
//! - Text, jsonl, json and markdown report output

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod rewrite;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    core::logging::init_cli_logger(cli.verbose, cli.quiet);
    cli::run(cli)
}
