// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! CLI for `deploy-verify`.

use std::process::ExitCode;

use clap::Parser;

mod commands;
mod common_args;
mod config;
mod constants;
mod error;
mod utils;

#[derive(Debug, Parser)]
#[command(name = "deploy-verify")]
#[command(author = "Offchain Labs, Inc.")]
#[command(about = "Verify a deployment's contracts on a block explorer", long_about = None)]
#[command(propagate_version = true)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: commands::Command,

    /// Whether to print debug info.
    #[arg(long, global = true)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    simple_logger::init_with_level(log_level).expect("setting up logger");

    // Per-contract failures are reported, not returned; only fatal errors get here
    match commands::exec(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            utils::print_error(&err);
            err.exit_code()
        }
    }
}
