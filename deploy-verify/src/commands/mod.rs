// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::DeployVerifyResult;

mod links;
mod verify;
mod verify_map;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Verify every contract created in a deployment trace
    #[clap(visible_alias = "v")]
    Verify(verify::Args),
    /// Verify the tokens and proxies listed in an address map, without constructor arguments
    VerifyMap(verify_map::Args),
    /// Print explorer links for an address map
    #[clap(visible_alias = "l")]
    Links(links::Args),
}

pub fn exec(cmd: Command) -> DeployVerifyResult {
    match cmd {
        Command::Verify(args) => verify::exec(args),
        Command::VerifyMap(args) => verify_map::exec(args),
        Command::Links(args) => links::exec(args),
    }
}
