// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use deploy_verify_tools::ops::explorer_report;

use crate::{
    common_args::{resolve_workdir, InputArgs, NetworkArgs},
    error::DeployVerifyResult,
    utils::print_links,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    input: InputArgs,
    #[command(flatten)]
    network: NetworkArgs,
}

pub fn exec(args: Args) -> DeployVerifyResult {
    let file = args.input.load_config()?;
    let workdir = resolve_workdir(None, &file)?;
    let config = args.input.orchestrator_config(&args.network, &file, workdir);
    print_links(&explorer_report(&config)?);
    Ok(())
}
