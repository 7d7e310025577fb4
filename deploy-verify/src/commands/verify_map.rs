// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use deploy_verify_tools::ops::verify_address_map;

use crate::{
    common_args::{InputArgs, NetworkArgs, VerifierArgs},
    error::DeployVerifyResult,
    utils::print_report,
};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    input: InputArgs,
    #[command(flatten)]
    network: NetworkArgs,
    #[command(flatten)]
    verifier: VerifierArgs,
}

pub fn exec(args: Args) -> DeployVerifyResult {
    let file = args.input.load_config()?;
    let workdir = args.verifier.workdir(&file)?;
    let config = args
        .input
        .orchestrator_config(&args.network, &file, workdir.clone());
    let mut verifier = args.verifier.verifier(&file, workdir);

    let report = verify_address_map(&config, &mut verifier)?;
    print_report(&report);
    Ok(())
}
