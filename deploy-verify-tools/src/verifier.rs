// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{path::PathBuf, process::Command};

use typed_builder::TypedBuilder;

use crate::{
    core::{
        message::ProcessOutput,
        verification::{
            classify_failure, FailureKind, VerificationFailure, VerificationRequest,
            VerificationService,
        },
    },
    ServiceError,
};

pub const DEFAULT_VERIFIER_PROGRAM: &str = "npx";
pub const DEFAULT_VERIFIER_ARGS: &[&str] = &["hardhat", "verify"];

/// Verifies contracts by running `hardhat verify` (or a compatible command) once per contract.
///
/// The command is run as
/// `<program> <args..> --network <alias> [--contract <fqn>] <address> [--constructor-args <file>]`.
#[derive(Debug, TypedBuilder)]
#[builder(field_defaults(default, setter(into)))]
pub struct HardhatVerifier {
    #[builder(default = DEFAULT_VERIFIER_PROGRAM.to_owned())]
    program: String,
    #[builder(default = DEFAULT_VERIFIER_ARGS.iter().map(|s| s.to_string()).collect())]
    args: Vec<String>,
    /// Working directory, usually the hardhat project root.
    dir: Option<PathBuf>,
}

impl HardhatVerifier {
    pub fn command_args(&self, request: &VerificationRequest<'_>) -> Vec<String> {
        let mut args = self.args.clone();
        args.extend(["--network".to_owned(), request.network.to_owned()]);
        if let Some(fqn) = request.contract_identifier {
            args.extend(["--contract".to_owned(), fqn.to_owned()]);
        }
        args.push(request.address.to_owned());
        if let Some(path) = request.constructor_args {
            args.extend([
                "--constructor-args".to_owned(),
                path.to_string_lossy().into_owned(),
            ]);
        }
        args
    }

    fn run(&self, request: &VerificationRequest<'_>) -> Result<ProcessOutput, ServiceError> {
        let args = self.command_args(request);
        info!(@grey, "$ {} {}", self.program, args.join(" "));
        let mut cmd = Command::new(&self.program);
        cmd.args(&args);
        if let Some(dir) = &self.dir {
            cmd.current_dir(dir);
        }
        let output = cmd.output().map_err(|source| ServiceError::Spawn {
            program: self.program.clone(),
            source,
        })?;
        let output = ProcessOutput::new(&self.program, output);
        if let Ok(json) = serde_json::to_string(&output) {
            debug!(@grey, "{json}");
        }
        Ok(output)
    }
}

impl VerificationService for HardhatVerifier {
    fn verify(&mut self, request: &VerificationRequest<'_>) -> Result<(), VerificationFailure> {
        let output = self.run(request)?;
        let kind = classify_failure(&output.text());
        if output.success() {
            // hardhat-verify exits cleanly when the explorer already has the source
            if kind == FailureKind::AlreadyVerified {
                return Err(VerificationFailure::new(kind, output.summary()));
            }
            return Ok(());
        }
        Err(VerificationFailure::new(kind, output.summary()))
    }
}
