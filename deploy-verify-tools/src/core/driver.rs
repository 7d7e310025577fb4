// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Drive a verification service over a batch of jobs.
//!
//! Jobs run one at a time, in order. A failing job is logged and recorded; it never stops the
//! rest of the batch.

use std::{
    io::{self, Write},
    path::Path,
};

use serde_json::Value;
use tempfile::NamedTempFile;

use super::{
    job::VerificationJob,
    verification::{
        FailureKind, JobOutcome, VerificationFailure, VerificationOutcome, VerificationRequest,
        VerificationService,
    },
};

const PAYLOAD_PREFIX: &str = ".tmp.verify.args.";

/// Constructor arguments written to a uniquely named JSON file.
///
/// The file is removed when the payload is dropped or closed.
#[derive(Debug)]
pub struct ArgumentPayload {
    file: NamedTempFile,
}

impl ArgumentPayload {
    pub fn create(dir: impl AsRef<Path>, args: &[Value]) -> io::Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix(PAYLOAD_PREFIX)
            .suffix(".json")
            .tempfile_in(dir)?;
        serde_json::to_writer(&mut file, args)?;
        file.flush()?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Remove the file, reporting any error instead of ignoring it as drop would.
    pub fn close(self) -> io::Result<()> {
        self.file.close()
    }
}

/// Verify every job in order, returning one outcome per job.
pub fn verify_jobs(
    service: &mut impl VerificationService,
    jobs: &[VerificationJob],
    payload_dir: &Path,
) -> Vec<JobOutcome> {
    jobs.iter()
        .map(|job| {
            let outcome = verify_job(service, job, payload_dir);
            log_outcome(job, &outcome);
            JobOutcome {
                contract_name: job.contract_name.clone(),
                address: job.address.clone(),
                outcome,
            }
        })
        .collect()
}

fn verify_job(
    service: &mut impl VerificationService,
    job: &VerificationJob,
    payload_dir: &Path,
) -> VerificationOutcome {
    info!(@grey, "verifying {} at {}", job.contract_name, job.address);

    let payload = if job.constructor_args.is_empty() {
        None
    } else {
        match ArgumentPayload::create(payload_dir, &job.constructor_args) {
            Ok(payload) => Some(payload),
            Err(err) => {
                return VerificationOutcome::Failed(VerificationFailure::new(
                    FailureKind::Unknown,
                    format!("failed to write constructor arguments: {err}"),
                ))
            }
        }
    };

    let request = VerificationRequest {
        network: &job.network,
        address: &job.address,
        contract_identifier: job.contract_identifier.as_deref(),
        constructor_args: payload.as_ref().map(ArgumentPayload::path),
    };
    let result = service.verify(&request);

    if let Some(payload) = payload {
        if let Err(err) = payload.close() {
            warn!(@yellow, "failed to remove constructor arguments file: {err}");
        }
    }

    result.into()
}

fn log_outcome(job: &VerificationJob, outcome: &VerificationOutcome) {
    match outcome {
        VerificationOutcome::Verified => {
            info!(@mint, "verified {} at {}", job.contract_name, job.address)
        }
        VerificationOutcome::Skipped(reason) => {
            info!(@grey, "skipped {} at {}: {reason}", job.contract_name, job.address)
        }
        VerificationOutcome::Failed(failure) if failure.kind == FailureKind::BytecodeMismatch => {
            warn!(@red, "verify {} at {} failed: {failure}", job.contract_name, job.address)
        }
        VerificationOutcome::Failed(failure) => {
            warn!(@yellow, "verify {} at {} failed: {failure}", job.contract_name, job.address)
        }
    }
}
