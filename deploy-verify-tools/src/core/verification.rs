// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Types shared by the verifier driver and verification services.

use std::{fmt, path::Path};

use regex::Regex;

/// Everything a verification service needs for one contract.
#[derive(Clone, Copy, Debug)]
pub struct VerificationRequest<'a> {
    pub network: &'a str,
    pub address: &'a str,
    pub contract_identifier: Option<&'a str>,
    /// JSON file holding the constructor arguments as an array.
    pub constructor_args: Option<&'a Path>,
}

/// An external service able to verify deployed contract source, e.g. a Blockscout or Etherscan
/// instance reached through hardhat-verify.
pub trait VerificationService {
    fn verify(&mut self, request: &VerificationRequest<'_>) -> Result<(), VerificationFailure>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// The explorer already has source for this address. Success-equivalent.
    AlreadyVerified,
    /// Network error or rate limit; rerunning may succeed.
    ServiceUnavailable,
    /// Compiled bytecode does not match the deployed code. Rerunning will not help.
    BytecodeMismatch,
    Unknown,
}

impl FailureKind {
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::ServiceUnavailable)
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AlreadyVerified => "already verified",
            Self::ServiceUnavailable => "service unavailable",
            Self::BytecodeMismatch => "bytecode mismatch",
            Self::Unknown => "verification failed",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {reason}")]
pub struct VerificationFailure {
    pub kind: FailureKind,
    pub reason: String,
}

impl VerificationFailure {
    pub fn new(kind: FailureKind, reason: impl Into<String>) -> Self {
        Self {
            kind,
            reason: reason.into(),
        }
    }
}

impl From<crate::ServiceError> for VerificationFailure {
    fn from(err: crate::ServiceError) -> Self {
        Self::new(FailureKind::Unknown, err.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VerificationOutcome {
    Verified,
    Skipped(String),
    Failed(VerificationFailure),
}

impl VerificationOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl From<Result<(), VerificationFailure>> for VerificationOutcome {
    fn from(result: Result<(), VerificationFailure>) -> Self {
        match result {
            Ok(()) => Self::Verified,
            Err(failure) if failure.kind == FailureKind::AlreadyVerified => {
                Self::Skipped(failure.reason)
            }
            Err(failure) => Self::Failed(failure),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobOutcome {
    pub contract_name: String,
    pub address: String,
    pub outcome: VerificationOutcome,
}

lazy_static::lazy_static! {
    static ref ALREADY_VERIFIED: Regex =
        Regex::new(r"(?i)already\s+(been\s+)?verified").expect("valid regex");
    static ref BYTECODE_MISMATCH: Regex =
        Regex::new(r"(?i)(does\s+not\s+match|doesn't\s+match|mismatch)").expect("valid regex");
    static ref SERVICE_UNAVAILABLE: Regex = Regex::new(
        r"(?i)(rate\s*limit|too\s+many\s+requests|\b429\b|\b50[234]\b|service\s+unavailable|timed?\s*out|econnrefused|econnreset|etimedout|enotfound|socket\s+hang\s+up|network\s+error)"
    )
    .expect("valid regex");
}

/// Classify verifier output text into a failure kind.
pub fn classify_failure(text: &str) -> FailureKind {
    if ALREADY_VERIFIED.is_match(text) {
        FailureKind::AlreadyVerified
    } else if BYTECODE_MISMATCH.is_match(text) {
        FailureKind::BytecodeMismatch
    } else if SERVICE_UNAVAILABLE.is_match(text) {
        FailureKind::ServiceUnavailable
    } else {
        FailureKind::Unknown
    }
}
