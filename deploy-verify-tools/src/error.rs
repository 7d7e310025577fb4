// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Trace(#[from] crate::core::trace::TraceError),
    #[error(transparent)]
    AddressMap(#[from] crate::core::address_map::AddressMapError),
    #[error(transparent)]
    Config(#[from] crate::core::explorer::ConfigError),

    #[error("no address map configured")]
    AddressMapNotConfigured,
    #[error("address map not found: {}", .0.display())]
    AddressMapRequired(PathBuf),
}

/// Failure to talk to the external verification service at all, as opposed to the service
/// rejecting a contract.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::trace::{read_trace, TraceError};
    use std::error::Error as _;

    #[test]
    fn wrapped_errors_are_not_repeated() {
        let err: Error = TraceError::NotFound {
            path: "run-latest.json".into(),
        }
        .into();
        assert_eq!(err.to_string(), "deployment trace not found: run-latest.json");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run-latest.json");
        std::fs::write(&path, "[").unwrap();
        let err: Error = read_trace(&path).unwrap_err().into();
        let message = err.to_string();
        assert_eq!(message.matches("malformed deployment trace").count(), 1);
        // The cause is already part of the message; the source is the parse error itself
        let source = err.source().map(ToString::to_string).unwrap_or_default();
        assert!(!source.contains("malformed deployment trace"));
    }
}
