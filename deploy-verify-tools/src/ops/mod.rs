// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub use links::explorer_report;
pub use verify::{verify_address_map, verify_deployment, OrchestratorConfig, RunReport};

mod links;
mod verify;
