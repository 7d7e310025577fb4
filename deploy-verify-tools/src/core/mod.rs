// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

pub mod address_map;
pub mod classify;
pub mod driver;
pub mod explorer;
pub mod job;
pub mod message;
pub mod trace;
pub mod verification;
