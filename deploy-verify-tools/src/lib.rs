// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for reconciling a deployment trace against a named address map and verifying the
//! deployed contracts on a block explorer.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod ops;
pub mod utils;
pub mod verifier;

pub use error::{Error, Result, ServiceError};
pub use verifier::*;
