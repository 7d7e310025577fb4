// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// Config file picked up from the current directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "deploy-verify.toml";

/// Network alias of Kadena Chainweb EVM testnet chain 20 in the hardhat config.
pub const DEFAULT_NETWORK: &str = "kadena_chain20";
/// Chainweb chain number substituted into the explorer URL template.
pub const DEFAULT_CHAIN_ID: u64 = 20;

pub const DEFAULT_TRACE: &str = "broadcast/Deploy.s.sol/5920/run-latest.json";
pub const DEFAULT_ADDRESS_MAP: &str = "5920.json";

pub const DEFAULT_EXPLORER_URL_TEMPLATE: &str =
    "http://chain-{cid}.evm-testnet-blockscout.chainweb.com";
