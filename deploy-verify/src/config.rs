// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! `deploy-verify.toml` config file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::eyre;
use serde::Deserialize;

use crate::constants::DEFAULT_CONFIG_FILE;

/// Every key is optional; command line flags take precedence.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub network: Option<String>,
    pub chain_id: Option<u64>,
    pub trace: Option<PathBuf>,
    pub address_map: Option<PathBuf>,
    pub explorer_url_template: Option<String>,
    pub verifier_program: Option<String>,
    pub verifier_args: Option<Vec<String>>,
    pub workdir: Option<PathBuf>,
}

impl FileConfig {
    /// Load an explicitly given config file, or the default one if it exists.
    pub fn load(path: Option<&Path>) -> eyre::Result<Self> {
        match path {
            Some(path) => Self::read(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::read(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    fn read(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|err| eyre!("could not read config file {}: {err}", path.display()))?;
        toml::from_str(&text)
            .map_err(|err| eyre!("invalid config file {}: {err}", path.display()))
    }
}
