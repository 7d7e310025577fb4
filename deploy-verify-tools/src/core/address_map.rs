// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Named address maps.
//!
//! An address map groups deployed addresses by category, then by logical name:
//!
//! ```json
//! { "tokens": { "USDC": "0x..." }, "proxies": { "Vault": "0x..." } }
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};

pub const TOKENS: &str = "tokens";
pub const PROXIES: &str = "proxies";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedAddress {
    pub name: String,
    pub address: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub entries: Vec<NamedAddress>,
}

/// Categories and entries keep the order they have in the document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddressMap {
    categories: Vec<Category>,
}

impl AddressMap {
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        let document: Map<String, Value> = serde_json::from_str(text)?;
        let mut categories = Vec::new();
        for (name, value) in document {
            let Value::Object(entries) = value else {
                debug!(@grey, "ignoring non-category key {name} in address map");
                continue;
            };
            let entries = entries
                .into_iter()
                .filter_map(|(entry, address)| match address {
                    Value::String(address) => Some(NamedAddress {
                        name: entry,
                        address,
                    }),
                    _ => {
                        debug!(@grey, "ignoring non-address entry {name}.{entry} in address map");
                        None
                    }
                })
                .collect();
            categories.push(Category { name, entries });
        }
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Entries of a category. Absent categories are empty.
    pub fn category(&self, name: &str) -> &[NamedAddress] {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.entries.as_slice())
            .unwrap_or(&[])
    }

    pub fn tokens(&self) -> &[NamedAddress] {
        self.category(TOKENS)
    }

    pub fn proxies(&self) -> &[NamedAddress] {
        self.category(PROXIES)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(|c| c.entries.is_empty())
    }
}

/// Load the address map at `path`, or `None` if there is no such file.
pub fn read_address_map(path: impl AsRef<Path>) -> Result<Option<AddressMap>, AddressMapError> {
    let path = path.as_ref();
    if !path.exists() {
        debug!(@grey, "no address map at {}", path.display());
        return Ok(None);
    }
    let text = fs::read_to_string(path).map_err(|source| AddressMapError::Io {
        path: path.to_owned(),
        source,
    })?;
    AddressMap::parse(&text)
        .map(Some)
        .map_err(|source| AddressMapError::Malformed {
            path: path.to_owned(),
            source,
        })
}

#[derive(Debug, thiserror::Error)]
pub enum AddressMapError {
    #[error("failed to read address map {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("malformed address map {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}
