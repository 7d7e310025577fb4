// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Explorer links for the entries of an address map.

use std::fmt;

use regex::Regex;

use super::address_map::AddressMap;

/// Placeholder for the chainweb chain number in explorer URL templates.
pub const CHAIN_ID_PLACEHOLDER: &str = "{cid}";

lazy_static::lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{[^{}]*\}").expect("valid regex");
}

/// Substitute the chain id into an explorer URL template such as
/// `http://chain-{cid}.evm-testnet-blockscout.chainweb.com`.
pub fn resolve_explorer_base(
    template: Option<&str>,
    chain_id: Option<u64>,
) -> Result<String, ConfigError> {
    let template = template
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(ConfigError::MissingTemplate)?;
    let base = if template.contains(CHAIN_ID_PLACEHOLDER) {
        let chain_id = chain_id.ok_or_else(|| ConfigError::MissingChainId(template.to_owned()))?;
        template.replace(CHAIN_ID_PLACEHOLDER, &chain_id.to_string())
    } else {
        template.to_owned()
    };
    if let Some(placeholder) = PLACEHOLDER.find(&base) {
        return Err(ConfigError::UnknownPlaceholder {
            placeholder: placeholder.as_str().to_owned(),
            template: template.to_owned(),
        });
    }
    Ok(base.trim_end_matches('/').to_owned())
}

pub fn address_url(base: &str, address: &str) -> String {
    format!("{base}/address/{address}")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplorerLink {
    pub category: String,
    pub name: String,
    pub address: String,
    pub url: String,
}

impl fmt::Display for ExplorerLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}: {}", self.name, self.url)
    }
}

/// One link per (category, name, address), grouped by category in map order.
pub fn explorer_links(map: Option<&AddressMap>, base: &str) -> Vec<ExplorerLink> {
    let Some(map) = map else {
        return Vec::new();
    };
    map.categories()
        .iter()
        .flat_map(|category| {
            category.entries.iter().map(|entry| ExplorerLink {
                category: category.name.clone(),
                name: entry.name.clone(),
                address: entry.address.clone(),
                url: address_url(base, &entry.address),
            })
        })
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("explorer URL template is not configured")]
    MissingTemplate,
    #[error("explorer URL template {0} needs a chain id")]
    MissingChainId(String),
    #[error("unknown placeholder {placeholder} in explorer URL template {template}")]
    UnknownPlaceholder {
        placeholder: String,
        template: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TEMPLATE: &str = "http://chain-{cid}.evm-testnet-blockscout.chainweb.com";

    #[test]
    fn substitutes_chain_id() {
        assert_eq!(
            resolve_explorer_base(Some(TEMPLATE), Some(20)).unwrap(),
            "http://chain-20.evm-testnet-blockscout.chainweb.com"
        );
        assert_eq!(
            resolve_explorer_base(Some("https://explorer.example/"), None).unwrap(),
            "https://explorer.example"
        );
    }

    #[test]
    fn rejects_incomplete_templates() {
        assert!(matches!(
            resolve_explorer_base(None, Some(20)),
            Err(ConfigError::MissingTemplate)
        ));
        assert!(matches!(
            resolve_explorer_base(Some("  "), Some(20)),
            Err(ConfigError::MissingTemplate)
        ));
        assert!(matches!(
            resolve_explorer_base(Some(TEMPLATE), None),
            Err(ConfigError::MissingChainId(_))
        ));
        match resolve_explorer_base(Some("http://{network}.example"), Some(20)) {
            Err(ConfigError::UnknownPlaceholder { placeholder, .. }) => {
                assert_eq!(placeholder, "{network}")
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn links_every_entry_in_order() {
        let map = AddressMap::parse(
            r#"{"tokens": {"zUSD": "0x01", "WETH": "0x02"}, "proxies": {"Vault": "0x10"}}"#,
        )
        .unwrap();
        let links = explorer_links(Some(&map), "http://x");
        let lines: Vec<_> = links
            .iter()
            .map(|l| format!("{} {l}", l.category))
            .collect();
        assert_eq!(
            lines,
            [
                "tokens - zUSD: http://x/address/0x01",
                "tokens - WETH: http://x/address/0x02",
                "proxies - Vault: http://x/address/0x10",
            ]
        );
    }

    #[test]
    fn no_map_no_links() {
        assert!(explorer_links(None, "http://x").is_empty());
    }
}
