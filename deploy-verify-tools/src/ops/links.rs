// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::{
    core::{
        address_map::read_address_map,
        explorer::{explorer_links, resolve_explorer_base, ExplorerLink},
    },
    ops::OrchestratorConfig,
    Result,
};

/// Explorer links for the configured address map, without verifying anything.
///
/// An absent address map yields no links.
pub fn explorer_report(config: &OrchestratorConfig) -> Result<Vec<ExplorerLink>> {
    let base = resolve_explorer_base(config.explorer_url_template.as_deref(), config.chain_id)?;
    let map = match &config.address_map_path {
        Some(path) => read_address_map(path)?,
        None => None,
    };
    Ok(explorer_links(map.as_ref(), &base))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config(dir: &std::path::Path) -> OrchestratorConfig {
        OrchestratorConfig::builder()
            .trace_path(dir.join("run-latest.json"))
            .address_map_path(Some(dir.join("5920.json")))
            .network("kadena_chain20")
            .explorer_url_template(Some("http://chain-{cid}.blockscout".to_owned()))
            .chain_id(Some(20))
            .payload_dir(dir)
            .build()
    }

    #[test]
    fn reports_links_from_map() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("5920.json"),
            r#"{"tokens": {"zUSD": "0x01"}}"#,
        )
        .unwrap();
        let links = explorer_report(&config(dir.path())).unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].url, "http://chain-20.blockscout/address/0x01");
    }

    #[test]
    fn absent_map_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(explorer_report(&config(dir.path())).unwrap().is_empty());
    }
}
