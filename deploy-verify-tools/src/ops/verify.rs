// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use typed_builder::TypedBuilder;

use crate::{
    core::{
        address_map::{read_address_map, AddressMap},
        classify::classify,
        driver::verify_jobs,
        explorer::{explorer_links, resolve_explorer_base, ExplorerLink},
        job::{build_jobs, VerificationJob},
        trace::read_trace,
        verification::{JobOutcome, VerificationOutcome, VerificationService},
    },
    Error, Result,
};

/// Everything a verification run needs, resolved up front by the caller.
#[derive(Debug, TypedBuilder)]
#[builder(field_defaults(default, setter(into)))]
pub struct OrchestratorConfig {
    #[builder(!default)]
    pub trace_path: PathBuf,
    pub address_map_path: Option<PathBuf>,
    /// Network alias passed to the verification service.
    #[builder(!default)]
    pub network: String,
    pub explorer_url_template: Option<String>,
    pub chain_id: Option<u64>,
    /// Directory for temporary constructor argument files.
    #[builder(!default)]
    pub payload_dir: PathBuf,
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub implementations: usize,
    pub proxies: usize,
    pub outcomes: Vec<JobOutcome>,
    pub links: Vec<ExplorerLink>,
}

impl RunReport {
    pub fn verified(&self) -> usize {
        self.count(|o| matches!(o, VerificationOutcome::Verified))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, VerificationOutcome::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(VerificationOutcome::is_failure)
    }

    fn count(&self, f: impl Fn(&VerificationOutcome) -> bool) -> usize {
        self.outcomes.iter().filter(|o| f(&o.outcome)).count()
    }
}

/// Verify every contract created by the deployment trace, then report explorer links for the
/// address map.
///
/// Fatal errors (missing or malformed trace, malformed address map, bad explorer template) are
/// raised before any contract is submitted. Per-contract failures only show up in the report.
pub fn verify_deployment(
    config: &OrchestratorConfig,
    service: &mut impl VerificationService,
) -> Result<RunReport> {
    let base = resolve_explorer_base(config.explorer_url_template.as_deref(), config.chain_id)?;
    let records = read_trace(&config.trace_path)?;
    let map = match &config.address_map_path {
        Some(path) => read_address_map(path)?,
        None => None,
    };

    let classified = classify(&records);
    info!(@grey,
        "Found {} implementations and {} proxies in {}",
        classified.implementations.len(),
        classified.proxies.len(),
        config.trace_path.display()
    );
    let jobs = build_jobs(&classified, &config.network);
    let outcomes = verify_jobs(service, &jobs, &config.payload_dir);

    Ok(RunReport {
        implementations: classified.implementations.len(),
        proxies: classified.proxies.len(),
        outcomes,
        links: explorer_links(map.as_ref(), &base),
    })
}

/// Verify the contracts named in the address map alone, without constructor arguments.
///
/// `tokens` are verified as implementations and `proxies` against the canonical proxy source.
/// Unlike [verify_deployment], the address map is required here.
pub fn verify_address_map(
    config: &OrchestratorConfig,
    service: &mut impl VerificationService,
) -> Result<RunReport> {
    let base = resolve_explorer_base(config.explorer_url_template.as_deref(), config.chain_id)?;
    let path = config
        .address_map_path
        .as_ref()
        .ok_or(Error::AddressMapNotConfigured)?;
    let map = read_address_map(path)?.ok_or_else(|| Error::AddressMapRequired(path.clone()))?;
    if map.is_empty() {
        warn!(@yellow, "address map {} lists no contracts", path.display());
    }

    let jobs = address_map_jobs(&map, &config.network);
    info!(@grey,
        "Found {} tokens and {} proxies in {}",
        map.tokens().len(),
        map.proxies().len(),
        path.display()
    );
    let outcomes = verify_jobs(service, &jobs, &config.payload_dir);

    Ok(RunReport {
        implementations: map.tokens().len(),
        proxies: map.proxies().len(),
        outcomes,
        links: explorer_links(Some(&map), &base),
    })
}

fn address_map_jobs(map: &AddressMap, network: &str) -> Vec<VerificationJob> {
    let tokens = map
        .tokens()
        .iter()
        .map(|e| VerificationJob::implementation(&e.name, &e.address, network, Vec::new()));
    let proxies = map
        .proxies()
        .iter()
        .map(|e| VerificationJob::proxy(&e.name, &e.address, network, Vec::new()));
    tokens.chain(proxies).collect()
}
