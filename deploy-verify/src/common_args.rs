// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{
    env, io,
    path::{Path, PathBuf},
};

use deploy_verify_tools::{
    ops::OrchestratorConfig, HardhatVerifier, DEFAULT_VERIFIER_ARGS, DEFAULT_VERIFIER_PROGRAM,
};

use crate::{
    config::FileConfig,
    constants::{
        DEFAULT_ADDRESS_MAP, DEFAULT_CHAIN_ID, DEFAULT_EXPLORER_URL_TEMPLATE, DEFAULT_NETWORK,
        DEFAULT_TRACE,
    },
};

#[derive(Debug, clap::Args)]
pub struct InputArgs {
    /// TOML config file. Defaults to `deploy-verify.toml` in the current directory, if present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Deployment trace written by the deploy script. Relative to the current directory; when
    /// unset, the configured or default trace is looked up in the workdir.
    #[arg(long)]
    trace: Option<PathBuf>,
    /// Address map of deployed contracts, grouped by category. Resolved like `--trace`.
    #[arg(long)]
    address_map: Option<PathBuf>,
}

impl InputArgs {
    pub fn load_config(&self) -> eyre::Result<FileConfig> {
        FileConfig::load(self.config.as_deref())
    }

    /// Resolve flags, then config file, then built-in defaults.
    ///
    /// Paths from the config file or the defaults are joined onto `workdir`, which also holds
    /// the temporary argument files.
    pub fn orchestrator_config(
        &self,
        network: &NetworkArgs,
        file: &FileConfig,
        workdir: PathBuf,
    ) -> OrchestratorConfig {
        let trace = self.trace.clone().unwrap_or_else(|| {
            workdir.join(file.trace.as_deref().unwrap_or(Path::new(DEFAULT_TRACE)))
        });
        let address_map = self.address_map.clone().unwrap_or_else(|| {
            workdir.join(
                file.address_map
                    .as_deref()
                    .unwrap_or(Path::new(DEFAULT_ADDRESS_MAP)),
            )
        });
        OrchestratorConfig::builder()
            .trace_path(trace)
            .address_map_path(Some(address_map))
            .network(network.network(file))
            .explorer_url_template(network.explorer_url_template(file))
            .chain_id(network.chain_id.or(file.chain_id).or(Some(DEFAULT_CHAIN_ID)))
            .payload_dir(workdir)
            .build()
    }
}

#[derive(Debug, clap::Args)]
pub struct NetworkArgs {
    /// Network alias passed to the verifier
    #[arg(short, long)]
    network: Option<String>,
    /// Chain id substituted for `{cid}` in the explorer URL template
    #[arg(long)]
    chain_id: Option<u64>,
    /// Explorer base URL, which may contain `{cid}`
    #[arg(long)]
    explorer_url: Option<String>,
}

impl NetworkArgs {
    fn network(&self, file: &FileConfig) -> String {
        self.network
            .clone()
            .or_else(|| file.network.clone())
            .unwrap_or_else(|| DEFAULT_NETWORK.to_owned())
    }

    fn explorer_url_template(&self, file: &FileConfig) -> Option<String> {
        self.explorer_url
            .clone()
            .or_else(|| file.explorer_url_template.clone())
            .or_else(|| Some(DEFAULT_EXPLORER_URL_TEMPLATE.to_owned()))
    }
}

#[derive(Debug, clap::Args)]
pub struct VerifierArgs {
    /// Program run once per contract [default: npx]
    #[arg(long)]
    verifier_program: Option<String>,
    /// Argument passed to the verifier program ahead of the per-contract arguments; repeatable
    /// [default: hardhat verify]
    #[arg(long = "verifier-arg", allow_hyphen_values = true)]
    verifier_args: Vec<String>,
    /// Directory the verifier runs in, usually the hardhat project root. Temporary constructor
    /// argument files are written here, and the default trace and address map are read from here
    #[arg(long)]
    workdir: Option<PathBuf>,
}

impl VerifierArgs {
    /// Absolute working directory for the verifier.
    pub fn workdir(&self, file: &FileConfig) -> io::Result<PathBuf> {
        resolve_workdir(self.workdir.as_deref(), file)
    }

    pub fn verifier(&self, file: &FileConfig, workdir: PathBuf) -> HardhatVerifier {
        let program = self
            .verifier_program
            .clone()
            .or_else(|| file.verifier_program.clone())
            .unwrap_or_else(|| DEFAULT_VERIFIER_PROGRAM.to_owned());
        let args = if self.verifier_args.is_empty() {
            file.verifier_args.clone().unwrap_or_else(|| {
                DEFAULT_VERIFIER_ARGS
                    .iter()
                    .map(|arg| arg.to_string())
                    .collect()
            })
        } else {
            self.verifier_args.clone()
        };
        HardhatVerifier::builder()
            .program(program)
            .args(args)
            .dir(Some(workdir))
            .build()
    }
}

/// `dir`, or the config file's `workdir`, joined onto the current directory.
pub fn resolve_workdir(dir: Option<&Path>, file: &FileConfig) -> io::Result<PathBuf> {
    let cwd = env::current_dir()?;
    Ok(match dir.or(file.workdir.as_deref()) {
        Some(dir) => cwd.join(dir),
        None => cwd,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(trace: Option<&str>) -> InputArgs {
        InputArgs {
            config: None,
            trace: trace.map(PathBuf::from),
            address_map: None,
        }
    }

    fn network() -> NetworkArgs {
        NetworkArgs {
            network: None,
            chain_id: None,
            explorer_url: None,
        }
    }

    #[test]
    fn default_paths_live_in_workdir() {
        let config =
            input(None).orchestrator_config(&network(), &FileConfig::default(), "/project".into());
        assert_eq!(config.trace_path, Path::new("/project").join(DEFAULT_TRACE));
        assert_eq!(
            config.address_map_path,
            Some(Path::new("/project").join(DEFAULT_ADDRESS_MAP))
        );
        assert_eq!(config.payload_dir, Path::new("/project"));
        assert_eq!(config.network, DEFAULT_NETWORK);
        assert_eq!(config.chain_id, Some(DEFAULT_CHAIN_ID));
    }

    #[test]
    fn config_file_paths_live_in_workdir() {
        let file = FileConfig {
            trace: Some("out/run.json".into()),
            ..Default::default()
        };
        let config = input(None).orchestrator_config(&network(), &file, "/project".into());
        assert_eq!(config.trace_path, Path::new("/project/out/run.json"));
    }

    #[test]
    fn trace_flag_is_taken_as_given() {
        let file = FileConfig {
            trace: Some("out/run.json".into()),
            ..Default::default()
        };
        let config = input(Some("run-latest.json")).orchestrator_config(
            &network(),
            &file,
            "/project".into(),
        );
        assert_eq!(config.trace_path, Path::new("run-latest.json"));
    }
}
