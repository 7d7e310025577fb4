// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Build verification jobs from classified records.
//!
//! Everything here is pure; temporary argument files belong to the
//! [driver](super::driver).

use serde_json::Value;

use super::classify::{Classified, ClassifiedRecord, ContractClass};

/// Fully-qualified source identifier of the proxy contract, so the explorer compiles the right
/// source for generic proxy bytecode.
pub const PROXY_CONTRACT_FQN: &str =
    "@openzeppelin/contracts/proxy/ERC1967/ERC1967Proxy.sol:ERC1967Proxy";

#[derive(Clone, Debug, PartialEq)]
pub struct VerificationJob {
    /// Used for reporting only.
    pub contract_name: String,
    pub address: String,
    pub network: String,
    pub constructor_args: Vec<Value>,
    pub contract_identifier: Option<String>,
}

impl VerificationJob {
    pub fn implementation(
        contract_name: impl Into<String>,
        address: impl Into<String>,
        network: impl Into<String>,
        constructor_args: Vec<Value>,
    ) -> Self {
        Self {
            contract_name: contract_name.into(),
            address: address.into(),
            network: network.into(),
            constructor_args,
            contract_identifier: None,
        }
    }

    pub fn proxy(
        contract_name: impl Into<String>,
        address: impl Into<String>,
        network: impl Into<String>,
        constructor_args: Vec<Value>,
    ) -> Self {
        Self {
            contract_identifier: Some(PROXY_CONTRACT_FQN.to_owned()),
            ..Self::implementation(contract_name, address, network, constructor_args)
        }
    }
}

pub fn build_job(record: &ClassifiedRecord<'_>, network: &str) -> VerificationJob {
    let args = record.arguments.to_vec();
    match record.class {
        ContractClass::Implementation => {
            VerificationJob::implementation(record.name, record.address, network, args)
        }
        ContractClass::Proxy => VerificationJob::proxy(record.name, record.address, network, args),
    }
}

/// Jobs for every classified record, implementations before proxies.
pub fn build_jobs(classified: &Classified<'_>, network: &str) -> Vec<VerificationJob> {
    classified
        .in_verification_order()
        .map(|record| build_job(record, network))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{classify::classify, trace::parse_trace};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn implementation_keeps_arguments_without_identifier() {
        let records = parse_trace(
            r#"{"transactions": [{
                "transactionType": "CREATE",
                "contractName": "MockERC20",
                "contractAddress": "0xAAA",
                "arguments": ["USD Coin", "USDC", 6]
            }]}"#,
        )
        .unwrap();
        let jobs = build_jobs(&classify(&records), "kadena_chain20");
        assert_eq!(
            jobs,
            vec![VerificationJob {
                contract_name: "MockERC20".to_owned(),
                address: "0xAAA".to_owned(),
                network: "kadena_chain20".to_owned(),
                constructor_args: vec![json!("USD Coin"), json!("USDC"), json!(6)],
                contract_identifier: None,
            }]
        );
    }

    #[test]
    fn proxy_gets_canonical_identifier() {
        let records = parse_trace(
            r#"{"transactions": [{
                "transactionType": "CREATE",
                "contractName": "ERC1967Proxy",
                "contractAddress": "0xBBB",
                "arguments": ["0xIMPL", "0x"]
            }]}"#,
        )
        .unwrap();
        let jobs = build_jobs(&classify(&records), "kadena_chain20");
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].address, "0xBBB");
        assert_eq!(jobs[0].constructor_args, [json!("0xIMPL"), json!("0x")]);
        assert_eq!(
            jobs[0].contract_identifier.as_deref(),
            Some(PROXY_CONTRACT_FQN)
        );
    }

    #[test]
    fn arguments_are_copied_verbatim() {
        let args = vec![
            json!({"nested": [1, 2]}),
            json!(true),
            json!("0x"),
            json!(null),
        ];
        let record = ClassifiedRecord {
            class: ContractClass::Implementation,
            name: "Engine",
            address: "0x01",
            arguments: &args,
        };
        assert_eq!(build_job(&record, "net").constructor_args, args);
    }

    #[test]
    fn implementations_precede_proxies() {
        let records = parse_trace(
            r#"{"transactions": [
                {"transactionType": "CREATE", "contractName": "ERC1967Proxy", "contractAddress": "0x02"},
                {"transactionType": "CREATE", "contractName": "Vault", "contractAddress": "0x01"}
            ]}"#,
        )
        .unwrap();
        let jobs = build_jobs(&classify(&records), "net");
        let addresses: Vec<_> = jobs.iter().map(|j| j.address.as_str()).collect();
        assert_eq!(addresses, ["0x01", "0x02"]);
        assert!(jobs[0].contract_identifier.is_none());
        assert!(jobs[1].contract_identifier.is_some());
    }
}
