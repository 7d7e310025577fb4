// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Partition trace records into implementation and proxy contracts.

use serde_json::Value;

use super::trace::{DeploymentRecord, TransactionType};

/// Contract name every proxy in a deployment is created under.
pub const PROXY_CONTRACT_NAME: &str = "ERC1967Proxy";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContractClass {
    Implementation,
    Proxy,
}

/// A record that passed classification; name and address are guaranteed present.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClassifiedRecord<'a> {
    pub class: ContractClass,
    pub name: &'a str,
    pub address: &'a str,
    pub arguments: &'a [Value],
}

#[derive(Debug, Default, PartialEq)]
pub struct Classified<'a> {
    pub implementations: Vec<ClassifiedRecord<'a>>,
    pub proxies: Vec<ClassifiedRecord<'a>>,
}

impl<'a> Classified<'a> {
    /// Implementations first, then proxies, each in trace order.
    pub fn in_verification_order(&self) -> impl Iterator<Item = &ClassifiedRecord<'a>> + '_ {
        self.implementations.iter().chain(&self.proxies)
    }
}

/// Classify a single record, or `None` if it is not a named `CREATE` with an address.
pub fn classify_record(record: &DeploymentRecord) -> Option<ClassifiedRecord<'_>> {
    if record.transaction_type != TransactionType::Create {
        return None;
    }
    let address = record.address()?;
    let name = record.name()?;
    let class = if name == PROXY_CONTRACT_NAME {
        ContractClass::Proxy
    } else {
        ContractClass::Implementation
    };
    Some(ClassifiedRecord {
        class,
        name,
        address,
        arguments: &record.arguments,
    })
}

pub fn classify(records: &[DeploymentRecord]) -> Classified<'_> {
    let mut classified = Classified::default();
    for record in records.iter().filter_map(classify_record) {
        match record.class {
            ContractClass::Implementation => classified.implementations.push(record),
            ContractClass::Proxy => classified.proxies.push(record),
        }
    }
    classified
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(ty: TransactionType, name: Option<&str>, address: Option<&str>) -> DeploymentRecord {
        DeploymentRecord {
            transaction_type: ty,
            contract_name: name.map(str::to_owned),
            contract_address: address.map(str::to_owned),
            arguments: vec![],
        }
    }

    #[test]
    fn partitions_in_trace_order() {
        use TransactionType::*;
        let records = vec![
            record(Create, Some("Vault"), Some("0x01")),
            record(Create, Some(PROXY_CONTRACT_NAME), Some("0x02")),
            record(Call, Some("Vault"), Some("0x01")),
            record(Create, Some("Engine"), Some("0x03")),
            record(Create, Some(PROXY_CONTRACT_NAME), Some("0x04")),
            record(Create, Some("OracleRouter"), Some("0x05")),
        ];
        let classified = classify(&records);
        let addresses = |records: &[ClassifiedRecord]| -> Vec<String> {
            records.iter().map(|r| r.address.to_owned()).collect()
        };
        assert_eq!(
            addresses(&classified.implementations),
            ["0x01", "0x03", "0x05"]
        );
        assert_eq!(addresses(&classified.proxies), ["0x02", "0x04"]);
        assert!(classified
            .proxies
            .iter()
            .all(|r| r.class == ContractClass::Proxy));

        let order: Vec<_> = classified
            .in_verification_order()
            .map(|r| r.address)
            .collect();
        assert_eq!(order, ["0x01", "0x03", "0x05", "0x02", "0x04"]);
    }

    #[test]
    fn discards_unverifiable_records() {
        use TransactionType::*;
        let records = vec![
            record(Create2, Some("Factory"), Some("0x01")),
            record(Call, None, Some("0x02")),
            record(Other, Some("Vault"), Some("0x03")),
            record(Create, Some("Vault"), None),
            record(Create, None, Some("0x04")),
            record(Create, Some(""), Some("0x05")),
            record(Create, Some("Vault"), Some("")),
        ];
        assert_eq!(classify(&records), Classified::default());
    }

    #[test]
    fn proxy_match_is_exact() {
        let records = vec![record(
            TransactionType::Create,
            Some("ERC1967ProxyFactory"),
            Some("0x01"),
        )];
        let classified = classify(&records);
        assert_eq!(classified.implementations.len(), 1);
        assert!(classified.proxies.is_empty());
    }
}
