// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Reading deployment traces.
//!
//! A trace is the broadcast record written by a deployment script run (e.g. foundry's
//! `run-latest.json`): an ordered list of the transactions the script sent.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransactionType {
    Create,
    Create2,
    Call,
    Other,
}

impl TransactionType {
    fn from_value(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("CREATE") => Self::Create,
            Some("CREATE2") => Self::Create2,
            Some("CALL") => Self::Call,
            _ => Self::Other,
        }
    }
}

/// One transaction from a deployment trace.
#[derive(Clone, Debug, PartialEq)]
pub struct DeploymentRecord {
    pub transaction_type: TransactionType,
    pub contract_name: Option<String>,
    pub contract_address: Option<String>,
    pub arguments: Vec<Value>,
}

impl DeploymentRecord {
    /// Contract name, if present and non-empty.
    pub fn name(&self) -> Option<&str> {
        non_empty(self.contract_name.as_deref())
    }

    /// Created contract address, if present and non-empty.
    pub fn address(&self) -> Option<&str> {
        non_empty(self.contract_address.as_deref())
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TraceTransaction {
    #[serde(default)]
    transaction_type: Option<Value>,
    #[serde(default)]
    contract_name: Option<String>,
    #[serde(default)]
    contract_address: Option<String>,
    #[serde(default)]
    arguments: Option<Vec<Value>>,
}

impl From<TraceTransaction> for DeploymentRecord {
    fn from(tx: TraceTransaction) -> Self {
        Self {
            transaction_type: TransactionType::from_value(tx.transaction_type.as_ref()),
            contract_name: tx.contract_name.filter(|s| !s.is_empty()),
            contract_address: tx.contract_address.filter(|s| !s.is_empty()),
            arguments: tx.arguments.unwrap_or_default(),
        }
    }
}

/// Parse a trace document into its ordered records.
///
/// The document and every transaction must be JSON objects. A missing or `null`
/// `transactions` list is an empty trace.
pub fn parse_trace(text: &str) -> Result<Vec<DeploymentRecord>, serde_json::Error> {
    let document: Value = serde_json::from_str(text)?;
    let Value::Object(mut document) = document else {
        return Err(malformed("trace document is not an object"));
    };
    let transactions = match document.remove("transactions") {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(transactions)) => transactions,
        Some(_) => return Err(malformed("`transactions` is not an array")),
    };
    transactions
        .into_iter()
        .enumerate()
        .map(|(i, tx)| {
            if !tx.is_object() {
                return Err(malformed(format!("transaction {i} is not an object")));
            }
            serde_json::from_value::<TraceTransaction>(tx).map(DeploymentRecord::from)
        })
        .collect()
}

fn malformed(msg: impl std::fmt::Display) -> serde_json::Error {
    <serde_json::Error as serde::de::Error>::custom(msg)
}

/// Load the trace at `path`.
///
/// A missing file and an unparsable document are both fatal: a corrupt trace cannot be
/// reconciled against anything.
pub fn read_trace(path: impl AsRef<Path>) -> Result<Vec<DeploymentRecord>, TraceError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(TraceError::NotFound {
            path: path.to_owned(),
        });
    }
    let text = fs::read_to_string(path).map_err(|source| TraceError::Io {
        path: path.to_owned(),
        source,
    })?;
    let records = parse_trace(&text).map_err(|source| TraceError::Malformed {
        path: path.to_owned(),
        source,
    })?;
    debug!(@grey, "read {} transactions from {}", records.len(), path.display());
    Ok(records)
}

#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error("deployment trace not found: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read deployment trace {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("malformed deployment trace {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}
