//! Vault operation records decoded from on-chain events.

use crate::domain::{Address, Decimal};
use serde::{Deserialize, Serialize};

/// Kind of vault lifecycle operation.
///
/// Wire codes: Open = 0, Close = 1, Adjust = 2. Any other code fails
/// decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Open,
    Close,
    Adjust,
}

impl OperationKind {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(OperationKind::Open),
            1 => Some(OperationKind::Close),
            2 => Some(OperationKind::Adjust),
            _ => None,
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationKind::Open => write!(f, "open"),
            OperationKind::Close => write!(f, "close"),
            OperationKind::Adjust => write!(f, "adjust"),
        }
    }
}

/// One decoded vault operation for a single borrower. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultOperation {
    /// Borrower address owning the vault.
    pub borrower: Address,
    pub operation: OperationKind,
    /// Debt amount in whole units.
    pub debt: Decimal,
    /// Collateral amount in whole units.
    pub coll: Decimal,
    /// Block the event was emitted in.
    pub block_number: u64,
    /// Position of the log within its block, when the node reports one.
    /// Secondary ordering key; not part of the response payload.
    pub log_index: Option<u64>,
    pub transaction_hash: String,
}

/// Whether a vault is currently open or closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VaultStatus {
    #[serde(rename = "open")]
    Open,
    #[serde(rename = "close")]
    Closed,
}

impl std::fmt::Display for VaultStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VaultStatus::Open => write!(f, "open"),
            VaultStatus::Closed => write!(f, "close"),
        }
    }
}
