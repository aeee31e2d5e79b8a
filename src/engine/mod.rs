//! Pure aggregation engine for vault lifecycle histories.

use crate::domain::{Address, Decimal, VaultOperation, VaultStatus};

pub mod aggregator;
pub mod history;

pub use aggregator::{aggregate, sort_history};
pub use history::build_histories;

/// Current-state summary of one borrower's vault, plus the ordered history
/// that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub borrower: Address,
    pub status: VaultStatus,
    pub current_debt: Decimal,
    pub current_coll: Decimal,
    /// Debt at the first open, independent of current status.
    pub open_debt: Decimal,
    /// Collateral at the first open, independent of current status.
    pub open_coll: Decimal,
    /// The sorted history, exactly as aggregated: nothing added or dropped.
    pub history: Vec<VaultOperation>,
}
