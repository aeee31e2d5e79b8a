//! Reduction of one borrower's history into a current-state summary.

use super::AccountSummary;
use crate::domain::{Address, Decimal, OperationKind, VaultOperation, VaultStatus};

/// Sort a history ascending by block number, with log index as the
/// secondary key when the node reported one. The sort is stable, so entries
/// with equal keys keep their arrival order.
pub fn sort_history(history: &mut [VaultOperation]) {
    history.sort_by_key(|op| (op.block_number, op.log_index));
}

/// Reduce a borrower's history to its current-state summary.
///
/// Status is a counting heuristic: the vault counts as closed when close
/// operations are at least as numerous as open operations. A history with
/// neither opens nor closes therefore counts as closed and reports zero
/// current amounts, even if it contains adjusts.
///
/// Pure and total: never fails, and aggregating twice yields the same
/// summary.
pub fn aggregate(borrower: Address, mut history: Vec<VaultOperation>) -> AccountSummary {
    sort_history(&mut history);

    let open_count = history
        .iter()
        .filter(|op| op.operation == OperationKind::Open)
        .count();
    let close_count = history
        .iter()
        .filter(|op| op.operation == OperationKind::Close)
        .count();

    let status = if close_count >= open_count {
        VaultStatus::Closed
    } else {
        VaultStatus::Open
    };

    let first_open = history
        .iter()
        .find(|op| op.operation == OperationKind::Open);
    let last_adjust = history
        .iter()
        .rev()
        .find(|op| op.operation == OperationKind::Adjust);

    // Closed zeroes the current amounts unconditionally, even when an
    // adjust lands after the last close.
    let (current_debt, current_coll) = match status {
        VaultStatus::Closed => (Decimal::zero(), Decimal::zero()),
        VaultStatus::Open => match (last_adjust, first_open) {
            (Some(adjust), _) => (adjust.debt, adjust.coll),
            (None, Some(open)) => (open.debt, open.coll),
            (None, None) => (Decimal::zero(), Decimal::zero()),
        },
    };

    let (open_debt, open_coll) = first_open
        .map(|op| (op.debt, op.coll))
        .unwrap_or((Decimal::zero(), Decimal::zero()));

    AccountSummary {
        borrower,
        status,
        current_debt,
        current_coll,
        open_debt,
        open_coll,
        history,
    }
}
