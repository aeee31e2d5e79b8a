//! Grouping of decoded events into per-borrower histories.

use crate::decoder::DecodedEvent;
use crate::domain::{Address, Decimal, VaultOperation};
use std::collections::BTreeMap;

/// Group decoded events by borrower, converting raw fixed-point amounts
/// into whole units.
///
/// Arrival order is preserved within each group and duplicates are kept
/// as-is. The BTreeMap keys give a deterministic per-borrower iteration
/// order regardless of arrival order.
pub fn build_histories(events: Vec<DecodedEvent>) -> BTreeMap<Address, Vec<VaultOperation>> {
    let mut histories: BTreeMap<Address, Vec<VaultOperation>> = BTreeMap::new();

    for event in events {
        let operation = VaultOperation {
            borrower: event.borrower.clone(),
            operation: event.operation,
            debt: Decimal::from_fixed_point(event.debt_raw),
            coll: Decimal::from_fixed_point(event.coll_raw),
            block_number: event.block_number,
            log_index: event.log_index,
            transaction_hash: event.transaction_hash,
        };
        histories.entry(event.borrower).or_default().push(operation);
    }

    histories
}
