//! Domain types for vault lifecycle records.
//!
//! This module provides:
//! - Lossless numeric handling via the Decimal wrapper
//! - The Address primitive
//! - VaultOperation and VaultStatus with canonical JSON serialization

pub mod decimal;
pub mod operation;
pub mod primitives;

pub use decimal::Decimal;
pub use operation::{OperationKind, VaultOperation, VaultStatus};
pub use primitives::Address;
