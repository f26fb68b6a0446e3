//! Transactions and their normalization.
//!
//! This module contains:
//! - The raw per-kind record as delivered by the transport and the normalized `Transaction`
//! - The normalizer that stamps kinds and resolves categories
//! - Display rows for transaction lists

mod core;
mod normalize;
mod row;

pub use self::core::{RawTransaction, Transaction, TransactionId, TransactionKind};
pub use normalize::{normalize, normalize_record};
pub use row::{TransactionRow, transaction_rows};
