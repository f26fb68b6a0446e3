//! Stamps raw per-kind records with their kind and resolved category.

use crate::category::{self, Category};

use super::core::{RawTransaction, Transaction, TransactionKind};

/// Convert records fetched from a per-kind endpoint into [Transaction]s.
///
/// Every record is stamped with `kind` and its category is resolved against
/// `categories`. The output has the same length and order as `records`, a
/// record whose category cannot be resolved gets the fallback category instead
/// of being dropped.
pub fn normalize(
    records: &[RawTransaction],
    kind: TransactionKind,
    categories: &[Category],
) -> Vec<Transaction> {
    records
        .iter()
        .map(|record| normalize_record(record, kind, categories))
        .collect()
}

/// Convert a single record into a [Transaction] of `kind`.
pub fn normalize_record(
    record: &RawTransaction,
    kind: TransactionKind,
    categories: &[Category],
) -> Transaction {
    Transaction {
        id: record.id,
        kind,
        name: record.display_name().to_owned(),
        amount: record.amount,
        date: record.date,
        category_id: record.category_id,
        category: category::resolve(categories, record.category_id),
    }
}
