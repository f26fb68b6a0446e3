//! Display rows for transaction lists (recent activity, search results).

use serde::Serialize;
use time::{Date, macros::format_description};

use crate::currency::format_signed;

use super::core::{Transaction, TransactionKind};

/// A transaction rendered as a list row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRow {
    /// Unique across both kinds, e.g. `"expense-4"`.
    pub key: String,
    /// Whether the row is an income or an expense.
    pub kind: TransactionKind,
    /// The category icon, or the fallback icon.
    pub icon: String,
    /// The transaction description.
    pub name: String,
    /// The category name, or the fallback name.
    pub category_name: String,
    /// When the transaction happened.
    pub date: Date,
    /// The date formatted as `DD/MM/YYYY`.
    pub date_display: String,
    /// The amount with a `+` for income or `-` for expenses, e.g. `-₹1,200`.
    pub amount_display: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(transaction: &Transaction) -> Self {
        let date_format = format_description!("[day]/[month]/[year]");

        Self {
            key: transaction.key(),
            kind: transaction.kind,
            icon: transaction.category.icon().to_owned(),
            name: transaction.name.clone(),
            category_name: transaction.category.name().to_owned(),
            date: transaction.date,
            date_display: transaction
                .date
                .format(&date_format)
                .unwrap_or_else(|_| transaction.date.to_string()),
            amount_display: format_signed(transaction.amount, transaction.kind),
        }
    }
}

/// Render each transaction as a row, keeping their order.
pub fn transaction_rows(transactions: &[Transaction]) -> Vec<TransactionRow> {
    transactions.iter().map(TransactionRow::from).collect()
}
