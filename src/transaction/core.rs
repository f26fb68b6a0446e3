//! Defines the core data models for transactions.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::category::{CategoryId, ResolvedCategory};

/// Identifier for a transaction, unique within its kind.
pub type TransactionId = i64;

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money earned.
    Income,
    /// Money spent.
    Expense,
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
        }
    }
}

/// A transaction record as delivered by a per-kind transport endpoint.
///
/// The record does not say whether it is an income or an expense, that is
/// implied by the endpoint it was fetched from. Use
/// [normalize](crate::transaction::normalize) to stamp the kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// A text description of the transaction.
    ///
    /// Income records may name themselves with `incomeSource` instead.
    #[serde(default)]
    pub name: Option<String>,
    /// The legacy name field used by income records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income_source: Option<String>,
    /// The amount of money spent or earned, never negative.
    pub amount: f64,
    /// When the transaction happened.
    pub date: Date,
    /// The ID of the category the transaction belongs to.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
}

impl RawTransaction {
    /// Create a raw record with the given name and no category.
    pub fn new(id: TransactionId, name: &str, amount: f64, date: Date) -> Self {
        Self {
            id,
            name: Some(name.to_owned()),
            income_source: None,
            amount,
            date,
            category_id: None,
        }
    }

    /// Set the category ID for the record.
    pub fn category_id(mut self, category_id: Option<CategoryId>) -> Self {
        self.category_id = category_id;
        self
    }

    /// The display name of the record: `name` when present and non-empty,
    /// otherwise `incomeSource`, otherwise an empty string.
    pub fn display_name(&self) -> &str {
        [&self.name, &self.income_source]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|name| !name.is_empty())
            .unwrap_or_default()
    }
}

/// An expense or income with its kind and resolved category attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// Whether this is an income or an expense.
    pub kind: TransactionKind,
    /// A text description of what the transaction was for.
    pub name: String,
    /// The amount of money spent or earned, never negative.
    pub amount: f64,
    /// When the transaction happened.
    pub date: Date,
    /// The ID of the category the record referenced, if any.
    pub category_id: Option<CategoryId>,
    /// The display attributes of the category, or the fallback.
    pub category: ResolvedCategory,
}

impl Transaction {
    /// A key that is unique across both kinds, e.g. `"income-3"`.
    pub fn key(&self) -> String {
        format!("{}-{}", self.kind, self.id)
    }
}
