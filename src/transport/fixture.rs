//! A transport backed by a JSON data file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    category::Category,
    dashboard::{DashboardSnapshot, SnapshotTransaction},
    filter::{FilterCriteria, sort_transactions},
    transaction::{RawTransaction, TransactionKind},
};

use super::Transport;

/// How many records a derived dashboard snapshot lists as recent.
const RECENT_TRANSACTION_COUNT: usize = 5;

/// The contents of a data file.
///
/// ```json
/// {
///   "categories": [{"id": 1, "name": "Rent", "type": "expense", "icon": "🏠"}],
///   "incomes": [{"id": 1, "name": "Salary", "amount": 52000, "date": "2024-01-05", "categoryId": 2}],
///   "expenses": [{"id": 1, "name": "January rent", "amount": 12000, "date": "2024-01-01", "categoryId": 1}]
/// }
/// ```
///
/// `dashboard` is optional, when it is missing the snapshot is derived from
/// the records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureData {
    /// Categories of both kinds.
    pub categories: Vec<Category>,
    /// Income records.
    pub incomes: Vec<RawTransaction>,
    /// Expense records.
    pub expenses: Vec<RawTransaction>,
    /// A precomputed dashboard snapshot.
    pub dashboard: Option<DashboardSnapshot>,
}

/// Serves [FixtureData] through the [Transport] port.
#[derive(Debug, Clone)]
pub struct FixtureTransport {
    data: FixtureData,
}

impl FixtureTransport {
    /// Create a transport that serves `data`.
    pub fn new(data: FixtureData) -> Self {
        Self { data }
    }

    /// Parse a data file's contents.
    ///
    /// # Errors
    ///
    /// Returns an [Error::InvalidDataFile] if `json` is not valid data file JSON.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json)
            .map(Self::new)
            .map_err(|error| Error::InvalidDataFile(error.to_string()))
    }

    /// Read and parse the data file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an [Error::InvalidDataFile] if the file cannot be read or parsed.
    pub async fn load(path: &Path) -> Result<Self, Error> {
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|error| Error::InvalidDataFile(format!("{}: {error}", path.display())))?;

        tracing::debug!("loaded data file {}", path.display());

        Self::from_json(&json)
    }

    fn records(&self, kind: TransactionKind) -> &[RawTransaction] {
        match kind {
            TransactionKind::Income => &self.data.incomes,
            TransactionKind::Expense => &self.data.expenses,
        }
    }

    fn derive_snapshot(&self) -> DashboardSnapshot {
        let total_income: f64 = self.data.incomes.iter().map(|record| record.amount).sum();
        let total_expense: f64 = self.data.expenses.iter().map(|record| record.amount).sum();

        let mut recent: Vec<SnapshotTransaction> = [TransactionKind::Income, TransactionKind::Expense]
            .into_iter()
            .flat_map(|kind| {
                self.records(kind)
                    .iter()
                    .map(move |record| SnapshotTransaction {
                        kind,
                        record: record.clone(),
                    })
            })
            .collect();
        // Stable, so records on the same day keep income before expense.
        recent.sort_by(|a, b| b.record.date.cmp(&a.record.date));
        recent.truncate(RECENT_TRANSACTION_COUNT);

        DashboardSnapshot {
            total_income,
            total_expense,
            total_balance: total_income - total_expense,
            recent_transactions: recent,
        }
    }
}

#[async_trait::async_trait]
impl Transport for FixtureTransport {
    async fn fetch_transactions(
        &self,
        kind: TransactionKind,
    ) -> Result<Vec<RawTransaction>, Error> {
        Ok(self.records(kind).to_vec())
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, Error> {
        Ok(self.data.categories.clone())
    }

    async fn fetch_dashboard_snapshot(&self) -> Result<DashboardSnapshot, Error> {
        Ok(self
            .data
            .dashboard
            .clone()
            .unwrap_or_else(|| self.derive_snapshot()))
    }

    async fn fetch_filtered(
        &self,
        kind: TransactionKind,
        criteria: &FilterCriteria,
    ) -> Result<Vec<RawTransaction>, Error> {
        let mut records: Vec<RawTransaction> = self
            .records(kind)
            .iter()
            .filter(|record| {
                criteria.contains_date(record.date) && criteria.matches_keyword(record.display_name())
            })
            .cloned()
            .collect();

        sort_transactions(&mut records, criteria.sort_field, criteria.sort_order);

        Ok(records)
    }
}
