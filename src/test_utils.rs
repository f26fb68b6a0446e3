#![allow(missing_docs)]

use std::sync::{Arc, Mutex, PoisonError};

use time::Date;
use tokio::sync::Notify;

use crate::{
    Error,
    category::{Category, CategoryId},
    dashboard::DashboardSnapshot,
    filter::{FilterCriteria, sort_transactions},
    transaction::{RawTransaction, TransactionId, TransactionKind},
    transport::Transport,
};

pub(crate) fn category(id: CategoryId, name: &str, kind: TransactionKind) -> Category {
    Category {
        id,
        name: name.to_owned(),
        kind,
        icon: String::new(),
        color_key: None,
    }
}

pub(crate) fn record(
    id: TransactionId,
    amount: f64,
    date: Date,
    category_id: Option<CategoryId>,
) -> RawTransaction {
    RawTransaction::new(id, &format!("Transaction {id}"), amount, date).category_id(category_id)
}

pub(crate) fn named_record(
    id: TransactionId,
    name: &str,
    amount: f64,
    date: Date,
) -> RawTransaction {
    RawTransaction::new(id, name, amount, date)
}

/// An in-memory transport that can be told to fail or to hold a query until
/// it is released.
#[derive(Debug, Default)]
pub(crate) struct StubTransport {
    categories: Vec<Category>,
    incomes: Vec<RawTransaction>,
    expenses: Vec<RawTransaction>,
    snapshot: DashboardSnapshot,
    failing: Option<(TransactionKind, Error)>,
    failing_categories: Option<Error>,
    gate: Option<(String, Arc<Notify>)>,
    calls: Mutex<Vec<TransactionKind>>,
}

impl StubTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub(crate) fn with_records(mut self, kind: TransactionKind, records: Vec<RawTransaction>) -> Self {
        match kind {
            TransactionKind::Income => self.incomes = records,
            TransactionKind::Expense => self.expenses = records,
        }
        self
    }

    pub(crate) fn with_snapshot(mut self, snapshot: DashboardSnapshot) -> Self {
        self.snapshot = snapshot;
        self
    }

    /// Fail every query for `kind` with `error`.
    pub(crate) fn failing(mut self, kind: TransactionKind, error: Error) -> Self {
        self.failing = Some((kind, error));
        self
    }

    pub(crate) fn failing_categories(mut self, error: Error) -> Self {
        self.failing_categories = Some(error);
        self
    }

    /// Hold filtered queries with exactly `keyword` until `gate` is notified.
    pub(crate) fn gated(mut self, keyword: &str, gate: Arc<Notify>) -> Self {
        self.gate = Some((keyword.to_owned(), gate));
        self
    }

    /// The kinds of the transaction queries received so far, in order.
    pub(crate) fn calls(&self) -> Vec<TransactionKind> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn records(&self, kind: TransactionKind) -> Result<Vec<RawTransaction>, Error> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(kind);

        match &self.failing {
            Some((failing_kind, error)) if *failing_kind == kind => Err(error.clone()),
            _ => Ok(match kind {
                TransactionKind::Income => self.incomes.clone(),
                TransactionKind::Expense => self.expenses.clone(),
            }),
        }
    }
}

#[async_trait::async_trait]
impl Transport for StubTransport {
    async fn fetch_transactions(
        &self,
        kind: TransactionKind,
    ) -> Result<Vec<RawTransaction>, Error> {
        self.records(kind)
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, Error> {
        match &self.failing_categories {
            Some(error) => Err(error.clone()),
            None => Ok(self.categories.clone()),
        }
    }

    async fn fetch_dashboard_snapshot(&self) -> Result<DashboardSnapshot, Error> {
        Ok(self.snapshot.clone())
    }

    async fn fetch_filtered(
        &self,
        kind: TransactionKind,
        criteria: &FilterCriteria,
    ) -> Result<Vec<RawTransaction>, Error> {
        let records = self.records(kind)?;

        if let Some((keyword, gate)) = &self.gate
            && criteria.keyword.as_deref() == Some(keyword.as_str())
        {
            gate.notified().await;
        }

        let mut records: Vec<RawTransaction> = records
            .into_iter()
            .filter(|record| {
                criteria.contains_date(record.date) && criteria.matches_keyword(record.display_name())
            })
            .collect();
        sort_transactions(&mut records, criteria.sort_field, criteria.sort_order);

        Ok(records)
    }
}
