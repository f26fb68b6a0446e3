//! Splits a search into per-kind transport queries and merges the results.

use crate::{
    Error,
    category::Category,
    filter::criteria::{FilterCriteria, KindFilter, SortField, SortOrder, sort_transactions},
    transaction::{RawTransaction, Transaction, TransactionKind, normalize},
    transport::Transport,
};

/// A query against a single kind of transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct SubQuery {
    /// The kind of transaction to query.
    pub kind: TransactionKind,
    /// The criteria scoped to `kind`.
    pub criteria: FilterCriteria,
}

impl SubQuery {
    fn new(kind: TransactionKind, criteria: &FilterCriteria) -> Self {
        Self {
            kind,
            criteria: criteria.scoped_to(kind),
        }
    }
}

/// How a search is carried out against the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryPlan {
    /// One query whose results are used as delivered.
    Single(SubQuery),
    /// One query per kind, issued concurrently and then merged.
    #[allow(missing_docs)]
    Joined { income: SubQuery, expense: SubQuery },
}

/// Build the plan for `criteria`.
///
/// Blank keywords are dropped before planning, so an empty keyword never
/// filters anything out.
pub fn plan(criteria: &FilterCriteria) -> QueryPlan {
    let criteria = criteria.normalized();

    match criteria.kind_filter {
        KindFilter::Income => QueryPlan::Single(SubQuery::new(TransactionKind::Income, &criteria)),
        KindFilter::Expense => {
            QueryPlan::Single(SubQuery::new(TransactionKind::Expense, &criteria))
        }
        KindFilter::All => QueryPlan::Joined {
            income: SubQuery::new(TransactionKind::Income, &criteria),
            expense: SubQuery::new(TransactionKind::Expense, &criteria),
        },
    }
}

/// The records returned for one [SubQuery].
#[derive(Debug, Clone, PartialEq)]
pub struct SubResult {
    /// The kind the records were queried as.
    pub kind: TransactionKind,
    /// The records as delivered by the transport.
    pub records: Vec<RawTransaction>,
}

/// Normalize and concatenate sub-results, then sort them by date in
/// `sort_order`.
///
/// Each sub-result is ordered independently by the transport, so the merged
/// list is always re-sorted by date. The sort is stable, so records on the same
/// date keep the order they were concatenated in.
pub fn merge(
    results: Vec<SubResult>,
    sort_order: SortOrder,
    categories: &[Category],
) -> Vec<Transaction> {
    let mut merged: Vec<Transaction> = results
        .iter()
        .flat_map(|result| normalize(&result.records, result.kind, categories))
        .collect();

    sort_transactions(&mut merged, SortField::Date, sort_order);

    merged
}

/// Run a search through `transport`.
///
/// A single-kind search is returned in the order the transport delivered it.
/// A search over both kinds issues both queries concurrently and fails as soon
/// as either fails, no partial results are returned.
///
/// # Errors
///
/// Returns the first error reported by the transport.
pub async fn search<T>(
    transport: &T,
    criteria: &FilterCriteria,
    categories: &[Category],
) -> Result<Vec<Transaction>, Error>
where
    T: Transport + ?Sized,
{
    match plan(criteria) {
        QueryPlan::Single(query) => {
            tracing::debug!("searching {} transactions", query.kind);

            let records = transport
                .fetch_filtered(query.kind, &query.criteria)
                .await
                .inspect_err(|error| {
                    tracing::error!("could not search {} transactions: {error}", query.kind)
                })?;

            Ok(normalize(&records, query.kind, categories))
        }
        QueryPlan::Joined { income, expense } => {
            tracing::debug!("searching income and expense transactions");

            let (incomes, expenses) = tokio::try_join!(
                transport.fetch_filtered(income.kind, &income.criteria),
                transport.fetch_filtered(expense.kind, &expense.criteria),
            )
            .inspect_err(|error| tracing::error!("could not search transactions: {error}"))?;

            Ok(merge(
                vec![
                    SubResult {
                        kind: income.kind,
                        records: incomes,
                    },
                    SubResult {
                        kind: expense.kind,
                        records: expenses,
                    },
                ],
                criteria.sort_order,
                categories,
            ))
        }
    }
}
