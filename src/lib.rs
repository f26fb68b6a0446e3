//! Money Manager is a personal finance engine.
//!
//! This library turns income and expense records fetched from a backing
//! service into a dashboard summary, an expense breakdown by category and a
//! filterable, sortable transaction search. The backing service is reached
//! through the [Transport] trait, with [FixtureTransport] serving records from
//! a JSON data file.

#![warn(missing_docs)]

mod category;
mod config;
mod currency;
mod dashboard;
mod error;
mod filter;
mod logging;
mod transaction;
mod transport;

#[cfg(test)]
mod test_utils;

pub use category::{
    Category, CategoryId, ColorKey, ResolvedCategory, UNCATEGORIZED_LABEL, UNKNOWN_CATEGORY_ICON,
    UNKNOWN_CATEGORY_NAME, categories_of_kind, resolve,
};
pub use config::{ChartConfig, DEFAULT_CHART_RADIUS, DEFAULT_LEGEND_SIZE, EngineConfig};
pub use currency::{CURRENCY_SYMBOL, format_currency, format_signed};
pub use dashboard::{
    Aggregate, BarDatum, CategoryBreakdown, CategorySlice, DashboardSnapshot, DashboardView,
    ExpenseBreakdownView, LegendEntry, PieSegment, RingGeometry, SnapshotTransaction, StatCard,
    StatKind, Totals, aggregate, breakdown, circumference, dashboard_view,
    expense_breakdown_view, expense_percentage_of_income, load_dashboard, load_expense_breakdown,
    load_totals, pie_segments,
};
pub use error::Error;
pub use filter::{
    FilterCriteria, KindFilter, QueryPlan, SearchOutcome, SearchSession, SearchState,
    SearchTicket, SortField, SortOrder, SubQuery, SubResult, merge, parse_date, plan, search,
};
pub use logging::setup_logging;
pub use transaction::{
    RawTransaction, Transaction, TransactionId, TransactionKind, TransactionRow, normalize,
    normalize_record, transaction_rows,
};
pub use transport::{FixtureData, FixtureTransport, Transport};
