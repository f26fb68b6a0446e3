//! The dashboard and expense breakdown view-models.

use serde::{Deserialize, Serialize};

use crate::{
    category::Category,
    config::EngineConfig,
    currency::format_currency,
    dashboard::{
        aggregation::{Aggregate, aggregate},
        breakdown::CategoryBreakdown,
    },
    transaction::{RawTransaction, TransactionKind, TransactionRow, normalize_record},
};

/// A precomputed summary as delivered by the transport for the dashboard.
///
/// `total_balance` is expected to equal `total_income - total_expense`. It is
/// displayed as delivered and not recomputed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSnapshot {
    /// The sum of all income amounts.
    pub total_income: f64,
    /// The sum of all expense amounts.
    pub total_expense: f64,
    /// Income minus expenses.
    pub total_balance: f64,
    /// The latest transactions, most recent first.
    pub recent_transactions: Vec<SnapshotTransaction>,
}

/// A record in a [DashboardSnapshot]. Unlike per-kind records these carry
/// their own kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotTransaction {
    /// Whether the record is an income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// The record itself.
    #[serde(flatten)]
    pub record: RawTransaction,
}

/// Which figure a stat card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    /// Total income.
    Income,
    /// Total expenses.
    Expenses,
    /// Net balance.
    Balance,
}

/// One of the summary cards at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCard {
    /// Which figure the card shows.
    pub kind: StatKind,
    /// The card heading, e.g. "Total Income".
    pub title: &'static str,
    /// The raw amount.
    pub amount: f64,
    /// The formatted amount, e.g. "₹52,000".
    pub amount_display: String,
}

impl StatCard {
    fn new(kind: StatKind, amount: f64) -> Self {
        let title = match kind {
            StatKind::Income => "Total Income",
            StatKind::Expenses => "Total Expenses",
            StatKind::Balance => "Net Balance",
        };

        Self {
            kind,
            title,
            amount,
            amount_display: format_currency(amount),
        }
    }
}

/// A bar in the income versus expense bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarDatum {
    /// The bar label, "Income" or "Expense".
    pub label: &'static str,
    /// The height of the bar.
    pub value: f64,
    /// The formatted value.
    pub value_display: String,
}

/// Everything needed to render the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// Total income, total expenses and net balance, in that order.
    pub cards: Vec<StatCard>,
    /// The balance, expense percentage and expense ring.
    pub aggregate: Aggregate,
    /// The income and expense bars, in that order.
    pub bars: Vec<BarDatum>,
    /// The latest transactions, most recent first.
    pub recent: Vec<TransactionRow>,
}

/// Build the dashboard view-model from a snapshot.
///
/// Categories of recent transactions are resolved against `categories`.
pub fn dashboard_view(
    snapshot: &DashboardSnapshot,
    categories: &[Category],
    config: &EngineConfig,
) -> DashboardView {
    let aggregate = aggregate(
        snapshot.total_income,
        snapshot.total_expense,
        config.charts.ring_radius,
    );

    let cards = vec![
        StatCard::new(StatKind::Income, snapshot.total_income),
        StatCard::new(StatKind::Expenses, snapshot.total_expense),
        StatCard::new(StatKind::Balance, snapshot.total_balance),
    ];

    let bars = [
        ("Income", snapshot.total_income),
        ("Expense", snapshot.total_expense),
    ]
    .into_iter()
    .map(|(label, value)| BarDatum {
        label,
        value,
        value_display: format_currency(value),
    })
    .collect();

    let limit = config.recent_limit.unwrap_or(usize::MAX);
    let recent = snapshot
        .recent_transactions
        .iter()
        .take(limit)
        .map(|transaction| {
            TransactionRow::from(&normalize_record(
                &transaction.record,
                transaction.kind,
                categories,
            ))
        })
        .collect();

    DashboardView {
        cards,
        aggregate,
        bars,
        recent,
    }
}

/// A legend entry for the expense pie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    /// The category name.
    pub name: String,
    /// The hex colour of the slice.
    pub color: &'static str,
    /// The formatted amount.
    pub amount_display: String,
}

/// The expense pie chart with its total and legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseBreakdownView {
    /// The full breakdown, including every slice.
    pub breakdown: CategoryBreakdown,
    /// The formatted total, shown in the middle of the chart.
    pub total_display: String,
    /// The largest categories.
    pub legend: Vec<LegendEntry>,
}

/// Build the expense breakdown view-model, keeping `legend_size` legend entries.
pub fn expense_breakdown_view(
    breakdown: CategoryBreakdown,
    legend_size: usize,
) -> ExpenseBreakdownView {
    let legend = breakdown
        .legend(legend_size)
        .iter()
        .map(|slice| LegendEntry {
            name: slice.name.clone(),
            color: slice.color.hex(),
            amount_display: format_currency(slice.amount),
        })
        .collect();

    ExpenseBreakdownView {
        total_display: format_currency(breakdown.total),
        breakdown,
        legend,
    }
}
