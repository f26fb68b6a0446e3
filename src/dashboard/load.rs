//! Fetches what the dashboard views need and assembles them.

use crate::{
    Error,
    config::EngineConfig,
    dashboard::{
        aggregation::{Aggregate, Totals, aggregate},
        breakdown::breakdown,
        view::{DashboardView, ExpenseBreakdownView, dashboard_view, expense_breakdown_view},
    },
    transaction::{Transaction, TransactionKind, normalize},
    transport::Transport,
};

/// Fetch the dashboard snapshot and the categories concurrently and build the
/// dashboard view.
///
/// # Errors
///
/// Returns the first transport error, no partial view is built.
pub async fn load_dashboard<T>(transport: &T, config: &EngineConfig) -> Result<DashboardView, Error>
where
    T: Transport + ?Sized,
{
    let (snapshot, categories) = tokio::try_join!(
        transport.fetch_dashboard_snapshot(),
        transport.fetch_categories(),
    )
    .inspect_err(|error| tracing::error!("could not load the dashboard: {error}"))?;

    Ok(dashboard_view(&snapshot, &categories, config))
}

/// Fetch every expense and the categories concurrently and build the expense
/// breakdown view.
///
/// # Errors
///
/// Returns the first transport error.
pub async fn load_expense_breakdown<T>(
    transport: &T,
    config: &EngineConfig,
) -> Result<ExpenseBreakdownView, Error>
where
    T: Transport + ?Sized,
{
    let (expenses, categories) = tokio::try_join!(
        transport.fetch_transactions(TransactionKind::Expense),
        transport.fetch_categories(),
    )
    .inspect_err(|error| tracing::error!("could not load expenses: {error}"))?;

    let expenses = normalize(&expenses, TransactionKind::Expense, &categories);
    tracing::debug!("breaking down {} expenses", expenses.len());

    Ok(expense_breakdown_view(
        breakdown(&expenses, config.charts.pie_radius),
        config.legend_size,
    ))
}

/// Fetch every income and expense concurrently and total them.
///
/// Unlike [load_dashboard] this computes the totals from the records rather
/// than taking them from a snapshot.
///
/// # Errors
///
/// Returns the first transport error.
pub async fn load_totals<T>(transport: &T, config: &EngineConfig) -> Result<Aggregate, Error>
where
    T: Transport + ?Sized,
{
    let (incomes, expenses) = tokio::try_join!(
        transport.fetch_transactions(TransactionKind::Income),
        transport.fetch_transactions(TransactionKind::Expense),
    )
    .inspect_err(|error| tracing::error!("could not load transactions: {error}"))?;

    let transactions: Vec<Transaction> = normalize(&incomes, TransactionKind::Income, &[])
        .into_iter()
        .chain(normalize(&expenses, TransactionKind::Expense, &[]))
        .collect();
    let totals = Totals::from_transactions(&transactions);

    Ok(aggregate(
        totals.total_income,
        totals.total_expense,
        config.charts.ring_radius,
    ))
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        Error,
        config::EngineConfig,
        dashboard::DashboardSnapshot,
        test_utils::{StubTransport, category, record},
        transaction::TransactionKind,
    };

    use super::{load_dashboard, load_expense_breakdown, load_totals};

    fn transport() -> StubTransport {
        StubTransport::new()
            .with_categories(vec![
                category(1, "Rent", TransactionKind::Expense),
                category(2, "Transport", TransactionKind::Expense),
            ])
            .with_records(
                TransactionKind::Income,
                vec![record(1, 1000.0, date!(2024 - 01 - 01), None)],
            )
            .with_records(
                TransactionKind::Expense,
                vec![
                    record(1, 200.0, date!(2024 - 01 - 02), Some(2)),
                    record(2, 50.0, date!(2024 - 01 - 03), None),
                ],
            )
    }

    #[tokio::test]
    async fn loads_dashboard_from_snapshot() {
        let transport = transport().with_snapshot(DashboardSnapshot {
            total_income: 1000.0,
            total_expense: 250.0,
            total_balance: 750.0,
            recent_transactions: Vec::new(),
        });

        let view = load_dashboard(&transport, &EngineConfig::default())
            .await
            .unwrap();

        assert_eq!(view.aggregate.expense_percentage_of_income, 25.0);
        assert_eq!(view.cards[2].amount_display, "₹750");
    }

    #[tokio::test]
    async fn dashboard_fails_when_categories_fail() {
        let transport = transport().failing_categories(Error::SessionExpired);

        let got = load_dashboard(&transport, &EngineConfig::default()).await;

        assert_eq!(got, Err(Error::SessionExpired));
    }

    #[tokio::test]
    async fn loads_expense_breakdown() {
        let view = load_expense_breakdown(&transport(), &EngineConfig::default())
            .await
            .unwrap();

        assert_eq!(view.breakdown.total, 250.0);
        let names: Vec<&str> = view
            .legend
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();
        assert_eq!(names, vec!["Transport", "Other"]);
        assert_eq!(view.total_display, "₹250");
    }

    #[tokio::test]
    async fn expense_breakdown_fails_when_expenses_fail() {
        let transport = transport().failing(
            TransactionKind::Expense,
            Error::TransportFailure("timeout".to_owned()),
        );

        let got = load_expense_breakdown(&transport, &EngineConfig::default()).await;

        assert!(matches!(got, Err(Error::TransportFailure(_))));
    }

    #[tokio::test]
    async fn totals_are_computed_from_records() {
        let got = load_totals(&transport(), &EngineConfig::default())
            .await
            .unwrap();

        assert_eq!(got.total_income, 1000.0);
        assert_eq!(got.total_expense, 250.0);
        assert_eq!(got.total_balance, 750.0);
        assert_eq!(got.expense_percentage_of_income, 25.0);
    }
}
