//! Income and expense totals and the derived dashboard figures.

use serde::Serialize;

use crate::{
    dashboard::geometry::RingGeometry,
    transaction::{Transaction, TransactionKind},
};

/// Total income and total expenses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Totals {
    /// The sum of all income amounts.
    pub total_income: f64,
    /// The sum of all expense amounts.
    pub total_expense: f64,
}

impl Totals {
    /// Sum `transactions` into income and expense totals by their kind.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        transactions
            .iter()
            .fold(Self::default(), |mut totals, transaction| {
                match transaction.kind {
                    TransactionKind::Income => totals.total_income += transaction.amount,
                    TransactionKind::Expense => totals.total_expense += transaction.amount,
                }
                totals
            })
    }

    /// Income minus expenses.
    pub fn balance(&self) -> f64 {
        self.total_income - self.total_expense
    }
}

/// The figures derived from a pair of totals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aggregate {
    /// The sum of all income amounts.
    pub total_income: f64,
    /// The sum of all expense amounts.
    pub total_expense: f64,
    /// Income minus expenses, may be negative.
    pub total_balance: f64,
    /// Expenses as a percentage of income, zero when there is no income.
    pub expense_percentage_of_income: f64,
    /// The expense ring, filled to `expense_percentage_of_income`.
    pub ring: RingGeometry,
}

/// Calculate the balance, the expense to income percentage and the expense
/// ring for a ring of `ring_radius`.
pub fn aggregate(total_income: f64, total_expense: f64, ring_radius: f64) -> Aggregate {
    let expense_percentage_of_income = expense_percentage_of_income(total_income, total_expense);

    Aggregate {
        total_income,
        total_expense,
        total_balance: total_income - total_expense,
        expense_percentage_of_income,
        ring: RingGeometry::new(ring_radius, expense_percentage_of_income),
    }
}

/// Calculate `total_expense` as a percentage of `total_income`.
///
/// Returns zero rather than infinity or NaN when there is no income.
pub fn expense_percentage_of_income(total_income: f64, total_expense: f64) -> f64 {
    if total_income > 0.0 {
        (total_expense / total_income) * 100.0
    } else {
        0.0
    }
}
