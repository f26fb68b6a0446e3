//! Groups expenses by category for the expense pie chart and its legend.

use std::collections::HashMap;

use serde::Serialize;

use crate::{
    category::ColorKey,
    dashboard::geometry::{PieSegment, circumference, pie_segments},
    transaction::{Transaction, TransactionKind},
};

/// The total spent in one category and its pie segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySlice {
    /// The category name, or "Other" for unresolved transactions.
    pub name: String,
    /// The sum of the expenses in this category.
    pub amount: f64,
    /// The colour to draw the slice with.
    pub color: ColorKey,
    /// The share of the total, from 0 to 100.
    pub percentage: f64,
    /// Where the slice is drawn on the ring.
    pub segment: PieSegment,
}

/// Expenses grouped by category, largest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    /// The sum of all expenses.
    pub total: f64,
    /// The circumference of the ring the segments are laid out on.
    pub circumference: f64,
    /// One slice per category, sorted by amount in descending order.
    pub categories: Vec<CategorySlice>,
}

impl CategoryBreakdown {
    /// The first `size` slices, i.e. the largest categories.
    pub fn legend(&self, size: usize) -> &[CategorySlice] {
        &self.categories[..size.min(self.categories.len())]
    }
}

struct CategoryTotal<'a> {
    name: &'a str,
    amount: f64,
    color: ColorKey,
}

/// Group the expenses in `transactions` by category and lay the categories out
/// as pie segments on a ring of `radius`.
///
/// Income transactions are skipped. Unresolved transactions are grouped under
/// "Other". Categories with equal amounts keep the order they were first seen
/// in. When there is nothing to divide up (no expenses, or a zero total) the
/// breakdown is empty.
pub fn breakdown(transactions: &[Transaction], radius: f64) -> CategoryBreakdown {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index_by_name: HashMap<&str, usize> = HashMap::new();
    let mut total = 0.0;

    for transaction in transactions
        .iter()
        .filter(|transaction| transaction.kind == TransactionKind::Expense)
    {
        let name = transaction.category.group_label();
        let index = *index_by_name.entry(name).or_insert_with(|| {
            totals.push(CategoryTotal {
                name,
                amount: 0.0,
                color: transaction.category.color(),
            });
            totals.len() - 1
        });

        totals[index].amount += transaction.amount;
        total += transaction.amount;
    }

    let circumference = circumference(radius);

    if total <= 0.0 {
        return CategoryBreakdown {
            total: 0.0,
            circumference,
            categories: Vec::new(),
        };
    }

    // Stable, so ties keep first-seen order.
    totals.sort_by(|a, b| b.amount.total_cmp(&a.amount));

    let segments = pie_segments(totals.iter().map(|category| category.amount), total, radius);
    let categories = totals
        .into_iter()
        .zip(segments)
        .map(|(category, segment)| CategorySlice {
            name: category.name.to_owned(),
            amount: category.amount,
            color: category.color,
            percentage: (category.amount / total) * 100.0,
            segment,
        })
        .collect();

    CategoryBreakdown {
        total,
        circumference,
        categories,
    }
}
