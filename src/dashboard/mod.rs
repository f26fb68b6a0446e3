//! The dashboard summary and the expense breakdown.
//!
//! Both views are built from pure functions over fetched data. The loaders
//! in this module fetch that data concurrently and fail as a whole.

mod aggregation;
mod breakdown;
mod geometry;
mod load;
mod view;

pub use aggregation::{Aggregate, Totals, aggregate, expense_percentage_of_income};
pub use breakdown::{CategoryBreakdown, CategorySlice, breakdown};
pub use geometry::{PieSegment, RingGeometry, circumference, pie_segments};
pub use load::{load_dashboard, load_expense_breakdown, load_totals};
pub use view::{
    BarDatum, DashboardSnapshot, DashboardView, ExpenseBreakdownView, LegendEntry,
    SnapshotTransaction, StatCard, StatKind, dashboard_view, expense_breakdown_view,
};
