//! Ad-hoc transaction search: criteria, query planning and result merging.

mod criteria;
mod planner;
mod session;

pub use criteria::{FilterCriteria, KindFilter, SortField, SortOrder, parse_date};
pub(crate) use criteria::sort_transactions;
pub use planner::{QueryPlan, SubQuery, SubResult, merge, plan, search};
pub use session::{SearchOutcome, SearchSession, SearchState, SearchTicket};
