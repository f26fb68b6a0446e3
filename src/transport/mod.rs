//! The transport port: how the engines get records from the backing service.
//!
//! Every call may fail with [Error::TransportFailure] or [Error::SessionExpired].
//! The engines never retry, they propagate the failure to the caller.

mod fixture;

pub use fixture::{FixtureData, FixtureTransport};

use crate::{
    Error,
    category::Category,
    dashboard::DashboardSnapshot,
    filter::FilterCriteria,
    transaction::{RawTransaction, TransactionKind},
};

/// Fetches transactions, categories and dashboard summaries.
///
/// Implementations hold any session context they need (e.g. an access token),
/// and report an unauthorised session as [Error::SessionExpired].
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Fetch every record of `kind`.
    async fn fetch_transactions(
        &self,
        kind: TransactionKind,
    ) -> Result<Vec<RawTransaction>, Error>;

    /// Fetch every category of both kinds.
    async fn fetch_categories(&self) -> Result<Vec<Category>, Error>;

    /// Fetch the precomputed dashboard summary.
    async fn fetch_dashboard_snapshot(&self) -> Result<DashboardSnapshot, Error>;

    /// Fetch the records of `kind` that match `criteria`, sorted as `criteria`
    /// requests.
    async fn fetch_filtered(
        &self,
        kind: TransactionKind,
        criteria: &FilterCriteria,
    ) -> Result<Vec<RawTransaction>, Error>;
}
