//! Tracks the latest search so a slow, superseded search cannot overwrite the
//! results of a newer one.

use std::sync::{
    Mutex, MutexGuard, PoisonError,
    atomic::{AtomicU64, Ordering},
};

use crate::{
    Error,
    category::Category,
    filter::{criteria::FilterCriteria, planner},
    transaction::Transaction,
    transport::Transport,
};

/// Identifies one search started on a [SearchSession].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// Where the latest search of a session is at.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState {
    /// No search has been started.
    Idle,
    /// The search with this generation is waiting on the transport.
    #[allow(missing_docs)]
    Querying { generation: u64 },
    /// The search with this generation finished.
    #[allow(missing_docs)]
    Merged {
        generation: u64,
        results: Vec<Transaction>,
    },
    /// The search with this generation failed.
    #[allow(missing_docs)]
    Failed { generation: u64, error: Error },
}

/// What happened to a search once it completed.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The search was the latest one and its results were published.
    Current(Vec<Transaction>),
    /// A newer search was started while this one was in flight. Its results
    /// (or error) were discarded.
    Superseded,
}

/// Runs searches against a transport, publishing only the results of the most
/// recently started one.
#[derive(Debug)]
pub struct SearchSession<T> {
    transport: T,
    latest: AtomicU64,
    state: Mutex<SearchState>,
}

impl<T> SearchSession<T>
where
    T: Transport,
{
    /// Create an idle session.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            latest: AtomicU64::new(0),
            state: Mutex::new(SearchState::Idle),
        }
    }

    /// Start a new search, superseding any search in flight.
    pub fn begin(&self) -> SearchTicket {
        let mut state = self.lock_state();
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        *state = SearchState::Querying { generation };

        SearchTicket(generation)
    }

    /// Whether `ticket` belongs to the most recently started search.
    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }

    /// A snapshot of the session state.
    pub fn state(&self) -> SearchState {
        self.lock_state().clone()
    }

    /// Forget the latest results. Searches in flight are superseded.
    pub fn reset(&self) {
        let mut state = self.lock_state();
        self.latest.fetch_add(1, Ordering::SeqCst);
        *state = SearchState::Idle;
    }

    /// Run a search and publish its results if no newer search was started in
    /// the meantime.
    ///
    /// # Errors
    ///
    /// Returns the transport error if the search failed and is still the
    /// latest. Failures of superseded searches are discarded.
    pub async fn search(
        &self,
        criteria: &FilterCriteria,
        categories: &[Category],
    ) -> Result<SearchOutcome, Error> {
        let ticket = self.begin();
        let result = planner::search(&self.transport, criteria, categories).await;

        self.finish(ticket, result)
    }

    fn finish(
        &self,
        ticket: SearchTicket,
        result: Result<Vec<Transaction>, Error>,
    ) -> Result<SearchOutcome, Error> {
        let mut state = self.lock_state();

        if !self.is_current(ticket) {
            tracing::info!("discarding results of superseded search {}", ticket.0);
            return Ok(SearchOutcome::Superseded);
        }

        let generation = ticket.0;
        match result {
            Ok(results) => {
                tracing::debug!("search {generation} found {} transactions", results.len());
                *state = SearchState::Merged {
                    generation,
                    results: results.clone(),
                };
                Ok(SearchOutcome::Current(results))
            }
            Err(error) => {
                *state = SearchState::Failed {
                    generation,
                    error: error.clone(),
                };
                Err(error)
            }
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, SearchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use time::macros::date;
    use tokio::sync::Notify;

    use crate::{
        Error,
        filter::criteria::{FilterCriteria, KindFilter},
        test_utils::{StubTransport, named_record},
        transaction::TransactionKind,
    };

    use super::{SearchOutcome, SearchSession, SearchState};

    fn income_search(keyword: &str) -> FilterCriteria {
        FilterCriteria {
            kind_filter: KindFilter::Income,
            keyword: Some(keyword.to_owned()),
            ..Default::default()
        }
    }

    fn transport() -> StubTransport {
        StubTransport::new().with_records(
            TransactionKind::Income,
            vec![
                named_record(1, "slow salary", 100.0, date!(2024 - 01 - 05)),
                named_record(2, "fast freelance", 200.0, date!(2024 - 01 - 06)),
            ],
        )
    }

    #[test]
    fn new_session_is_idle() {
        let session = SearchSession::new(StubTransport::new());

        assert_eq!(session.state(), SearchState::Idle);
    }

    #[test]
    fn begin_supersedes_previous_ticket() {
        let session = SearchSession::new(StubTransport::new());

        let first = session.begin();
        let second = session.begin();

        assert!(!session.is_current(first));
        assert!(session.is_current(second));
        assert_eq!(session.state(), SearchState::Querying { generation: 2 });
    }

    #[tokio::test]
    async fn publishes_latest_results() {
        let session = SearchSession::new(transport());

        let outcome = session.search(&income_search("fast"), &[]).await.unwrap();

        let SearchOutcome::Current(results) = outcome else {
            panic!("expected current results");
        };
        assert_eq!(results.len(), 1);
        assert_eq!(
            session.state(),
            SearchState::Merged {
                generation: 1,
                results
            }
        );
    }

    #[tokio::test]
    async fn slow_superseded_search_does_not_overwrite_newer_results() {
        let gate = Arc::new(Notify::new());
        let session = SearchSession::new(transport().gated("slow", gate.clone()));

        let slow_criteria = income_search("slow");
        let slow = session.search(&slow_criteria, &[]);
        let fast = async {
            let outcome = session.search(&income_search("fast"), &[]).await;
            gate.notify_one();
            outcome
        };

        let (slow, fast) = tokio::join!(slow, fast);

        assert_eq!(slow, Ok(SearchOutcome::Superseded));
        let Ok(SearchOutcome::Current(results)) = fast else {
            panic!("expected the second search to be current");
        };
        assert_eq!(results[0].name, "fast freelance");
        let SearchState::Merged {
            generation,
            results,
        } = session.state()
        else {
            panic!("expected merged state");
        };
        assert_eq!(generation, 2);
        assert_eq!(results[0].name, "fast freelance");
    }

    #[tokio::test]
    async fn slow_superseded_search_over_all_kinds_does_not_overwrite_newer_results() {
        let gate = Arc::new(Notify::new());
        let transport = transport()
            .with_records(
                TransactionKind::Expense,
                vec![
                    named_record(1, "slow rent", 12000.0, date!(2024 - 01 - 01)),
                    named_record(2, "fast taxi", 350.0, date!(2024 - 01 - 07)),
                ],
            )
            .gated("slow", gate.clone());
        let session = SearchSession::new(transport);
        let all_search = |keyword: &str| FilterCriteria {
            keyword: Some(keyword.to_owned()),
            ..Default::default()
        };

        let slow_criteria = all_search("slow");
        let slow = session.search(&slow_criteria, &[]);
        let fast = async {
            let outcome = session.search(&all_search("fast"), &[]).await;
            // Both income and expense queries of the slow search are waiting.
            gate.notify_waiters();
            outcome
        };

        let (slow, fast) = tokio::join!(slow, fast);

        assert_eq!(slow, Ok(SearchOutcome::Superseded));
        let Ok(SearchOutcome::Current(results)) = fast else {
            panic!("expected the second search to be current");
        };
        let keys: Vec<String> = results.iter().map(|transaction| transaction.key()).collect();
        assert_eq!(keys, vec!["expense-2", "income-2"]);
        let SearchState::Merged {
            generation,
            results,
        } = session.state()
        else {
            panic!("expected merged state");
        };
        assert_eq!(generation, 2);
        assert!(results.iter().all(|transaction| transaction.name.starts_with("fast")));
    }

    #[tokio::test]
    async fn failure_of_latest_search_is_recorded() {
        let transport = transport().failing(TransactionKind::Income, Error::SessionExpired);
        let session = SearchSession::new(transport);

        let got = session.search(&income_search("fast"), &[]).await;

        assert_eq!(got, Err(Error::SessionExpired));
        assert_eq!(
            session.state(),
            SearchState::Failed {
                generation: 1,
                error: Error::SessionExpired
            }
        );
    }

    #[tokio::test]
    async fn reset_returns_to_idle() {
        let session = SearchSession::new(transport());
        session.search(&income_search("fast"), &[]).await.unwrap();

        session.reset();

        assert_eq!(session.state(), SearchState::Idle);
    }
}
