//! Supersession of stale searches.

use crate::pipeline::{LocationLookupPipeline, LookupEvent};
use hostgeo_core::{LookupError, LookupResult};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Identifies one search started on a [`SearchSession`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket(u64);

impl SearchTicket {
    /// Generation number of this search
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }
}

/// How a search on a session ended
#[derive(Debug)]
pub enum SearchOutcome {
    /// The search finished and is still the latest one
    Completed(LookupResult),
    /// The search failed and is still the latest one
    Failed(LookupError),
    /// A newer search started before this one finished
    Superseded,
}

/// Runs searches one after another, discarding results of superseded ones
///
/// Starting a search bumps the generation counter. Events and results from a
/// search whose generation is no longer current are dropped, so a slow old
/// search can never overwrite the output of a newer one.
pub struct SearchSession {
    pipeline: LocationLookupPipeline,
    generation: AtomicU64,
}

impl SearchSession {
    /// Create a session around `pipeline`
    #[must_use]
    pub const fn new(pipeline: LocationLookupPipeline) -> Self {
        Self {
            pipeline,
            generation: AtomicU64::new(0),
        }
    }

    /// Pipeline used for every search
    #[must_use]
    pub const fn pipeline(&self) -> &LocationLookupPipeline {
        &self.pipeline
    }

    /// Start a new generation, superseding all earlier tickets
    pub fn begin(&self) -> SearchTicket {
        SearchTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Returns true if no newer search has started since `ticket`
    #[must_use]
    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Latest generation handed out
    #[must_use]
    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Run a search for `raw`, forwarding events while it is still current
    pub async fn search<F>(&self, raw: &str, mut on_event: F) -> SearchOutcome
    where
        F: FnMut(LookupEvent),
    {
        let ticket = self.begin();

        let result = self
            .pipeline
            .run(ticket.generation(), raw, |event| {
                if self.is_current(ticket) {
                    on_event(event);
                } else {
                    debug!(generation = ticket.generation(), "dropping event from stale search");
                }
            })
            .await;

        if !self.is_current(ticket) {
            debug!(generation = ticket.generation(), "search superseded");
            return SearchOutcome::Superseded;
        }

        match result {
            Ok(result) => SearchOutcome::Completed(result),
            Err(e) => SearchOutcome::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostgeo_client::LookupClient;

    fn session() -> SearchSession {
        let client = LookupClient::builder()
            .endpoints(hostgeo_client::Endpoints::all("http://127.0.0.1:9"))
            .build()
            .unwrap();
        SearchSession::new(LocationLookupPipeline::new(client).without_media())
    }

    #[test]
    fn test_tickets_supersede() {
        let session = session();
        let first = session.begin();
        assert!(session.is_current(first));

        let second = session.begin();
        assert!(!session.is_current(first));
        assert!(session.is_current(second));
        assert!(second > first);
        assert_eq!(session.current_generation(), second.generation());
    }

    #[tokio::test]
    async fn test_empty_input_fails_immediately() {
        let session = session();
        let mut events = 0;
        let outcome = session.search("  ", |_| events += 1).await;

        assert!(matches!(outcome, SearchOutcome::Failed(LookupError::InvalidInput(_))));
        assert_eq!(events, 0);
        assert_eq!(session.current_generation(), 1);
    }
}
