use std::time::Duration;
use tracing::{error, info, instrument};
use crate::error::SearchError;
use crate::search_actor::{SearchClient, SearchService};
use crate::store::RecordStore;

/// Owns the search actor task and hands out its client.
///
/// Responsible for starting the actor, wiring it to the record store, and
/// handling shutdown.
pub struct SearchSystem {
    pub search_client: SearchClient,
    handle: tokio::task::JoinHandle<()>,
}

impl SearchSystem {
    #[instrument(name = "search_system", skip(store), fields(records = store.len()))]
    pub fn new(store: RecordStore, delay: Duration) -> Self {
        info!("Starting search system");

        let (search_service, search_client) = SearchService::new(32, store, delay);
        let handle = tokio::spawn(search_service.run());

        info!("Search system started successfully");

        Self {
            search_client,
            handle,
        }
    }

    /// Stops the actor, failing any pending search, and waits for it to exit.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), SearchError> {
        info!("Shutting down search system");

        if let Err(e) = self.search_client.shutdown().await {
            error!(error = %e, "Shutdown message not delivered");
        }

        if let Err(e) = self.handle.await {
            error!(error = ?e, "Search service task failed");
            return Err(SearchError::ActorCommunicationError(e.to_string()));
        }

        info!("Search system shutdown complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SearchOutcome, SearchQuery};

    #[tokio::test(start_paused = true)]
    async fn test_system_serves_and_shuts_down() -> Result<(), Box<dyn std::error::Error>> {
        let system = SearchSystem::new(RecordStore::seeded(), Duration::from_secs(5));

        let outcome = system
            .search_client
            .search(SearchQuery::new("nope@x.com", None))
            .await?;
        assert_eq!(outcome, SearchOutcome::NoResults);

        let client = system.search_client.clone();
        system.shutdown().await?;

        assert!(matches!(
            client.status().await,
            Err(SearchError::ActorCommunicationError(_))
        ));
        Ok(())
    }
}
