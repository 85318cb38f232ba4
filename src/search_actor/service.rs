use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, error, info, instrument, warn};
use crate::domain::{SearchOutcome, SearchQuery};
use crate::error::SearchError;
use crate::messages::{SearchRequest, SearchStatus, ServiceResponse};
use crate::store::RecordStore;
use super::SearchClient;

/// Simulated backend latency applied before a search is evaluated.
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_secs(5);

/// Macro for clean error response handling
macro_rules! send_error {
    ($respond_to:expr, $error:expr) => {{
        let _ = $respond_to.send(Err($error));
        return;
    }};
}

/// The one search allowed to be waiting on its delay.
#[derive(Debug)]
struct PendingSearch {
    id: u64,
    email: String,
    number: Option<String>,
    deadline: Instant,
    respond_to: ServiceResponse<SearchOutcome, SearchError>,
}

/// What happened to the pending search while the actor was waiting.
enum PendingEvent {
    Due,
    Abandoned,
}

enum Event {
    Message(Option<SearchRequest>),
    Pending(PendingEvent),
}

/// Search actor. Owns the record store and a single pending slot.
///
/// Every state change happens inside [`SearchService::run`]: accepting a
/// search, superseding the previous one, firing the delayed filter and
/// noticing that a caller has gone away. A search that has been replaced in
/// the slot can therefore never be evaluated.
pub struct SearchService {
    receiver: mpsc::Receiver<SearchRequest>,
    store: RecordStore,
    delay: Duration,
    pending: Option<PendingSearch>,
    next_id: u64,
    status: SearchStatus,
}

impl SearchService {
    pub fn new(buffer_size: usize, store: RecordStore, delay: Duration) -> (Self, SearchClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            store,
            delay,
            pending: None,
            next_id: 1,
            status: SearchStatus::default(),
        };
        let client = SearchClient::new(sender);
        (service, client)
    }

    #[instrument(name = "search_service", skip(self), fields(records = self.store.len(), delay_ms = self.delay.as_millis() as u64))]
    pub async fn run(mut self) {
        info!("SearchService starting");

        loop {
            let event = tokio::select! {
                msg = self.receiver.recv() => Event::Message(msg),
                event = wait_pending(&mut self.pending) => Event::Pending(event),
            };

            match event {
                Event::Message(Some(SearchRequest::Search { query, respond_to })) => {
                    self.handle_search(query, respond_to);
                }
                Event::Message(Some(SearchRequest::Status { respond_to })) => {
                    self.handle_status(respond_to);
                }
                Event::Message(Some(SearchRequest::Shutdown)) => {
                    info!("SearchService shutting down");
                    break;
                }
                Event::Message(None) => {
                    info!("All clients dropped, SearchService shutting down");
                    break;
                }
                Event::Pending(PendingEvent::Due) => self.complete_pending(),
                Event::Pending(PendingEvent::Abandoned) => self.abandon_pending(),
            }
        }

        if let Some(pending) = self.pending.take() {
            warn!(search_id = pending.id, "Failing pending search on shutdown");
            let _ = pending.respond_to.send(Err(SearchError::ShuttingDown));
        }

        info!("SearchService stopped");
    }

    /// Validates the query and puts it in the pending slot.
    ///
    /// A query without an email is rejected on the spot and leaves the slot
    /// alone. Otherwise whatever occupied the slot is answered with
    /// [`SearchError::Superseded`] before the new search replaces it.
    #[instrument(fields(email = ?query.email, number = ?query.number), skip(self, query, respond_to))]
    fn handle_search(&mut self, query: SearchQuery, respond_to: ServiceResponse<SearchOutcome, SearchError>) {
        debug!("Processing search request");

        let Some(email) = query.email().map(str::to_owned) else {
            error!("Validation failed: empty email");
            send_error!(respond_to, SearchError::EmailRequired);
        };
        let number = query.number().map(str::to_owned);

        if let Some(previous) = self.pending.take() {
            info!(search_id = previous.id, "Superseding pending search");
            self.status.superseded += 1;
            let _ = previous.respond_to.send(Err(SearchError::Superseded));
        }

        let id = self.next_id;
        self.next_id += 1;
        self.status.accepted += 1;
        self.pending = Some(PendingSearch {
            id,
            email,
            number,
            deadline: Instant::now() + self.delay,
            respond_to,
        });

        info!(search_id = id, "Search accepted");
    }

    fn handle_status(&self, respond_to: ServiceResponse<SearchStatus, SearchError>) {
        let status = SearchStatus {
            pending: self.pending.is_some(),
            ..self.status
        };
        let _ = respond_to.send(Ok(status));
    }

    /// Runs the filter for the pending search once its delay has elapsed.
    fn complete_pending(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };

        let matches = self.store.filter(&pending.email, pending.number.as_deref());
        let outcome = SearchOutcome::from_matches(matches);
        self.status.completed += 1;
        info!(search_id = pending.id, matches = outcome.len(), "Search completed");

        if pending.respond_to.send(Ok(outcome)).is_err() {
            debug!(search_id = pending.id, "Caller went away before the result was delivered");
        }
    }

    /// Drops the pending search after its caller stopped listening.
    fn abandon_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.status.abandoned += 1;
            info!(search_id = pending.id, "Caller aborted, search abandoned");
        }
    }
}

/// Resolves when the pending search is due or its caller has hung up.
/// Never resolves while the slot is empty.
async fn wait_pending(pending: &mut Option<PendingSearch>) -> PendingEvent {
    match pending {
        Some(pending) => {
            tokio::select! {
                _ = sleep_until(pending.deadline) => PendingEvent::Due,
                _ = pending.respond_to.closed() => PendingEvent::Abandoned,
            }
        }
        None => std::future::pending().await,
    }
}
