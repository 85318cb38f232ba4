use tokio::sync::oneshot;
use crate::domain::{SearchOutcome, SearchQuery};
use crate::error::SearchError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Counters and slot state reported by [`SearchRequest::Status`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStatus {
    pub pending: bool,
    pub accepted: u64,
    pub superseded: u64,
    pub completed: u64,
    pub abandoned: u64,
}

/// Typed messages for the search actor. Each variant carries a oneshot
/// channel for the reply.
#[derive(Debug)]
pub enum SearchRequest {
    Search {
        query: SearchQuery,
        respond_to: ServiceResponse<SearchOutcome, SearchError>,
    },
    Status {
        respond_to: ServiceResponse<SearchStatus, SearchError>,
    },
    Shutdown,
}
