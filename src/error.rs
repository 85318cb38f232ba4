use thiserror::Error;

/// Errors returned by the search service.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("Email is required.")]
    EmailRequired,
    #[error("Search superseded by a newer request.")]
    Superseded,
    #[error("Search service is shutting down.")]
    ShuttingDown,
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

/// Errors seen by the search client when a request neither matched, found
/// nothing, nor got cancelled.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },
    #[error("Unexpected response body: {0}")]
    Decode(String),
}

/// Form validation failures, shown next to the offending field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Invalid number format")]
    InvalidNumber,
}
