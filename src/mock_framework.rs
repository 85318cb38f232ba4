//! # Mock Framework
//!
//! Utilities for testing code that talks to the search actor without running it.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_search`] to assert behavior and reply.

use tokio::sync::{mpsc, oneshot};
use crate::domain::{SearchOutcome, SearchQuery};
use crate::error::SearchError;
use crate::messages::{SearchRequest, SearchStatus};
use crate::search_actor::SearchClient;

/// Creates a mock client and a receiver for asserting requests.
///
/// The test plays the actor: it reads messages off `receiver` and answers
/// through the enclosed responder, choosing success, failure or no answer.
pub fn create_mock_client(buffer_size: usize) -> (SearchClient, mpsc::Receiver<SearchRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (SearchClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Search request
pub async fn expect_search(
    receiver: &mut mpsc::Receiver<SearchRequest>,
) -> Option<(SearchQuery, oneshot::Sender<Result<SearchOutcome, SearchError>>)> {
    match receiver.recv().await {
        Some(SearchRequest::Search { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Status request
pub async fn expect_status(
    receiver: &mut mpsc::Receiver<SearchRequest>,
) -> Option<oneshot::Sender<Result<SearchStatus, SearchError>>> {
    match receiver.recv().await {
        Some(SearchRequest::Status { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let search_task = tokio::spawn(async move {
            client.search(SearchQuery::new("test@example.com", None)).await
        });

        let (query, responder) = expect_search(&mut receiver).await.expect("Expected Search request");
        assert_eq!(query.email(), Some("test@example.com"));
        responder.send(Ok(SearchOutcome::NoResults)).unwrap();

        let result = search_task.await.unwrap();
        assert_eq!(result, Ok(SearchOutcome::NoResults));
    }

    #[tokio::test]
    async fn test_unexpected_message_is_none() {
        let (client, mut receiver) = create_mock_client(10);

        tokio::spawn(async move { client.shutdown().await });

        assert!(expect_search(&mut receiver).await.is_none());
    }
}
