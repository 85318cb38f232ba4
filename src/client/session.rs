use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use reqwest::StatusCode;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument};

use super::form::SearchForm;
use crate::domain::{UserRecord, NO_RESULTS_MESSAGE};
use crate::error::ClientError;
use crate::http::dto::{ErrorBody, MessageBody};

/// What one submission ended with.
#[derive(Debug)]
pub enum SubmitOutcome {
    Results(Vec<UserRecord>),
    NoResults(String),
    /// Aborted by a newer submission, by [`SearchSession::cancel`], or
    /// superseded on the server. Never shown as an error.
    Cancelled,
    Failed(ClientError),
}

/// Success bodies of `POST /api/search`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SearchReply {
    Records(Vec<UserRecord>),
    Message(MessageBody),
}

enum Exchange {
    Reply(SearchReply),
    Superseded,
}

#[derive(Debug)]
struct Outstanding {
    id: u64,
    token: CancellationToken,
}

#[derive(Debug, Default)]
struct SessionState {
    outstanding: Option<Outstanding>,
    next_id: u64,
}

/// Client side of the request lifecycle.
///
/// Holds at most one outstanding request. Submitting again cancels the
/// previous request before the new one is sent; the cancelled request
/// notices its token and reports [`SubmitOutcome::Cancelled`] instead of
/// whatever the server said.
#[derive(Debug, Clone)]
pub struct SearchSession {
    http: reqwest::Client,
    endpoint: String,
    state: Arc<Mutex<SessionState>>,
}

impl SearchSession {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:3001`.
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            endpoint: format!("{}/api/search", base_url.trim_end_matches('/')),
            state: Arc::new(Mutex::new(SessionState::default())),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Busy indicator: true while a request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.lock().outstanding.is_some()
    }

    /// Aborts the outstanding request, if any. Returns whether one was aborted.
    pub fn cancel(&self) -> bool {
        match self.lock().outstanding.take() {
            Some(outstanding) => {
                debug!(request_id = outstanding.id, "Cancelling outstanding request");
                outstanding.token.cancel();
                true
            }
            None => false,
        }
    }

    #[instrument(skip(self, form), fields(email = %form.email()))]
    pub async fn submit(&self, form: &SearchForm) -> SubmitOutcome {
        let (id, token) = self.begin();

        let result = tokio::select! {
            biased;
            _ = token.cancelled() => None,
            result = self.exchange(form) => Some(result),
        };

        let outcome = match result {
            _ if token.is_cancelled() => {
                info!(request_id = id, "Request canceled.");
                SubmitOutcome::Cancelled
            }
            None => SubmitOutcome::Cancelled,
            Some(Ok(Exchange::Superseded)) => {
                info!(request_id = id, "Request superseded on the server.");
                SubmitOutcome::Cancelled
            }
            Some(Ok(Exchange::Reply(SearchReply::Records(records)))) if records.is_empty() => {
                SubmitOutcome::NoResults(NO_RESULTS_MESSAGE.to_string())
            }
            Some(Ok(Exchange::Reply(SearchReply::Records(records)))) => SubmitOutcome::Results(records),
            Some(Ok(Exchange::Reply(SearchReply::Message(body)))) => SubmitOutcome::NoResults(body.message),
            Some(Err(e)) => {
                error!(request_id = id, error = %e, "Query error");
                SubmitOutcome::Failed(e)
            }
        };

        self.finish(id);
        outcome
    }

    /// Cancels the previous request and registers a new one.
    fn begin(&self) -> (u64, CancellationToken) {
        let mut state = self.lock();
        if let Some(previous) = state.outstanding.take() {
            debug!(request_id = previous.id, "Cancelling previous request");
            previous.token.cancel();
        }

        state.next_id += 1;
        let id = state.next_id;
        let token = CancellationToken::new();
        state.outstanding = Some(Outstanding {
            id,
            token: token.clone(),
        });
        (id, token)
    }

    /// Clears the busy state unless a newer request has taken over.
    fn finish(&self, id: u64) {
        let mut state = self.lock();
        if state.outstanding.as_ref().is_some_and(|outstanding| outstanding.id == id) {
            state.outstanding = None;
        }
    }

    async fn exchange(&self, form: &SearchForm) -> Result<Exchange, ClientError> {
        debug!(endpoint = %self.endpoint, "Sending request");
        let response = self
            .http
            .post(&self.endpoint)
            .json(&form.to_query())
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::CONFLICT {
            return Ok(Exchange::Superseded);
        }

        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
            };
            return Err(ClientError::Server {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<SearchReply>()
            .await
            .map(Exchange::Reply)
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
