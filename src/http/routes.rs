use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, info, instrument};

use super::dto::{HealthBody, MessageBody};
use crate::domain::{SearchOutcome, SearchQuery, NO_RESULTS_MESSAGE};
use crate::error::SearchError;
use crate::search_actor::SearchClient;

#[derive(Clone)]
pub struct AppState {
    pub search: SearchClient,
}

/// `POST /api/search`
///
/// If the remote client disconnects, this future is dropped together with
/// the actor's reply channel and the pending search is abandoned.
#[instrument(skip(state))]
pub async fn search_handler(
    State(state): State<AppState>,
    Json(query): Json<SearchQuery>,
) -> Result<Response, SearchError> {
    debug!("Received search");

    match state.search.search(query).await? {
        SearchOutcome::Matches(records) => {
            info!(matches = records.len(), "Returning matches");
            Ok(Json(records).into_response())
        }
        SearchOutcome::NoResults => {
            info!("Returning no results");
            let body = MessageBody {
                message: NO_RESULTS_MESSAGE.to_string(),
            };
            Ok(Json(body).into_response())
        }
    }
}

/// `GET /api/health`
pub async fn health_handler(State(state): State<AppState>) -> Result<Json<HealthBody>, SearchError> {
    let status = state.search.status().await?;
    Ok(Json(HealthBody {
        status: "ok".to_string(),
        pending: status.pending,
    }))
}
