use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::ErrorBody;
use crate::error::SearchError;

impl SearchError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SearchError::EmailRequired => StatusCode::BAD_REQUEST,
            SearchError::Superseded => StatusCode::CONFLICT,
            SearchError::ShuttingDown | SearchError::ActorCommunicationError(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
        }
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_of(response: Response) -> ErrorBody {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_email_required_is_bad_request() {
        let response = SearchError::EmailRequired.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(response).await.error, "Email is required.");
    }

    #[tokio::test]
    async fn test_superseded_is_conflict() {
        let response = SearchError::Superseded.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            body_of(response).await.error,
            "Search superseded by a newer request."
        );
    }

    #[test]
    fn test_unavailable_errors() {
        assert_eq!(
            SearchError::ShuttingDown.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            SearchError::ActorCommunicationError("Actor closed".to_string()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
