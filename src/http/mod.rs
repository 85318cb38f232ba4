//! HTTP surface: `POST /api/search` and `GET /api/health`.

pub mod dto;
pub mod error;
pub mod routes;

use std::future::Future;
use std::io;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::search_actor::SearchClient;
pub use routes::AppState;

/// Builds the application router. Cross-origin requests are allowed from anywhere.
pub fn router(search: SearchClient) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/api/search", post(routes::search_handler))
        .route("/api/health", get(routes::health_handler))
        .layer(cors)
        .with_state(AppState { search })
}

/// Serves `app` on `listener` until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> io::Result<()> {
    info!(address = ?listener.local_addr().ok(), "Server running");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
