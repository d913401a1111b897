use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{error, info};

use crate::config::RelayConfig;
use crate::news_provider::NewsProvider;
use crate::rate_provider::RateProvider;

pub const NEWS_FAILURE_MESSAGE: &str = "Failed to fetch news.";
pub const EXCHANGE_FAILURE_MESSAGE: &str = "Failed to fetch exchange rates.";

pub struct AppState {
    pub news: Arc<dyn NewsProvider>,
    pub rates: Arc<dyn RateProvider>,
}

/// Fixed 500 body. Upstream errors are logged server-side and never appear in
/// the response.
struct RelayError(&'static str);

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "message": self.0 }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

async fn get_news(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, RelayError> {
    match state.news.fetch_headlines().await {
        Ok(body) => Ok(Json(body)),
        Err(e) => {
            error!(error = %e, "News upstream call failed");
            Err(RelayError(NEWS_FAILURE_MESSAGE))
        }
    }
}

async fn get_exchange(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, RelayError> {
    match state.rates.fetch_latest().await {
        Ok(body) => Ok(Json(body)),
        Err(e) => {
            error!(error = %e, "Exchange upstream call failed");
            Err(RelayError(EXCHANGE_FAILURE_MESSAGE))
        }
    }
}

pub fn app_router(state: Arc<AppState>, static_dir: &str) -> Router {
    let static_dir = std::path::PathBuf::from(static_dir);
    let index_file = static_dir.join("index.html");
    let static_service = ServeDir::new(static_dir).fallback(ServeFile::new(index_file));

    Router::new()
        .route("/api/news", get(get_news))
        .route("/api/exchange", get(get_exchange))
        .with_state(state)
        .fallback_service(static_service)
        .layer(CorsLayer::new().allow_origin(Any))
        .layer(TraceLayer::new_for_http())
}

pub async fn run(config: RelayConfig, state: Arc<AppState>) -> anyhow::Result<()> {
    let router = app_router(state, &config.static_dir);
    info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
