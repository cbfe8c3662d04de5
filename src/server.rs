use crate::analyzer::Analyzer;
use crate::config::ServerConfig;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

/// Body of a check request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub url: String,
}

/// Body of every failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

struct AppState {
    analyzer: Analyzer,
}

/// Routes: `POST /seo/check`, `POST /api/seo/check` and `GET /health`
pub fn router(analyzer: Analyzer) -> Router {
    let state = Arc::new(AppState { analyzer });
    let seo = Router::new().route("/check", post(check_seo));

    Router::new()
        .nest("/seo", seo.clone())
        .nest("/api/seo", seo)
        .route("/health", get(health))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// Bind and serve until the process exits
pub async fn serve(analyzer: Analyzer, config: &ServerConfig) -> std::io::Result<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    ::log::info!("SEO check server listening on {}", addr);

    axum::serve(listener, router(analyzer)).await
}

async fn health() -> &'static str {
    "ok"
}

async fn check_seo(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            ::log::warn!("Rejected check request: {}", rejection.body_text());
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("invalid request: {}", rejection.body_text()),
            );
        }
    };

    match state.analyzer.analyze(&request.url).await {
        Ok(report) => Json(report).into_response(),
        Err(e) if e.is_validation() => {
            ::log::warn!("Rejected check request: {}", e);
            error_response(StatusCode::BAD_REQUEST, e.to_string())
        }
        Err(e) => {
            ::log::error!("Error checking SEO for {}: {}", request.url, e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("An error occurred while checking SEO: {}", e),
            )
        }
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorBody { error })).into_response()
}
