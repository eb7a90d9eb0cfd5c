//! HTTP adapter (axum). Exposes the assist service over JSON.
//!
//! Routes:
//! - `GET /`         static service metadata
//! - `GET /health`   liveness check
//! - `POST /process` text in, structured breakdown out

use crate::domain::{DomainError, ProcessedOutput};
use crate::usecases::AssistService;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub const SERVICE_NAME: &str = "Accessibility Focus Assistant API";

#[derive(Clone)]
struct AppState {
    service: Arc<AssistService>,
}

#[derive(Debug, Deserialize)]
struct ProcessRequest {
    text: String,
}

/// Error body, `{"detail": "..."}`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

/// Build the application router with CORS and request tracing.
pub fn router(service: Arc<AssistService>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/process", post(process_text))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { service })
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(addr: SocketAddr, service: Arc<AssistService>) -> anyhow::Result<()> {
    use anyhow::Context;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {} failed", addr))?;
    info!(%addr, "listening on http://{}", addr);
    axum::serve(listener, router(service))
        .await
        .context("server terminated with error")
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "process": "/process (POST)"
        }
    }))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "healthy"}))
}

async fn process_text(
    State(state): State<AppState>,
    payload: Result<Json<ProcessRequest>, JsonRejection>,
) -> Result<Json<ProcessedOutput>, ApiError> {
    let Json(payload) = payload.map_err(map_json_rejection)?;
    state
        .service
        .process(&payload.text)
        .await
        .map(Json)
        .map_err(map_domain_error)
}

/// Malformed or schema-mismatched bodies keep axum's status but use the `{"detail"}` shape.
fn map_json_rejection(rejection: JsonRejection) -> ApiError {
    (
        rejection.status(),
        Json(ErrorBody {
            detail: rejection.body_text(),
        }),
    )
}

fn map_domain_error(err: DomainError) -> ApiError {
    if err.is_client_error() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                detail: err.to_string(),
            }),
        );
    }
    error!(error = %err, "processing failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            detail: format!("Processing error: {}", err),
        }),
    )
}
