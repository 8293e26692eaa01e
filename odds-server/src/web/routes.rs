//! HTTP route handlers.

use std::path::Path;

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::compression::predicate::SizeAbove;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::{Route, ThreatReport, Vessel};
use crate::planner::{OddsReport, compute_best_plan};
use crate::store::StoreError;

use super::dto::{ErrorResponse, OddsResponse};
use super::state::AppState;

/// Longest parse error echoed back or logged; serde errors quote input values.
const MAX_ERROR_CHARS: usize = 200;

/// Responses smaller than this are sent uncompressed.
const COMPRESSION_MIN_BYTES: u16 = 1024;

/// Create the application router.
///
/// When `static_dir` is given, paths not matched by the API are served from
/// it. Any origin may call the API.
pub fn create_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .route("/api/routes", get(list_routes))
        .route("/api/millennium_falcon", get(get_vessel))
        .route("/api/odds", post(compute_odds));

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router.fallback(not_found),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST]);
    let compression =
        CompressionLayer::new().compress_when(SizeAbove::new(COMPRESSION_MIN_BYTES));

    router
        .layer(compression)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn not_found() -> AppError {
    AppError::NotFound {
        message: "No such endpoint".to_string(),
    }
}

/// List every route in the store.
async fn list_routes(State(state): State<AppState>) -> Result<Json<Vec<Route>>, AppError> {
    let store = state.store.clone();
    let routes = tokio::task::spawn_blocking(move || store.routes())
        .await
        .map_err(|e| AppError::Internal {
            message: format!("Route loading task failed: {e}"),
        })??;

    Ok(Json(routes))
}

/// The vessel the server plans for.
async fn get_vessel(State(state): State<AppState>) -> Json<Vessel> {
    Json(state.vessel.as_ref().clone())
}

/// Compute the odds of reaching the arrival against a threat report.
async fn compute_odds(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<OddsResponse>, AppError> {
    // Parse JSON manually so domain validation errors become 400s
    let report: ThreatReport = serde_json::from_slice(&body).map_err(|e| {
        let error = e.to_string();
        let error = truncate(&error, MAX_ERROR_CHARS);
        warn!(error, body_len = body.len(), "rejected threat report");
        AppError::BadRequest {
            message: format!("Invalid threat report: {error}"),
        }
    })?;

    let store = state.store.clone();
    let vessel = state.vessel.clone();

    // Enumeration is CPU bound and the store may block on disk
    let odds = tokio::task::spawn_blocking(move || -> Result<OddsReport, StoreError> {
        let routes = store.routes()?;
        Ok(compute_best_plan(
            &vessel,
            report.countdown(),
            &routes,
            report.sightings(),
        ))
    })
    .await
    .map_err(|e| AppError::Internal {
        message: format!("Planning task failed: {e}"),
    })??;

    Ok(Json(OddsResponse::from_report(&odds)))
}

/// The first `max_chars` characters of `text`.
fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, "{message}");
        } else {
            warn!(%status, "{message}");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
