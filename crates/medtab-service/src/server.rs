//! Router, handlers, and error mapping for the HTTP surface.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use medtab_loader::{SearchOutcome, TableStore};
use medtab_types::{Table, TableRecord};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Minimum search query length, counted after trimming.
pub const MIN_QUERY_LEN: usize = 3;

/// Service name reported by the status endpoint.
pub const SERVICE_NAME: &str = "Medical Tables API (CID + SIGTAP)";

/// Shared state handed to every request handler.
///
/// The store is read-only after load, so cloning the state only bumps
/// the `Arc` refcount.
#[derive(Clone)]
pub struct AppState {
    store: Arc<TableStore>,
}

impl AppState {
    /// Wraps a loaded store for request handlers.
    pub fn new(store: TableStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Client-visible request errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Search query missing or shorter than [`MIN_QUERY_LEN`] after trimming.
    #[error("query parameter 'q' must have at least {MIN_QUERY_LEN} characters")]
    QueryTooShort,

    /// Exact code lookup missed.
    #[error("{}", .0.not_found_message())]
    NotFound(Table),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::QueryTooShort => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        let body = Json(serde_json::json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    q: Option<String>,
}

#[derive(Debug, Serialize)]
struct StatusResponse {
    status: &'static str,
    service: &'static str,
    records: RecordCounts,
}

#[derive(Debug, Serialize)]
struct RecordCounts {
    cid10: usize,
    sigtap: usize,
}

/// Builds the application router with the blanket-permissive CORS policy.
///
/// tower-http refuses a literal wildcard combined with credentials, so
/// origin, methods, and headers mirror the request instead; credentialed
/// requests from any origin are accepted, same as the original policy.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/", get(home))
        .route("/cid/search", get(search_cid))
        .route("/cid/code/{codigo}", get(get_cid_by_code))
        .route("/sigtap/search", get(search_sigtap))
        .route("/sigtap/code/{codigo}", get(get_sigtap_by_code))
        .layer(cors)
        .with_state(state)
}

async fn home(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "online",
        service: SERVICE_NAME,
        records: RecordCounts {
            cid10: state.store.len(Table::Cid10),
            sigtap: state.store.len(Table::Sigtap),
        },
    })
}

async fn search_cid(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchOutcome>, ApiError> {
    run_search(&state, Table::Cid10, params)
}

async fn search_sigtap(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchOutcome>, ApiError> {
    run_search(&state, Table::Sigtap, params)
}

async fn get_cid_by_code(
    State(state): State<AppState>,
    Path(codigo): Path<String>,
) -> Result<Json<TableRecord>, ApiError> {
    lookup_code(&state, Table::Cid10, &codigo)
}

async fn get_sigtap_by_code(
    State(state): State<AppState>,
    Path(codigo): Path<String>,
) -> Result<Json<TableRecord>, ApiError> {
    lookup_code(&state, Table::Sigtap, &codigo)
}

/// Validates the query length, then runs the search.
///
/// Length is checked in characters after trimming; the engine itself
/// never rejects a query, so this boundary is the only gate.
fn run_search(
    state: &AppState,
    table: Table,
    params: SearchParams,
) -> Result<Json<SearchOutcome>, ApiError> {
    let query = params.q.as_deref().unwrap_or("");
    if query.trim().chars().count() < MIN_QUERY_LEN {
        return Err(ApiError::QueryTooShort);
    }

    Ok(Json(state.store.search(table, query)))
}

fn lookup_code(
    state: &AppState,
    table: Table,
    codigo: &str,
) -> Result<Json<TableRecord>, ApiError> {
    state
        .store
        .find_by_code(table, codigo)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound(table))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_messages() {
        assert_eq!(
            ApiError::NotFound(Table::Cid10).to_string(),
            "Código CID não encontrado"
        );
        assert_eq!(
            ApiError::NotFound(Table::Sigtap).to_string(),
            "Código SIGTAP não encontrado"
        );
        assert!(ApiError::QueryTooShort.to_string().contains("3"));
    }
}
