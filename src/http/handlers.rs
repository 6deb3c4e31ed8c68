use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::http::request::request_id;
use crate::http::response::{not_found, HealthStatus, ResolveResponse};
use crate::http::server::AppState;
use crate::routing::TrailLookup;

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    /// Pathname to resolve; absent means the root.
    #[serde(default)]
    pub path: String,
}

pub async fn get_health(State(state): State<AppState>) -> Json<HealthStatus> {
    let table = state.current();
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        patterns: table.breadcrumbs().len(),
    })
}

pub async fn get_routes(State(state): State<AppState>) -> Response {
    let table = state.current();
    Json(table.root()).into_response()
}

pub async fn get_modules(State(state): State<AppState>) -> Response {
    let table = state.current();
    Json(table.modules()).into_response()
}

pub async fn get_breadcrumbs(State(state): State<AppState>) -> Response {
    let table = state.current();
    Json(table.breadcrumbs()).into_response()
}

pub async fn get_resolve(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ResolveQuery>,
) -> Response {
    let table = state.current();

    match table.resolve(&query.path) {
        TrailLookup::Found(resolution) => {
            tracing::debug!(
                request_id = %request_id(&headers),
                path = %query.path,
                pattern = %resolution.pattern,
                "Trail resolved"
            );
            Json(ResolveResponse::from(&resolution)).into_response()
        }
        TrailLookup::NotFound => {
            tracing::debug!(
                request_id = %request_id(&headers),
                path = %query.path,
                "No pattern matched"
            );
            not_found(&query.path)
        }
    }
}
