//! Response bodies of the breadcrumb API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::routing::{BreadcrumbItem, Params, Resolution};

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub patterns: usize,
}

/// A successful trail lookup.
#[derive(Debug, Serialize)]
pub struct ResolveResponse<'a> {
    pub pattern: &'a str,
    pub params: &'a Params,
    /// Trail with raw patterns.
    pub trail: &'a [BreadcrumbItem],
    /// Trail with parameters substituted, ready to link to.
    pub links: Vec<BreadcrumbItem>,
}

impl<'a> From<&'a Resolution<'a>> for ResolveResponse<'a> {
    fn from(resolution: &'a Resolution<'a>) -> Self {
        Self {
            pattern: resolution.pattern,
            params: &resolution.params,
            trail: resolution.trail,
            links: resolution.materialize(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'static str,
    path: &'a str,
}

/// 404 for a pathname no pattern matches.
pub fn not_found(path: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "not_found",
            path,
        }),
    )
        .into_response()
}
