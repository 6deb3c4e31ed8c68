//! Breadcrumb types and compile-time error definitions.

use serde::Serialize;
use thiserror::Error;

/// A single breadcrumb: a label and the pattern it stands for.
///
/// `path` is the raw pattern (e.g. `/settings/users/:id`), not yet
/// substituted with runtime parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    pub label: String,
    pub path: String,
}

impl BreadcrumbItem {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// A pattern paired with its full trail, root module first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreadcrumbEntry {
    pub pattern: String,
    pub trail: Vec<BreadcrumbItem>,
}

/// Structural errors in the route configuration.
///
/// These are developer mistakes in static configuration and abort startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A required value (usually a non-index path) is absent or empty.
    #[error("missing required value: {0}")]
    MissingValue(String),

    /// An index route also declares a path segment.
    #[error("index route {route_id} must not declare a path (found {path:?})")]
    IndexWithPath { route_id: u32, path: String },

    /// A second node produced an already registered pattern.
    #[error("duplicate route pattern {pattern} (route {route_id})")]
    DuplicatePattern { pattern: String, route_id: u32 },
}
