//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check route path shapes before the compiler sees them
//! - Validate addresses and the log filter
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AtlasConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::AtlasConfig;
use crate::model::PageRoute;
use crate::routing::matcher::SPLAT_KEY;
use crate::routing::path::{build_path, join_paths, slug, split_segments, strip_slashes};

/// A semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{location}: non-index route must have a path")]
    MissingPath { location: String },

    #[error("{location}: index route must not have a path (found {path:?})")]
    IndexWithPath { location: String, path: String },

    #[error("{location}: name {name:?} produces an empty URL segment")]
    EmptySlug { location: String, name: String },

    #[error("{location}: `*` must be the last segment of {pattern}")]
    SplatNotLast { location: String, pattern: String },

    #[error("invalid {field} {value:?}")]
    InvalidAddress { field: &'static str, value: String },

    #[error("server.request_timeout_secs must be greater than 0")]
    InvalidTimeout,

    #[error("invalid log filter {0:?}")]
    InvalidLogFilter(String),
}

/// Validate `config`, collecting every error found.
pub fn validate_config(config: &AtlasConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "server.bind_address",
            value: config.server.bind_address.clone(),
        });
    }
    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::InvalidTimeout);
    }
    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }
    if EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ValidationError::InvalidLogFilter(
            config.observability.log_level.clone(),
        ));
    }

    for module in &config.modules {
        let module_location = format!("module {:?}", module.name);
        let module_seg = slug(&module.name);
        if module_seg.is_empty() {
            errors.push(ValidationError::EmptySlug {
                location: module_location.clone(),
                name: module.name.clone(),
            });
        }

        for category in &module.categories {
            let category_location = format!("{module_location} / category {:?}", category.name);
            let category_seg = slug(&category.name);
            if category_seg.is_empty() {
                errors.push(ValidationError::EmptySlug {
                    location: category_location.clone(),
                    name: category.name.clone(),
                });
            }

            let base = build_path(&[module_seg.as_str(), category_seg.as_str()]);
            for page in &category.pages {
                check_route(&page.route, &base, &category_location, &mut errors);
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_route(route: &PageRoute, parent: &str, scope: &str, errors: &mut Vec<ValidationError>) {
    let location = format!("{scope} / route {}", route.route_id);

    let pattern = match (route.index, route.segment()) {
        (true, None) => parent.to_string(),
        (true, Some(path)) => {
            errors.push(ValidationError::IndexWithPath {
                location,
                path: path.to_string(),
            });
            return;
        }
        (false, Some(path)) if !strip_slashes(path).is_empty() => {
            join_paths(parent, strip_slashes(path))
        }
        (false, _) => {
            errors.push(ValidationError::MissingPath { location });
            return;
        }
    };

    let segments = split_segments(&pattern);
    if let Some(pos) = segments.iter().position(|s| s == SPLAT_KEY) {
        if pos + 1 != segments.len() {
            errors.push(ValidationError::SplatNotLast {
                location: location.clone(),
                pattern: pattern.clone(),
            });
        }
    }

    for child in &route.children {
        check_route(child, &pattern, &location, errors);
    }
}
