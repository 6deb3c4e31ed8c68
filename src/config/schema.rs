//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the route
//! atlas. All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::model::{Module, Renderable};
use crate::routing::DuplicatePolicy;

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AtlasConfig {
    /// Application shell settings.
    pub app: AppConfig,

    /// Route compiler settings.
    pub compiler: CompilerConfig,

    /// HTTP API settings.
    pub server: ServerConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// The module → category → page tree to compile.
    pub modules: Vec<Module>,
}

/// Application shell configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Renderable of the root node every route is nested under.
    pub shell: Renderable,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            shell: Renderable::new("app-shell"),
        }
    }
}

/// Route compiler configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Handling of nodes whose pattern is already registered.
    pub duplicate_patterns: DuplicatePolicy,
}

/// HTTP API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            request_timeout_secs: 10,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter (a level such as "info", or full `RUST_LOG` directives).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
