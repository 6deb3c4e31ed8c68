//! Metrics collection and exposition.
//!
//! # Metrics
//! - `route_atlas_compilations_total` (counter): route tables compiled
//! - `route_atlas_compile_duration_seconds` (histogram): compile latency
//! - `route_atlas_patterns` (gauge): patterns in the latest table
//! - `route_atlas_resolutions_total` (counter): lookups by `outcome`
//!   (`found` | `not_found`)

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const COMPILATIONS_TOTAL: &str = "route_atlas_compilations_total";
pub const COMPILE_DURATION_SECONDS: &str = "route_atlas_compile_duration_seconds";
pub const PATTERNS: &str = "route_atlas_patterns";
pub const RESOLUTIONS_TOTAL: &str = "route_atlas_resolutions_total";

/// Install the Prometheus recorder and its scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

pub fn record_compilation(patterns: usize, started: Instant) {
    counter!(COMPILATIONS_TOTAL).increment(1);
    gauge!(PATTERNS).set(patterns as f64);
    histogram!(COMPILE_DURATION_SECONDS).record(started.elapsed().as_secs_f64());
}

pub fn record_resolution(found: bool) {
    let outcome = if found { "found" } else { "not_found" };
    counter!(RESOLUTIONS_TOTAL, "outcome" => outcome).increment(1);
}
