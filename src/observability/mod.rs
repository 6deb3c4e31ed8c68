//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (compilation and resolution counters)
//!
//! Consumers:
//!     → stderr (pretty or JSON lines)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Metrics are a no-op until a recorder is installed
//! - RUST_LOG overrides the configured log level

pub mod logging;
pub mod metrics;
