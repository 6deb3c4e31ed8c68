//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Initialize logging
//! - Compile the route table
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Logging starts before compilation so compiler warnings are visible

use std::path::Path;

use thiserror::Error;

use crate::config::{load_config, AtlasConfig, ConfigError};
use crate::observability::logging::init_logging;
use crate::routing::{ConfigurationError, RouteTable};

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("route table error: {0}")]
    Routes(#[from] ConfigurationError),
}

/// A loaded configuration and the table compiled from it.
#[derive(Debug)]
pub struct Bootstrap {
    pub config: AtlasConfig,
    pub table: RouteTable,
}

/// Load `path`, start logging and compile the route table.
pub fn bootstrap(path: &Path) -> Result<Bootstrap, StartupError> {
    let config = load_config(path)?;

    if let Err(e) = init_logging(&config.observability) {
        eprintln!("logging already initialized: {e}");
    }

    let table = RouteTable::from_config(&config)?;

    tracing::info!(
        config = ?path,
        modules = table.modules().len(),
        patterns = table.breadcrumbs().len(),
        duplicates = table.duplicates().len(),
        "Route table compiled"
    );

    Ok(Bootstrap { config, table })
}
