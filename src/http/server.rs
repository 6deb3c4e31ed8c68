//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the breadcrumb API handlers
//! - Wire up middleware (request ID, tracing, timeout)
//! - Swap in recompiled route tables on config updates
//! - Serve until the shutdown signal fires

use std::sync::Arc;
use std::time::Duration;

use arc_swap::ArcSwap;
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AtlasConfig;
use crate::http::handlers::{get_breadcrumbs, get_health, get_modules, get_resolve, get_routes};
use crate::http::request::UuidRequestId;
use crate::lifecycle::ShutdownSignal;
use crate::routing::{ConfigurationError, RouteTable};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    table: Arc<ArcSwap<RouteTable>>,
}

impl AppState {
    pub fn new(table: RouteTable) -> Self {
        Self {
            table: Arc::new(ArcSwap::from_pointee(table)),
        }
    }

    /// The route table serving requests right now.
    pub fn current(&self) -> Arc<RouteTable> {
        self.table.load_full()
    }

    /// Compile `config` and swap it in. On error the current table stays.
    pub fn reload(&self, config: &AtlasConfig) -> Result<(), ConfigurationError> {
        match RouteTable::from_config(config) {
            Ok(table) => {
                tracing::info!(
                    patterns = table.breadcrumbs().len(),
                    duplicates = table.duplicates().len(),
                    "Route table reloaded"
                );
                self.table.store(Arc::new(table));
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Reloaded config does not compile, keeping current routes");
                Err(e)
            }
        }
    }
}

/// HTTP server exposing the compiled route table.
pub struct HttpServer {
    router: Router,
    config: AtlasConfig,
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server serving `table`.
    pub fn new(config: AtlasConfig, table: RouteTable) -> Self {
        let state = AppState::new(table);
        let router = Self::build_router(&config, state.clone());
        Self {
            router,
            config,
            state,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &AtlasConfig, state: AppState) -> Router {
        Router::new()
            .route("/health", get(get_health))
            .route("/routes", get(get_routes))
            .route("/modules", get(get_modules))
            .route("/breadcrumbs", get(get_breadcrumbs))
            .route("/resolve", get(get_resolve))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// The fully layered router, for driving the API in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get a reference to the config the server was started with.
    pub fn config(&self) -> &AtlasConfig {
        &self.config
    }

    /// Run the server on `listener`.
    ///
    /// Configurations received on `config_updates` are compiled and swapped
    /// in; listener settings are not reloaded.
    pub async fn run(
        self,
        listener: TcpListener,
        mut config_updates: mpsc::UnboundedReceiver<AtlasConfig>,
        shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let state = self.state.clone();
        let mut reload_shutdown = shutdown.clone();
        let reloader = tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = reload_shutdown.recv() => break,
                    update = config_updates.recv() => match update {
                        Some(config) => {
                            let _ = state.reload(&config);
                        }
                        None => break,
                    },
                }
            }
        });

        let mut serve_shutdown = shutdown;
        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move { serve_shutdown.recv().await })
            .await?;

        reloader.abort();
        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
