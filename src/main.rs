//! route-atlas
//!
//! Compiles a navigation configuration into a router tree and breadcrumb
//! index, and answers breadcrumb lookups from the command line or over HTTP.
//!
//! # Architecture Overview
//!
//! ```text
//!   route-atlas.toml
//!        │
//!        ▼
//!   ┌──────────┐    ┌────────────┐    ┌──────────────────────────┐
//!   │  config  │───▶│  routing   │───▶│        RouteTable        │
//!   │ load +   │    │  compiler  │    │ router tree, breadcrumbs │
//!   │ validate │    └────────────┘    │ enriched modules         │
//!   └──────────┘                      └────────────┬─────────────┘
//!        ▲                                         │
//!        │ watcher (reload)                        ▼
//!        │                              ┌────────────────────┐
//!        └──────────────────────────────│ CLI output / HTTP  │
//!                                       │ /resolve?path=...  │
//!                                       └────────────────────┘
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use route_atlas::config::ConfigWatcher;
use route_atlas::http::response::ResolveResponse;
use route_atlas::http::HttpServer;
use route_atlas::lifecycle::signals::shutdown_on_ctrl_c;
use route_atlas::lifecycle::{bootstrap, Bootstrap, Shutdown};
use route_atlas::observability::metrics::init_metrics;
use route_atlas::routing::TrailLookup;

#[derive(Parser)]
#[command(name = "route-atlas", version)]
#[command(about = "Compile navigation modules into routes and breadcrumb trails", long_about = None)]
struct Cli {
    /// Configuration file.
    #[arg(short, long, default_value = "route-atlas.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and compile the configuration
    Check,
    /// Print the router tree
    Routes,
    /// Print modules with their full paths
    Nav,
    /// Print the breadcrumb index
    Breadcrumbs,
    /// Resolve a pathname to its breadcrumb trail
    Resolve {
        /// Pathname, e.g. /settings/administration/users/42
        path: String,
    },
    /// Serve the breadcrumb API
    Serve {
        /// Recompile when the configuration file changes
        #[arg(long)]
        watch: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let Bootstrap { config, table } = bootstrap(&cli.config)?;

    match cli.command {
        Commands::Check => {
            println!(
                "{}: {} route nodes, {} patterns, {} duplicates",
                cli.config.display(),
                table.root().count(),
                table.breadcrumbs().len(),
                table.duplicates().len()
            );
            for dup in table.duplicates() {
                println!(
                    "  duplicate {} (route {}): kept {:?}, dropped {:?}",
                    dup.pattern, dup.route_id, dup.kept, dup.dropped
                );
            }
        }
        Commands::Routes => println!("{}", serde_json::to_string_pretty(table.root())?),
        Commands::Nav => println!("{}", serde_json::to_string_pretty(table.modules())?),
        Commands::Breadcrumbs => {
            println!("{}", serde_json::to_string_pretty(table.breadcrumbs())?)
        }
        Commands::Resolve { path } => match table.resolve(&path) {
            TrailLookup::Found(resolution) => {
                let body = ResolveResponse::from(&resolution);
                println!("{}", serde_json::to_string_pretty(&body)?);
            }
            TrailLookup::NotFound => {
                eprintln!("no route matches {path}");
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Serve { watch } => {
            if config.observability.metrics_enabled {
                init_metrics(config.observability.metrics_address.parse()?)?;
            }

            let listener = TcpListener::bind(&config.server.bind_address).await?;
            tracing::info!(address = %listener.local_addr()?, "Listening for connections");

            // The watcher handle must outlive the server.
            let (_watcher, updates) = if watch {
                let (watcher, updates) = ConfigWatcher::new(&cli.config);
                (Some(watcher.with_current(config.clone()).run()?), updates)
            } else {
                let (_, updates) = mpsc::unbounded_channel();
                (None, updates)
            };

            let shutdown = Shutdown::new();
            let server = HttpServer::new(config, table);
            let mut server_task = tokio::spawn(server.run(listener, updates, shutdown.subscribe()));

            tokio::select! {
                result = &mut server_task => result??,
                _ = shutdown_on_ctrl_c(&shutdown) => server_task.await??,
            }

            tracing::info!("Shutdown complete");
        }
    }

    Ok(ExitCode::SUCCESS)
}
