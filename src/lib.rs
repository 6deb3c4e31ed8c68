//! Declarative route compiler and breadcrumb resolver.
//!
//! A static module → category → page configuration is compiled once into a
//! router tree, a breadcrumb index and enriched navigation modules. The
//! resulting [`RouteTable`] resolves runtime pathnames to their most
//! specific breadcrumb trail.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod observability;
pub mod routing;

pub use config::AtlasConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{compile, RouteTable, TrailLookup};
