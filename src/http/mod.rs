//! HTTP API subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → handlers.rs (read the current RouteTable)
//!     → response.rs (JSON bodies, 404 for unknown paths)
//! ```
//!
//! # Endpoints
//! - `GET /health`
//! - `GET /routes` router tree under the shell node
//! - `GET /modules` modules with `full_path`
//! - `GET /breadcrumbs` ordered pattern → trail entries
//! - `GET /resolve?path=...` best trail for a pathname

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
