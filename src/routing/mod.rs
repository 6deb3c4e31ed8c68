//! Route compilation and breadcrumb resolution.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup / reload):
//!     Module[] (configuration)
//!     → compiler.rs (patterns via path.rs, full_path on a copy)
//!     → tree.rs RouteNode tree + breadcrumbs.rs index
//!     → router.rs RouteTable (immutable)
//!
//! Trail Resolution (every navigation):
//!     runtime pathname
//!     → resolver.rs (every pattern via matcher.rs, best score wins)
//!     → Found { pattern, trail, params } or NotFound
//! ```
//!
//! # Design Decisions
//! - Routes compiled once, immutable at runtime
//! - No regex: static, `:param` and trailing `*` segments only
//! - Deterministic: ties go to the first registered pattern
//! - NotFound is a value, not an error

pub mod breadcrumbs;
pub mod compiler;
pub mod matcher;
pub mod path;
pub mod resolver;
pub mod router;
pub mod tree;
pub mod types;

pub use breadcrumbs::BreadcrumbIndex;
pub use compiler::{compile, CompiledRoutes, DuplicatePattern, DuplicatePolicy, RouteCompiler};
pub use matcher::{Params, PathPattern};
pub use resolver::{resolve, Resolution, TrailLookup};
pub use router::RouteTable;
pub use tree::RouteNode;
pub use types::{BreadcrumbEntry, BreadcrumbItem, ConfigurationError};
