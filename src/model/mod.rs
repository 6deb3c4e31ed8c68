//! Navigation data model.
//!
//! # Data Flow
//! ```text
//! config file ([[modules]] tables)
//!     → Module → Category → Page → PageRoute children (recursive)
//!     → routing::compiler (clones, writes full_path on the clone)
//!     → enriched Module tree handed to navigation menus
//! ```
//!
//! # Design Decisions
//! - Renderables and icons are opaque tags; the rendering layer resolves them
//! - Permission strings are carried through untouched
//! - `full_path` is never read from input, only written by the compiler

pub mod category;
pub mod module;
pub mod page;

pub use category::Category;
pub use module::Module;
pub use page::{BreadcrumbLabel, IconRef, Page, PageRoute, Renderable};
