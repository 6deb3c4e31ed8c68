//! Compiled route table.
//!
//! # Responsibilities
//! - Own the output of one compilation
//! - Root the router tree under the application shell
//! - Answer trail lookups for runtime pathnames
//!
//! # Design Decisions
//! - Built explicitly from configuration and passed by reference
//! - Immutable after construction (thread-safe without locks)
//! - Reloads build a new table instead of mutating the current one

use std::time::Instant;

use crate::config::AtlasConfig;
use crate::model::{Module, Renderable};
use crate::observability::metrics;
use crate::routing::breadcrumbs::BreadcrumbIndex;
use crate::routing::compiler::{DuplicatePattern, DuplicatePolicy, RouteCompiler};
use crate::routing::resolver::TrailLookup;
use crate::routing::tree::RouteNode;
use crate::routing::types::ConfigurationError;

/// Pattern of the shell node every compiled route hangs under.
pub const ROOT_PATH: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    root: RouteNode,
    modules: Vec<Module>,
    breadcrumbs: BreadcrumbIndex,
    duplicates: Vec<DuplicatePattern>,
}

impl RouteTable {
    /// Compile `modules` under a shell rendering `shell`.
    pub fn new(
        modules: &[Module],
        shell: Renderable,
        policy: DuplicatePolicy,
    ) -> Result<Self, ConfigurationError> {
        let started = Instant::now();
        let compiled = RouteCompiler::new(policy).compile(modules)?;
        metrics::record_compilation(compiled.breadcrumbs.len(), started);

        Ok(Self {
            root: RouteNode::Path {
                path: ROOT_PATH.to_string(),
                element: shell,
                error_element: None,
                children: compiled.routes,
            },
            modules: compiled.modules,
            breadcrumbs: compiled.breadcrumbs,
            duplicates: compiled.duplicates,
        })
    }

    pub fn from_config(config: &AtlasConfig) -> Result<Self, ConfigurationError> {
        Self::new(
            &config.modules,
            config.app.shell.clone(),
            config.compiler.duplicate_patterns,
        )
    }

    /// The router tree, rooted at the shell node.
    pub fn root(&self) -> &RouteNode {
        &self.root
    }

    /// Top-level compiled routes (the shell's children).
    pub fn routes(&self) -> &[RouteNode] {
        self.root.children()
    }

    /// Modules with `full_path` populated, for navigation menus.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn breadcrumbs(&self) -> &BreadcrumbIndex {
        &self.breadcrumbs
    }

    pub fn duplicates(&self) -> &[DuplicatePattern] {
        &self.duplicates
    }

    /// Best breadcrumb trail for a runtime pathname.
    pub fn resolve(&self, pathname: &str) -> TrailLookup<'_> {
        let lookup = self.breadcrumbs.resolve(pathname);
        metrics::record_resolution(lookup.is_found());
        lookup
    }
}
