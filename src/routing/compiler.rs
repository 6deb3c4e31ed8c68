//! Route compilation: module configuration → router tree + breadcrumb index.
//!
//! # Responsibilities
//! - Compose each node's absolute pattern from module, category and path
//! - Write `full_path` onto a copy of the configuration tree
//! - Register one breadcrumb trail per distinct pattern
//! - Build the router-ready tree mirroring the input structure
//!
//! # Design Decisions
//! - Fail fast: path-shape errors abort compilation
//! - The caller's modules are never mutated
//! - Each call starts from empty state, so compiling twice is idempotent

use serde::{Deserialize, Serialize};

use crate::model::{Module, PageRoute};
use crate::routing::breadcrumbs::BreadcrumbIndex;
use crate::routing::path::{build_path, join_paths, must, prettify_segment, slug, strip_slashes};
use crate::routing::tree::RouteNode;
use crate::routing::types::{BreadcrumbItem, ConfigurationError};

/// Label used for index children without an explicit override.
pub const INDEX_LABEL: &str = "(index)";

/// What to do when a node produces an already registered pattern.
///
/// The first registration is kept in every case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Drop the later trail silently.
    Ignore,
    /// Drop the later trail, log it and record it in the output.
    #[default]
    Warn,
    /// Fail compilation.
    Reject,
}

/// A registration dropped because its pattern was already taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicatePattern {
    pub pattern: String,
    /// Route whose trail was dropped.
    pub route_id: u32,
    /// Leaf label of the trail that was kept.
    pub kept: String,
    /// Leaf label of the trail that was dropped.
    pub dropped: String,
}

/// Output of a compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompiledRoutes {
    /// Copy of the input with `full_path` populated on every route.
    pub modules: Vec<Module>,
    /// Router-ready tree, one top-level node per page.
    pub routes: Vec<RouteNode>,
    /// Pattern → trail, in registration order.
    pub breadcrumbs: BreadcrumbIndex,
    /// Reported duplicates (empty unless the policy is `Warn`).
    pub duplicates: Vec<DuplicatePattern>,
}

/// Compile with the default duplicate policy.
///
/// The default is [`DuplicatePolicy::Warn`]: later duplicates are still
/// dropped, but logged and listed in [`CompiledRoutes::duplicates`]. Use
/// [`RouteCompiler`] with [`DuplicatePolicy::Ignore`] to drop them silently.
pub fn compile(modules: &[Module]) -> Result<CompiledRoutes, ConfigurationError> {
    RouteCompiler::new(DuplicatePolicy::default()).compile(modules)
}

/// Single-use compiler holding the state of one compilation.
#[derive(Debug, Default)]
pub struct RouteCompiler {
    policy: DuplicatePolicy,
    index: BreadcrumbIndex,
    duplicates: Vec<DuplicatePattern>,
}

impl RouteCompiler {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            index: BreadcrumbIndex::new(),
            duplicates: Vec::new(),
        }
    }

    /// Compile `modules` into routes, breadcrumbs and enriched modules.
    pub fn compile(mut self, modules: &[Module]) -> Result<CompiledRoutes, ConfigurationError> {
        let mut modules = modules.to_vec();
        let mut routes = Vec::new();

        for module in &mut modules {
            let module_seg = slug(&module.name);
            let module_crumb = BreadcrumbItem::new(&module.name, build_path(&[module_seg.as_str()]));

            for category in &mut module.categories {
                let category_seg = slug(&category.name);
                let category_base = build_path(&[module_seg.as_str(), category_seg.as_str()]);
                let parent_trail = [
                    module_crumb.clone(),
                    BreadcrumbItem::new(&category.name, &category_base),
                ];

                for page in &mut category.pages {
                    let node = self.compile_node(
                        &mut page.route,
                        Some(page.name.as_str()),
                        &category_base,
                        &parent_trail,
                    )?;
                    routes.push(node);
                }
            }
        }

        tracing::debug!(
            modules = modules.len(),
            routes = routes.len(),
            patterns = self.index.len(),
            duplicates = self.duplicates.len(),
            "Routes compiled"
        );

        Ok(CompiledRoutes {
            modules,
            routes,
            breadcrumbs: self.index,
            duplicates: self.duplicates,
        })
    }

    /// Compile one node and its descendants.
    ///
    /// `page_name` is set for top-level pages, whose label is their name;
    /// child routes derive theirs.
    fn compile_node(
        &mut self,
        route: &mut PageRoute,
        page_name: Option<&str>,
        parent_pattern: &str,
        parent_trail: &[BreadcrumbItem],
    ) -> Result<RouteNode, ConfigurationError> {
        let pattern = node_pattern(route, parent_pattern)?;
        route.full_path = Some(pattern.clone());

        let label = match page_name {
            Some(name) => name.to_string(),
            None => child_label(route, &pattern),
        };
        let mut trail = parent_trail.to_vec();
        trail.push(BreadcrumbItem::new(label, &pattern));

        // An index child sharing its parent's pattern is the normal shape.
        let expected_duplicate = page_name.is_none() && route.index;
        self.register(&pattern, &trail, route.route_id, expected_duplicate)?;

        let mut children = Vec::with_capacity(route.children.len());
        for child in &mut route.children {
            children.push(self.compile_node(child, None, &pattern, &trail)?);
        }

        Ok(route_node(route, pattern, children))
    }

    fn register(
        &mut self,
        pattern: &str,
        trail: &[BreadcrumbItem],
        route_id: u32,
        expected_duplicate: bool,
    ) -> Result<(), ConfigurationError> {
        if self.index.register(pattern, trail.to_vec()) || expected_duplicate {
            return Ok(());
        }

        let kept = leaf_label(self.index.get(pattern).unwrap_or_default());
        let dropped = leaf_label(trail);

        match self.policy {
            DuplicatePolicy::Ignore => Ok(()),
            DuplicatePolicy::Warn => {
                tracing::warn!(
                    pattern = %pattern,
                    route_id,
                    kept = %kept,
                    dropped = %dropped,
                    "Duplicate route pattern, keeping first registration"
                );
                self.duplicates.push(DuplicatePattern {
                    pattern: pattern.to_string(),
                    route_id,
                    kept,
                    dropped,
                });
                Ok(())
            }
            DuplicatePolicy::Reject => Err(ConfigurationError::DuplicatePattern {
                pattern: pattern.to_string(),
                route_id,
            }),
        }
    }
}

/// Pattern of `route` under `parent`: the parent itself for index routes,
/// parent joined with the required path otherwise.
fn node_pattern(route: &PageRoute, parent: &str) -> Result<String, ConfigurationError> {
    if route.index {
        if let Some(path) = route.segment() {
            return Err(ConfigurationError::IndexWithPath {
                route_id: route.route_id,
                path: path.to_string(),
            });
        }
        return Ok(parent.to_string());
    }

    // A path of only slashes would register a pattern indistinguishable
    // from its parent's.
    let message = format!("non-index route {} must have a path", route.route_id);
    let segment = must(route.segment().map(strip_slashes), &message)?;
    Ok(join_paths(parent, segment))
}

fn child_label(route: &PageRoute, pattern: &str) -> String {
    let segment = route.segment().map(strip_slashes).unwrap_or_default();
    match &route.breadcrumb {
        Some(label) => label.render(segment, pattern),
        None if route.index => INDEX_LABEL.to_string(),
        None => prettify_segment(segment),
    }
}

fn leaf_label(trail: &[BreadcrumbItem]) -> String {
    trail.last().map(|item| item.label.clone()).unwrap_or_default()
}

fn route_node(route: &PageRoute, pattern: String, children: Vec<RouteNode>) -> RouteNode {
    let element = route.element.clone();
    let error_element = route.error_element.clone();

    if !route.index {
        return RouteNode::Path {
            path: pattern,
            element,
            error_element,
            children,
        };
    }

    if children.is_empty() {
        return RouteNode::Index {
            element,
            error_element,
        };
    }

    let mut nested = Vec::with_capacity(children.len() + 1);
    nested.push(RouteNode::Index {
        element,
        error_element,
    });
    nested.extend(children);
    RouteNode::Layout {
        path: pattern,
        children: nested,
    }
}
