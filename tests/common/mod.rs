//! Shared fixtures for integration tests.

#![allow(dead_code)]

use route_atlas::config::AtlasConfig;
use route_atlas::model::{Category, IconRef, Module, Page, PageRoute, Renderable};
use route_atlas::routing::RouteTable;

/// Patterns registered by [`sample_modules`], in registration order.
pub const SAMPLE_PATTERNS: [&str; 7] = [
    "/application/reporting",
    "/application/reporting/stats",
    "/settings/administration/users",
    "/settings/administration/users/:id",
    "/settings/administration/users/new",
    "/settings/administration/files",
    "/settings/administration/files/*",
];

fn r(tag: &str) -> Renderable {
    Renderable::new(tag)
}

fn page(route: PageRoute, name: &str, icon: &str) -> Page {
    Page {
        icon: IconRef::new(icon),
        ..Page::new(route, name)
    }
}

/// Two modules covering index pages, parameters, static siblings and splats.
pub fn sample_modules() -> Vec<Module> {
    vec![
        Module {
            module_id: 1,
            name: "Application".into(),
            icon: IconRef::new("apps"),
            permission: "application.access".into(),
            categories: vec![Category {
                category_id: 1,
                name: "Reporting".into(),
                icon: IconRef::new("chart-bar"),
                permission: String::new(),
                pages: vec![
                    page(PageRoute::index(1, r("dashboard")), "Dashboard", "gauge"),
                    page(PageRoute::at(2, "stats", r("stats")), "Stats", "chart-line"),
                ],
            }],
        },
        Module {
            module_id: 2,
            name: "Settings".into(),
            icon: IconRef::new("settings"),
            permission: "settings.access".into(),
            categories: vec![Category {
                category_id: 2,
                name: "Administration".into(),
                icon: IconRef::new("shield-lock"),
                permission: String::new(),
                pages: vec![
                    page(
                        PageRoute::at(3, "users", r("users"))
                            .with_error_element(r("generic-error"))
                            .with_children(vec![
                                PageRoute::index(4, r("user-list")),
                                PageRoute::at(5, ":id", r("user-detail")).with_breadcrumb("Details"),
                                PageRoute::at(6, "new", r("user-create")),
                            ]),
                        "Users",
                        "users",
                    ),
                    page(
                        PageRoute::at(7, "files", r("files")).with_children(vec![
                            PageRoute::at(8, "*", r("file-browser")).with_breadcrumb("Browse"),
                        ]),
                        "Files",
                        "folder",
                    ),
                ],
            }],
        },
    ]
}

pub fn sample_config() -> AtlasConfig {
    AtlasConfig {
        modules: sample_modules(),
        ..AtlasConfig::default()
    }
}

pub fn sample_table() -> RouteTable {
    RouteTable::from_config(&sample_config()).unwrap()
}

/// A module whose only page lives at `/reports/monthly/summary`.
pub fn extra_module() -> Module {
    Module {
        module_id: 3,
        name: "Reports".into(),
        icon: IconRef::default(),
        permission: String::new(),
        categories: vec![Category {
            category_id: 3,
            name: "Monthly".into(),
            icon: IconRef::default(),
            permission: String::new(),
            pages: vec![Page::new(PageRoute::at(9, "summary", r("summary")), "Summary")],
        }],
    }
}
