//! Pages, child routes and the opaque tags they carry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Names the renderable unit a route instantiates.
///
/// The tag is resolved by the rendering layer; the compiler only copies it
/// into the router tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Renderable(String);

impl Renderable {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Renderable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Names an icon in the UI icon set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct IconRef(String);

impl IconRef {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Breadcrumb label override for child routes such as `:id`.
///
/// `{segment}` expands to the raw path segment (empty for index routes) and
/// `{full_path}` to the computed pattern.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct BreadcrumbLabel(String);

impl BreadcrumbLabel {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Render the label for a concrete route.
    pub fn render(&self, segment: &str, full_path: &str) -> String {
        self.0
            .replace("{segment}", segment)
            .replace("{full_path}", full_path)
    }
}

/// A routable node: either an index route or a route with a path segment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageRoute {
    /// Route identifier, used in error messages.
    pub route_id: u32,

    /// Index routes share their parent's pattern and carry no path.
    #[serde(default)]
    pub index: bool,

    /// Path segment relative to the parent pattern (required unless index).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Absolute pattern, written by the compiler onto its own copy.
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub full_path: Option<String>,

    pub element: Renderable,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_element: Option<Renderable>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breadcrumb: Option<BreadcrumbLabel>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<PageRoute>,
}

impl PageRoute {
    /// An index route rendering `element`.
    pub fn index(route_id: u32, element: Renderable) -> Self {
        Self {
            route_id,
            index: true,
            path: None,
            full_path: None,
            element,
            error_element: None,
            args: None,
            breadcrumb: None,
            children: Vec::new(),
        }
    }

    /// A route at `path` relative to its parent.
    pub fn at(route_id: u32, path: impl Into<String>, element: Renderable) -> Self {
        Self {
            index: false,
            path: Some(path.into()),
            ..Self::index(route_id, element)
        }
    }

    pub fn with_children(mut self, children: Vec<PageRoute>) -> Self {
        self.children = children;
        self
    }

    pub fn with_breadcrumb(mut self, label: impl Into<String>) -> Self {
        self.breadcrumb = Some(BreadcrumbLabel::new(label));
        self
    }

    pub fn with_error_element(mut self, element: Renderable) -> Self {
        self.error_element = Some(element);
        self
    }

    /// The configured path segment, treating an empty string as absent.
    pub fn segment(&self) -> Option<&str> {
        self.path.as_deref().filter(|p| !p.is_empty())
    }
}

/// A sidebar-visible page: a [`PageRoute`] with a name, icon and permission.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Page {
    #[serde(flatten)]
    pub route: PageRoute,

    pub name: String,

    #[serde(default)]
    pub icon: IconRef,

    #[serde(default)]
    pub permission: String,
}

impl Page {
    pub fn new(route: PageRoute, name: impl Into<String>) -> Self {
        Self {
            route,
            name: name.into(),
            icon: IconRef::default(),
            permission: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breadcrumb_label_placeholders() {
        let label = BreadcrumbLabel::new("User {segment}");
        assert_eq!(label.render(":id", "/settings/users/:id"), "User :id");

        let label = BreadcrumbLabel::new("at {full_path}");
        assert_eq!(label.render("new", "/a/new"), "at /a/new");

        let literal = BreadcrumbLabel::new("Profile");
        assert_eq!(literal.render("x", "/x"), "Profile");
    }

    #[test]
    fn test_empty_path_is_absent() {
        let route = PageRoute::at(1, "", Renderable::new("x"));
        assert_eq!(route.segment(), None);
        assert_eq!(
            PageRoute::at(2, "users", Renderable::new("x")).segment(),
            Some("users")
        );
    }

    #[test]
    fn test_page_deserializes_flat() {
        let page: Page = toml::from_str(
            r#"
            route_id = 7
            path = "users"
            element = "users"
            error_element = "generic-error"
            name = "Users"
            permission = "users.view"
            full_path = "/injected"

            [[children]]
            route_id = 8
            path = ":id"
            element = "user-detail"
            breadcrumb = "User"
            "#,
        )
        .unwrap();

        assert_eq!(page.name, "Users");
        assert_eq!(page.route.segment(), Some("users"));
        assert_eq!(page.route.full_path, None);
        assert_eq!(page.route.children.len(), 1);
        assert_eq!(
            page.route.children[0].breadcrumb,
            Some(BreadcrumbLabel::new("User"))
        );
    }
}
