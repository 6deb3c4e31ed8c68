//! Router tree handed to the rendering layer.

use serde::Serialize;

use crate::model::Renderable;

/// A node of the router-ready tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteNode {
    /// Pass-through node at `path`: renders nothing itself, only its
    /// matched child (the first child is the index route).
    Layout {
        path: String,
        children: Vec<RouteNode>,
    },
    /// Rendered when the parent's pattern matches with no further segment.
    Index {
        element: Renderable,
        #[serde(skip_serializing_if = "Option::is_none")]
        error_element: Option<Renderable>,
    },
    /// A route at an absolute pattern.
    Path {
        path: String,
        element: Renderable,
        #[serde(skip_serializing_if = "Option::is_none")]
        error_element: Option<Renderable>,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        children: Vec<RouteNode>,
    },
}

impl RouteNode {
    /// The node's pattern; index nodes have none.
    pub fn path(&self) -> Option<&str> {
        match self {
            RouteNode::Layout { path, .. } | RouteNode::Path { path, .. } => Some(path),
            RouteNode::Index { .. } => None,
        }
    }

    pub fn element(&self) -> Option<&Renderable> {
        match self {
            RouteNode::Index { element, .. } | RouteNode::Path { element, .. } => Some(element),
            RouteNode::Layout { .. } => None,
        }
    }

    pub fn children(&self) -> &[RouteNode] {
        match self {
            RouteNode::Layout { children, .. } | RouteNode::Path { children, .. } => children,
            RouteNode::Index { .. } => &[],
        }
    }

    pub fn is_index(&self) -> bool {
        matches!(self, RouteNode::Index { .. })
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(RouteNode::count).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_and_count() {
        let node = RouteNode::Layout {
            path: "/a/b".into(),
            children: vec![
                RouteNode::Index {
                    element: Renderable::new("list"),
                    error_element: None,
                },
                RouteNode::Path {
                    path: "/a/b/:id".into(),
                    element: Renderable::new("detail"),
                    error_element: None,
                    children: Vec::new(),
                },
            ],
        };

        assert_eq!(node.path(), Some("/a/b"));
        assert!(node.element().is_none());
        assert!(node.children()[0].is_index());
        assert_eq!(node.children()[0].path(), None);
        assert_eq!(node.count(), 3);
    }

    #[test]
    fn test_serialized_shape() {
        let node = RouteNode::Path {
            path: "/x".into(),
            element: Renderable::new("x"),
            error_element: Some(Renderable::new("err")),
            children: Vec::new(),
        };
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            serde_json::json!({ "kind": "path", "path": "/x", "element": "x", "error_element": "err" })
        );
    }
}
