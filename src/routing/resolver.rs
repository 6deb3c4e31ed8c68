//! Trail resolution: runtime pathname → best matching breadcrumb trail.
//!
//! # Responsibilities
//! - Match the pathname against every registered pattern
//! - Pick the highest specificity score, first registered on ties
//! - Report not-found as a value, never as an error
//!
//! # Design Decisions
//! - Pure read of the compiled index; safe to call concurrently
//! - O(patterns × segments), acceptable for statically known route tables

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;

use crate::routing::breadcrumbs::BreadcrumbIndex;
use crate::routing::matcher::{Params, SPLAT_KEY};
use crate::routing::path::{build_path, split_segments};
use crate::routing::types::BreadcrumbItem;

/// Characters escaped when a parameter value is put back into a path.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// The winning pattern for a pathname.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution<'a> {
    pub pattern: &'a str,
    pub trail: &'a [BreadcrumbItem],
    pub params: Params,
}

impl Resolution<'_> {
    /// The trail with captured parameters substituted into each item path.
    pub fn materialize(&self) -> Vec<BreadcrumbItem> {
        self.trail
            .iter()
            .map(|item| BreadcrumbItem::new(&item.label, substitute_params(&item.path, &self.params)))
            .collect()
    }
}

/// Outcome of a trail lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrailLookup<'a> {
    Found(Resolution<'a>),
    /// No registered pattern matches the pathname.
    NotFound,
}

impl<'a> TrailLookup<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, TrailLookup::Found(_))
    }

    pub fn found(self) -> Option<Resolution<'a>> {
        match self {
            TrailLookup::Found(resolution) => Some(resolution),
            TrailLookup::NotFound => None,
        }
    }
}

/// Resolve `pathname` against every pattern in `index`.
pub fn resolve<'a>(pathname: &str, index: &'a BreadcrumbIndex) -> TrailLookup<'a> {
    let segments = split_segments(pathname);
    let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

    let mut best: Option<(i64, Resolution<'a>)> = None;

    for (pattern, entry) in index.compiled() {
        let Some(m) = pattern.match_segments(&segments) else {
            continue;
        };
        let score = m.score();
        // Strictly greater: on a tie the earlier registration stays.
        if best.as_ref().map_or(true, |(s, _)| score > *s) {
            best = Some((
                score,
                Resolution {
                    pattern: &entry.pattern,
                    trail: &entry.trail,
                    params: m.params,
                },
            ));
        }
    }

    match best {
        Some((_, resolution)) => TrailLookup::Found(resolution),
        None => TrailLookup::NotFound,
    }
}

/// Replace `:name` and `*` segments of a pattern with captured values.
///
/// Segments without a captured value are left as written.
pub fn substitute_params(pattern: &str, params: &Params) -> String {
    let segments: Vec<String> = split_segments(pattern)
        .into_iter()
        .map(|segment| {
            if segment == SPLAT_KEY {
                params.get(SPLAT_KEY).cloned().unwrap_or(segment)
            } else if let Some(name) = segment.strip_prefix(':') {
                params
                    .get(name)
                    .map(|v| utf8_percent_encode(v, SEGMENT).to_string())
                    .unwrap_or(segment)
            } else {
                segment
            }
        })
        .collect();

    let refs: Vec<&str> = segments.iter().map(String::as_str).collect();
    build_path(&refs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(patterns: &[&str]) -> BreadcrumbIndex {
        let mut index = BreadcrumbIndex::new();
        for p in patterns {
            index.register(p, vec![BreadcrumbItem::new(*p, *p)]);
        }
        index
    }

    #[test]
    fn test_static_beats_param() {
        let index = index_of(&["/admin/users/:id", "/admin/users/new"]);
        let found = resolve("/admin/users/new", &index).found().unwrap();
        assert_eq!(found.pattern, "/admin/users/new");
        assert!(found.params.is_empty());

        let found = resolve("/admin/users/42", &index).found().unwrap();
        assert_eq!(found.pattern, "/admin/users/:id");
        assert_eq!(found.params.get("id").map(String::as_str), Some("42"));
    }

    #[test]
    fn test_param_beats_splat() {
        let index = index_of(&["/files/*", "/files/:name"]);
        let found = resolve("/files/readme", &index).found().unwrap();
        assert_eq!(found.pattern, "/files/:name");

        let found = resolve("/files/a/b/c", &index).found().unwrap();
        assert_eq!(found.pattern, "/files/*");
        assert_eq!(found.params.get("*").map(String::as_str), Some("a/b/c"));
    }

    #[test]
    fn test_tie_goes_to_first_registered() {
        let index = index_of(&["/a/:x", "/a/:y"]);
        let found = resolve("/a/1", &index).found().unwrap();
        assert_eq!(found.pattern, "/a/:x");
        assert_eq!(found.params.get("x").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_not_found() {
        let index = index_of(&["/admin/users", "/application/dashboard"]);
        assert_eq!(resolve("/unknown/path", &index), TrailLookup::NotFound);
        assert!(!resolve("/", &index).is_found());
    }

    #[test]
    fn test_normalizes_query() {
        let index = index_of(&["/admin/users"]);
        assert!(resolve("  admin/users///", &index).is_found());
    }

    #[test]
    fn test_materialize_substitutes_params() {
        let mut index = BreadcrumbIndex::new();
        index.register(
            "/settings/users/:id/files/*",
            vec![
                BreadcrumbItem::new("Settings", "/settings"),
                BreadcrumbItem::new("Users", "/settings/users"),
                BreadcrumbItem::new("id", "/settings/users/:id"),
                BreadcrumbItem::new("files", "/settings/users/:id/files/*"),
            ],
        );

        let found = resolve("/settings/users/jane%20doe/files/x/y", &index)
            .found()
            .unwrap();
        let links: Vec<String> = found.materialize().into_iter().map(|i| i.path).collect();
        assert_eq!(
            links,
            vec![
                "/settings",
                "/settings/users",
                "/settings/users/jane%20doe",
                "/settings/users/jane%20doe/files/x/y",
            ]
        );
    }

    #[test]
    fn test_substitute_keeps_unknown_params() {
        let params = Params::new();
        assert_eq!(substitute_params("/a/:id", &params), "/a/:id");

        let mut params = Params::new();
        params.insert("*".into(), String::new());
        assert_eq!(substitute_params("/files/*", &params), "/files");
    }
}
