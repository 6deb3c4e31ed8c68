//! Breadcrumb index: pattern → trail, in registration order.

use std::collections::HashMap;

use serde::{Serialize, Serializer};

use crate::routing::matcher::PathPattern;
use crate::routing::resolver::{resolve, TrailLookup};
use crate::routing::types::{BreadcrumbEntry, BreadcrumbItem};

/// Ordered mapping from pattern to breadcrumb trail.
///
/// The first registration of a pattern wins. Iteration order is
/// registration order, which is also the resolver's tie-break order.
#[derive(Debug, Clone, Default)]
pub struct BreadcrumbIndex {
    entries: Vec<BreadcrumbEntry>,
    patterns: Vec<PathPattern>,
    positions: HashMap<String, usize>,
}

impl BreadcrumbIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a trail under `pattern`.
    ///
    /// Returns `false`, leaving the index untouched, if the pattern is
    /// already registered.
    pub fn register(&mut self, pattern: &str, trail: Vec<BreadcrumbItem>) -> bool {
        if self.positions.contains_key(pattern) {
            return false;
        }
        self.positions.insert(pattern.to_string(), self.entries.len());
        self.patterns.push(PathPattern::parse(pattern));
        self.entries.push(BreadcrumbEntry {
            pattern: pattern.to_string(),
            trail,
        });
        true
    }

    /// Trail registered for an exact pattern.
    pub fn get(&self, pattern: &str) -> Option<&[BreadcrumbItem]> {
        self.positions
            .get(pattern)
            .map(|&i| self.entries[i].trail.as_slice())
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.positions.contains_key(pattern)
    }

    /// Entries in registration order.
    pub fn entries(&self) -> &[BreadcrumbEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the most specific trail for a runtime pathname.
    pub fn resolve(&self, pathname: &str) -> TrailLookup<'_> {
        resolve(pathname, self)
    }

    pub(crate) fn compiled(&self) -> impl Iterator<Item = (&PathPattern, &BreadcrumbEntry)> {
        self.patterns.iter().zip(self.entries.iter())
    }
}

impl PartialEq for BreadcrumbIndex {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for BreadcrumbIndex {}

impl Serialize for BreadcrumbIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trail(label: &str, path: &str) -> Vec<BreadcrumbItem> {
        vec![BreadcrumbItem::new(label, path)]
    }

    #[test]
    fn test_first_registration_wins() {
        let mut index = BreadcrumbIndex::new();
        assert!(index.register("/a/b", trail("first", "/a/b")));
        assert!(!index.register("/a/b", trail("second", "/a/b")));

        assert_eq!(index.len(), 1);
        assert_eq!(index.get("/a/b").unwrap()[0].label, "first");
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let mut index = BreadcrumbIndex::new();
        index.register("/z", trail("z", "/z"));
        index.register("/a", trail("a", "/a"));
        index.register("/m", trail("m", "/m"));

        let order: Vec<&str> = index.entries().iter().map(|e| e.pattern.as_str()).collect();
        assert_eq!(order, vec!["/z", "/a", "/m"]);
    }

    #[test]
    fn test_lookup_misses() {
        let index = BreadcrumbIndex::new();
        assert!(index.is_empty());
        assert!(index.get("/nope").is_none());
        assert!(!index.contains("/nope"));
    }

    #[test]
    fn test_serializes_as_entry_list() {
        let mut index = BreadcrumbIndex::new();
        index.register("/a", trail("A", "/a"));
        let json = serde_json::to_value(&index).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "pattern": "/a", "trail": [{ "label": "A", "path": "/a" }] }])
        );
    }
}
