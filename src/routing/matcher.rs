//! Segment-wise pattern matching.
//!
//! # Responsibilities
//! - Parse a pattern into static, `:param` and `*` segments
//! - Match a pathname segment by segment, left to right
//! - Capture parameters and compute the specificity score
//!
//! # Design Decisions
//! - Patterns are parsed once, when they enter the breadcrumb index
//! - Static segments compare after percent-decoding both sides
//! - Decoding is lossy: malformed escapes never fail a match
//! - No regex, so matching stays linear in the segment count

use std::borrow::Cow;
use std::collections::BTreeMap;

use percent_encoding::percent_decode_str;

use crate::routing::path::split_segments;

/// Captured parameters, keyed by name (`*` for the splat).
pub type Params = BTreeMap<String, String>;

/// Parameter key of the splat capture.
pub const SPLAT_KEY: &str = "*";

/// One parsed pattern segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal segment, stored decoded.
    Static(String),
    /// `:name`, matches exactly one segment.
    Param(String),
    /// `*`, matches the remaining segments (possibly none).
    Splat,
}

impl Segment {
    fn parse(raw: &str) -> Self {
        if raw == SPLAT_KEY {
            Segment::Splat
        } else if let Some(name) = raw.strip_prefix(':') {
            Segment::Param(name.to_string())
        } else {
            Segment::Static(decode(raw).into_owned())
        }
    }
}

/// Segment counts of a pattern, used to rank competing matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Specificity {
    pub static_segments: u32,
    pub param_segments: u32,
    pub splat_segments: u32,
}

impl Specificity {
    /// Static segments rank highest, then parameters, then splats.
    pub fn score(&self) -> i64 {
        i64::from(self.static_segments) * 1000
            - i64::from(self.param_segments) * 10
            - i64::from(self.splat_segments) * 100
    }
}

/// A successful match of one pattern against one pathname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternMatch {
    pub params: Params,
    pub specificity: Specificity,
}

impl PatternMatch {
    pub fn score(&self) -> i64 {
        self.specificity.score()
    }
}

/// A parsed route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
    specificity: Specificity,
}

impl PathPattern {
    /// Parse a pattern. Normalization matches the one applied to pathnames.
    pub fn parse(pattern: &str) -> Self {
        let segments: Vec<Segment> = split_segments(pattern)
            .iter()
            .map(|s| Segment::parse(s))
            .collect();

        let mut specificity = Specificity::default();
        for segment in &segments {
            match segment {
                Segment::Static(_) => specificity.static_segments += 1,
                Segment::Param(_) => specificity.param_segments += 1,
                Segment::Splat => specificity.splat_segments += 1,
            }
        }

        Self {
            raw: pattern.to_string(),
            segments,
            specificity,
        }
    }

    /// The pattern as registered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn specificity(&self) -> Specificity {
        self.specificity
    }

    /// Match against a raw pathname.
    pub fn matches(&self, pathname: &str) -> Option<PatternMatch> {
        let segments = split_segments(pathname);
        let refs: Vec<&str> = segments.iter().map(String::as_str).collect();
        self.match_segments(&refs)
    }

    /// Match against already split pathname segments.
    ///
    /// Both sides must be fully consumed. A splat anywhere but last never
    /// matches.
    pub fn match_segments(&self, path: &[&str]) -> Option<PatternMatch> {
        let mut params = Params::new();
        let mut j = 0;

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Splat => {
                    if i + 1 != self.segments.len() {
                        return None;
                    }
                    params.insert(SPLAT_KEY.to_string(), path[j..].join("/"));
                    j = path.len();
                }
                Segment::Param(name) => {
                    let value = path.get(j)?;
                    params.insert(name.clone(), decode(value).into_owned());
                    j += 1;
                }
                Segment::Static(expected) => {
                    let value = path.get(j)?;
                    if decode(value) != expected.as_str() {
                        return None;
                    }
                    j += 1;
                }
            }
        }

        (j == path.len()).then(|| PatternMatch {
            params,
            specificity: self.specificity,
        })
    }
}

fn decode(segment: &str) -> Cow<'_, str> {
    percent_decode_str(segment).decode_utf8_lossy()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_match() {
        let pattern = PathPattern::parse("/admin/users");
        let m = pattern.matches("/admin/users/").unwrap();
        assert!(m.params.is_empty());
        assert_eq!(m.score(), 2000);

        assert!(pattern.matches("/admin").is_none());
        assert!(pattern.matches("/admin/users/1").is_none());
        assert!(pattern.matches("/admin/groups").is_none());
    }

    #[test]
    fn test_param_capture_is_decoded() {
        let pattern = PathPattern::parse("/admin/users/:id");
        let m = pattern.matches("/admin/users/jane%20doe").unwrap();
        assert_eq!(m.params.get("id").map(String::as_str), Some("jane doe"));
        assert_eq!(m.score(), 1990);
    }

    #[test]
    fn test_static_compares_decoded() {
        let pattern = PathPattern::parse("/docs/a%20b");
        assert!(pattern.matches("/docs/a b").is_some());
        assert!(pattern.matches("/docs/a%20b").is_some());
    }

    #[test]
    fn test_splat_captures_rest() {
        let pattern = PathPattern::parse("/files/*");
        let m = pattern.matches("/files/a/b/c").unwrap();
        assert_eq!(m.params.get(SPLAT_KEY).map(String::as_str), Some("a/b/c"));
        assert_eq!(m.score(), 900);

        let empty = pattern.matches("/files").unwrap();
        assert_eq!(empty.params.get(SPLAT_KEY).map(String::as_str), Some(""));
    }

    #[test]
    fn test_splat_not_last_never_matches() {
        let pattern = PathPattern::parse("/a/*/b");
        assert!(pattern.matches("/a/x/b").is_none());
        assert!(pattern.matches("/a").is_none());
    }

    #[test]
    fn test_root_pattern() {
        let pattern = PathPattern::parse("/");
        assert!(pattern.matches("").is_some());
        assert!(pattern.matches("/x").is_none());
    }

    #[test]
    fn test_malformed_escape_does_not_fail() {
        let pattern = PathPattern::parse("/q/:term");
        let m = pattern.matches("/q/100%zz").unwrap();
        assert_eq!(m.params.get("term").map(String::as_str), Some("100%zz"));
    }

    #[test]
    fn test_specificity_counts() {
        let pattern = PathPattern::parse("/a/:b/*");
        assert_eq!(
            pattern.specificity(),
            Specificity {
                static_segments: 1,
                param_segments: 1,
                splat_segments: 1,
            }
        );
        assert_eq!(pattern.segments().len(), 3);
    }
}
