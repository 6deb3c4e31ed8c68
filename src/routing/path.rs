//! Path string utilities.
//!
//! Pure functions shared by the compiler (pattern construction) and the
//! resolver (pathname normalization).

use crate::routing::types::ConfigurationError;

/// Build an absolute path from URL-safe segments.
///
/// Each segment is stripped of surrounding slashes and empty segments are
/// dropped: `build_path(&["admin", "users"])` is `/admin/users`,
/// `build_path(&[])` is `/`.
pub fn build_path(segments: &[&str]) -> String {
    let joined = segments
        .iter()
        .map(|s| strip_slashes(s))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    format!("/{joined}")
}

/// Join an absolute parent path with a child segment using exactly one `/`.
///
/// Only the parent's trailing and the child's leading slashes are removed.
pub fn join_paths(parent: &str, child: &str) -> String {
    format!(
        "{}/{}",
        parent.trim_end_matches('/'),
        child.trim_start_matches('/')
    )
}

/// Remove leading and trailing runs of `/`.
pub fn strip_slashes(value: &str) -> &str {
    value.trim_matches('/')
}

/// Return `value` if it is present and non-empty.
pub fn must<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, ConfigurationError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigurationError::MissingValue(message.to_string())),
    }
}

/// Turn a human name into a URL segment.
///
/// Lowercases and trims, collapses whitespace runs into `-`, then drops
/// anything outside `[a-z0-9-_/:%]`. Whitespace is the set in
/// [`is_slug_whitespace`], not `char::is_whitespace`.
pub fn slug(value: &str) -> String {
    let lowered = value.trim_matches(is_slug_whitespace).to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for c in lowered.chars() {
        if is_slug_whitespace(c) {
            if !in_whitespace {
                out.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if matches!(c, 'a'..='z' | '0'..='9' | '-' | '_' | '/' | ':' | '%') {
            out.push(c);
        }
    }

    out
}

/// Whitespace for [`slug`]: the Unicode space separators, tab, vertical tab,
/// form feed, the line terminators LF, CR, U+2028 and U+2029, and U+FEFF.
/// U+0085 is not whitespace here.
pub fn is_slug_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Readable fallback label for a path segment.
///
/// `:id` becomes `id`; `user-settings` becomes `user settings`.
pub fn prettify_segment(segment: &str) -> String {
    match segment.strip_prefix(':') {
        Some(name) => name.to_string(),
        None => segment.replace('-', " "),
    }
}

/// Normalize a pathname or pattern: trimmed, one leading `/`, no trailing
/// slashes. Empty input and the root both become `/`.
pub fn normalize_pathname(pathname: &str) -> String {
    let trimmed = pathname.trim();
    let without_trailing = trimmed.trim_end_matches('/');
    if without_trailing.is_empty() {
        return "/".to_string();
    }
    if without_trailing.starts_with('/') {
        without_trailing.to_string()
    } else {
        format!("/{without_trailing}")
    }
}

/// Split a path into its non-empty segments; the root yields none.
pub fn split_segments(pathname: &str) -> Vec<String> {
    normalize_pathname(pathname)
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_path() {
        assert_eq!(build_path(&["admin", "users"]), "/admin/users");
        assert_eq!(build_path(&[]), "/");
        assert_eq!(build_path(&["/admin/", "", "//users"]), "/admin/users");
    }

    #[test]
    fn test_join_paths() {
        assert_eq!(join_paths("/admin/users/", "/:id"), "/admin/users/:id");
        assert_eq!(join_paths("/admin/users", ":id"), "/admin/users/:id");
        assert_eq!(join_paths("/a", "b/c/"), "/a/b/c/");
        assert_eq!(join_paths("/", "x"), "/x");
    }

    #[test]
    fn test_strip_slashes() {
        assert_eq!(strip_slashes("///a/b//"), "a/b");
        assert_eq!(strip_slashes("/"), "");
        assert_eq!(strip_slashes("plain"), "plain");
    }

    #[test]
    fn test_must() {
        assert_eq!(must(Some("users"), "msg"), Ok("users"));
        assert_eq!(
            must(None, "Non-index Page must have a path"),
            Err(ConfigurationError::MissingValue(
                "Non-index Page must have a path".into()
            ))
        );
        assert!(must(Some(""), "empty").is_err());
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("  User Management "), "user-management");
        assert_eq!(slug("Reporting\t &  Stats"), "reporting--stats");
        assert_eq!(slug("Café Menu"), "caf-menu");
        assert_eq!(slug(":id"), ":id");
        assert_eq!(slug("50% Off/Deals_2"), "50%-off/deals_2");
        assert_eq!(slug("!!!"), "");
    }

    #[test]
    fn test_slug_whitespace_set() {
        assert_eq!(slug("a\u{85}b"), "ab");
        assert_eq!(slug("a\u{feff}b"), "a-b");
        assert_eq!(slug("a\u{3000}\u{2003}b"), "a-b");
        assert_eq!(slug("\u{feff} Admin \u{a0}"), "admin");
        assert!(!is_slug_whitespace('\u{85}'));
        assert!(is_slug_whitespace('\u{2028}'));
    }

    #[test]
    fn test_prettify_segment() {
        assert_eq!(prettify_segment(":id"), "id");
        assert_eq!(prettify_segment("user-settings"), "user settings");
        assert_eq!(prettify_segment("plain"), "plain");
    }

    #[test]
    fn test_normalize_pathname() {
        assert_eq!(normalize_pathname(""), "/");
        assert_eq!(normalize_pathname("   "), "/");
        assert_eq!(normalize_pathname("/"), "/");
        assert_eq!(normalize_pathname("///"), "/");
        assert_eq!(normalize_pathname("admin/users/"), "/admin/users");
        assert_eq!(normalize_pathname(" /admin//"), "/admin");
    }

    #[test]
    fn test_split_segments() {
        assert!(split_segments("/").is_empty());
        assert_eq!(split_segments("/a/b"), vec!["a", "b"]);
        assert_eq!(split_segments("a//b/"), vec!["a", "b"]);
    }
}
