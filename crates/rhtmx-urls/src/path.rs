//! Path utilities for splitting templates and joining scope prefixes
//!
//! All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

/// Splits a path template into its segments
///
/// One leading and one trailing empty element are dropped, so `/a/b`,
/// `/a/b/` and `a/b` all produce `["a", "b"]`. Interior empty segments are
/// kept as-is.
///
/// # Examples
///
/// ```
/// use rhtmx_urls::path::split_path;
///
/// assert_eq!(split_path("/users/:id"), vec!["users", ":id"]);
/// assert_eq!(split_path("/users/:id/"), vec!["users", ":id"]);
/// assert!(split_path("/").is_empty());
/// assert!(split_path("").is_empty());
/// ```
pub fn split_path(path: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = path.split('/').collect();

    if segments.first() == Some(&"") {
        segments.remove(0);
    }
    if segments.last() == Some(&"") {
        segments.pop();
    }

    segments
}

/// Joins a scope prefix and a path into one template
///
/// Returns `Cow::Borrowed` when the prefix is empty and the path already
/// starts with `/` (the common case for routes on the root scope).
///
/// # Examples
///
/// ```
/// use rhtmx_urls::path::join_prefix;
///
/// assert_eq!(join_prefix("", "/about"), "/about");
/// assert_eq!(join_prefix("/admin", "/users/:id"), "/admin/users/:id");
/// assert_eq!(join_prefix("/admin/", "users"), "/admin/users");
/// assert_eq!(join_prefix("/admin", "/"), "/admin");
/// assert_eq!(join_prefix("", ""), "/");
/// ```
pub fn join_prefix<'a>(prefix: &str, path: &'a str) -> Cow<'a, str> {
    let prefix = prefix.trim_end_matches('/');

    if prefix.is_empty() && path.starts_with('/') {
        return Cow::Borrowed(path);
    }

    let tail = path.trim_start_matches('/').trim_end_matches('/');

    let joined = match (prefix.is_empty(), tail.is_empty()) {
        (true, true) => "/".to_string(),
        (true, false) => format!("/{}", tail),
        (false, true) => normalize_prefix(prefix),
        (false, false) => format!("{}/{}", normalize_prefix(prefix), tail),
    };

    Cow::Owned(joined)
}

/// Makes sure a non-empty prefix starts with exactly one `/`
fn normalize_prefix(prefix: &str) -> String {
    format!("/{}", prefix.trim_start_matches('/'))
}
