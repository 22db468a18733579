//! Declarative route table.
//!
//! Each [`RouteEntry`] pairs a path pattern with a builder for the
//! [`AppRoute`] it resolves to. Patterns are `/`-separated static segments,
//! optionally ending in a `*name` segment that captures one or more trailing
//! segments. Entries are tried in order; the first match wins and unmatched
//! paths resolve to [`AppRoute::NotFound`].

use crate::models::AppRoute;

/// Parameters captured while matching a pattern.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams {
    /// Segments captured by a trailing `*name` segment, joined with `/`.
    pub rest: Option<String>,
}

impl RouteParams {
    /// Captured tail as an absolute path (`/` when nothing was captured).
    pub fn rest_path(&self) -> String {
        match &self.rest {
            Some(rest) => format!("/{}", rest),
            None => "/".to_string(),
        }
    }
}

/// A single row of the route table.
pub struct RouteEntry {
    pub pattern: &'static str,
    build: fn(&RouteParams) -> AppRoute,
}

impl RouteEntry {
    pub const fn new(pattern: &'static str, build: fn(&RouteParams) -> AppRoute) -> Self {
        Self { pattern, build }
    }

    /// Match `path` (already normalized) against this entry.
    pub fn resolve(&self, path: &str) -> Option<AppRoute> {
        match_pattern(self.pattern, path).map(|params| (self.build)(&params))
    }
}

fn file_system(_: &RouteParams) -> AppRoute {
    AppRoute::files("/")
}

fn folder(params: &RouteParams) -> AppRoute {
    AppRoute::files(params.rest_path())
}

fn recent(_: &RouteParams) -> AppRoute {
    AppRoute::recent()
}

fn uploads(_: &RouteParams) -> AppRoute {
    AppRoute::Uploads
}

fn trash(_: &RouteParams) -> AppRoute {
    AppRoute::Trash
}

fn settings(_: &RouteParams) -> AppRoute {
    AppRoute::Settings
}

/// Application routes, in match order.
pub const ROUTE_TABLE: &[RouteEntry] = &[
    RouteEntry::new("/", file_system),
    RouteEntry::new("/files", file_system),
    RouteEntry::new("/files/*path", folder),
    RouteEntry::new("/recent", recent),
    RouteEntry::new("/uploads", uploads),
    RouteEntry::new("/trash", trash),
    RouteEntry::new("/settings", settings),
];

/// Resolve a location path through [`ROUTE_TABLE`].
pub fn resolve(path: &str) -> AppRoute {
    let path = normalize_path(path);
    ROUTE_TABLE
        .iter()
        .find_map(|entry| entry.resolve(&path))
        .unwrap_or(AppRoute::NotFound { path })
}

/// Collapse repeated slashes, drop a trailing slash, and ensure a leading one.
///
/// `""` and `"//"` become `"/"`; `"files//docs/"` becomes `"/files/docs"`.
pub fn normalize_path(path: &str) -> String {
    let segments: Vec<&str> = segments(path).collect();
    format!("/{}", segments.join("/"))
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Match a normalized path against a pattern.
pub fn match_pattern(pattern: &str, path: &str) -> Option<RouteParams> {
    let mut pattern_segments = segments(pattern);
    let path_segments: Vec<&str> = segments(path).collect();
    let mut idx = 0;

    while let Some(expected) = pattern_segments.next() {
        if expected.starts_with('*') {
            // Wildcard must be last and capture at least one segment.
            if pattern_segments.next().is_some() || idx >= path_segments.len() {
                return None;
            }
            return Some(RouteParams {
                rest: Some(path_segments[idx..].join("/")),
            });
        }
        if path_segments.get(idx) != Some(&expected) {
            return None;
        }
        idx += 1;
    }

    (idx == path_segments.len()).then(RouteParams::default)
}

/// Whether a navigation link to `href` is active at `current`.
///
/// A link is active on an exact match or when `current` lies below `href`.
/// The root link is active only on `/` itself.
pub fn is_link_active(current: &str, href: &str) -> bool {
    let current = normalize_path(current);
    let href = normalize_path(href);

    if href == "/" {
        return current == "/";
    }
    current == href
        || current
            .strip_prefix(href.as_str())
            .is_some_and(|tail| tail.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("//"), "/");
        assert_eq!(normalize_path("/uploads/"), "/uploads");
        assert_eq!(normalize_path("files//docs/"), "/files/docs");
    }

    #[test]
    fn test_match_static_pattern() {
        assert_eq!(match_pattern("/", "/"), Some(RouteParams::default()));
        assert_eq!(match_pattern("/trash", "/trash"), Some(RouteParams::default()));
        assert_eq!(match_pattern("/trash", "/trash/old"), None);
        assert_eq!(match_pattern("/trash", "/"), None);
        assert_eq!(match_pattern("/", "/trash"), None);
    }

    #[test]
    fn test_match_wildcard_pattern() {
        assert_eq!(match_pattern("/files/*path", "/files"), None);
        let params = match_pattern("/files/*path", "/files/docs/2024").unwrap();
        assert_eq!(params.rest.as_deref(), Some("docs/2024"));
        assert_eq!(params.rest_path(), "/docs/2024");
        assert_eq!(match_pattern("/files/*path", "/uploads/docs"), None);
    }

    #[test]
    fn test_resolve_table_routes() {
        assert_eq!(resolve("/"), AppRoute::files("/"));
        assert_eq!(resolve("/files"), AppRoute::files("/"));
        assert_eq!(resolve("/recent"), AppRoute::recent());
        assert_eq!(resolve("/uploads"), AppRoute::Uploads);
        assert_eq!(resolve("/trash"), AppRoute::Trash);
        assert_eq!(resolve("/settings"), AppRoute::Settings);
    }

    #[test]
    fn test_resolve_folder_deep_link() {
        assert_eq!(resolve("/files/docs/2024/"), AppRoute::files("/docs/2024"));
        assert_eq!(resolve("/files//photos"), AppRoute::files("/photos"));
    }

    #[test]
    fn test_resolve_unknown_is_not_found() {
        assert_eq!(
            resolve("/unknown"),
            AppRoute::NotFound {
                path: "/unknown".to_string()
            }
        );
        assert_eq!(
            resolve("/uploads/extra/"),
            AppRoute::NotFound {
                path: "/uploads/extra".to_string()
            }
        );
    }

    #[test]
    fn test_link_activity() {
        assert!(is_link_active("/", "/"));
        assert!(!is_link_active("/files", "/"));
        assert!(!is_link_active("/recent", "/"));
        assert!(is_link_active("/recent", "/recent"));
        assert!(is_link_active("/recent/", "/recent"));
        assert!(is_link_active("/trash/item", "/trash"));
        assert!(!is_link_active("/trashcan", "/trash"));
        assert!(!is_link_active("/settings", "/uploads"));
    }
}
