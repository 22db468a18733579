//! Path-based client routes.
//!
//! URLs are ordinary paths (`/uploads`, `/files/docs`), resolved through
//! [`ROUTE_TABLE`](crate::core::routes::ROUTE_TABLE). The dev server falls
//! back to `index.html` for unknown paths so every route can be loaded
//! directly.

use crate::core::routes;

/// Views addressable by URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// File browser rooted at `path`.
    Files {
        path: String,
        show_favourites: bool,
        show_recent: bool,
    },
    Uploads,
    Trash,
    Settings,
    /// No table entry matched.
    NotFound { path: String },
}

impl AppRoute {
    /// File browser at `path` with default filters.
    pub fn files(path: impl Into<String>) -> Self {
        Self::Files {
            path: path.into(),
            show_favourites: false,
            show_recent: false,
        }
    }

    /// Recently used files, browsed from the root.
    pub fn recent() -> Self {
        Self::Files {
            path: "/".to_string(),
            show_favourites: false,
            show_recent: true,
        }
    }

    /// Resolve a location path.
    pub fn from_path(path: &str) -> Self {
        routes::resolve(path)
    }

    /// Canonical location path for this route.
    ///
    /// The favourites filter has no route of its own and is not encoded.
    pub fn to_path(&self) -> String {
        match self {
            Self::Files {
                show_recent: true, ..
            } => "/recent".to_string(),
            Self::Files { path, .. } => match routes::normalize_path(path).as_str() {
                "/" => "/".to_string(),
                folder => format!("/files{}", folder),
            },
            Self::Uploads => "/uploads".to_string(),
            Self::Trash => "/trash".to_string(),
            Self::Settings => "/settings".to_string(),
            Self::NotFound { path } => path.clone(),
        }
    }

    /// Heading shown for this route.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Files {
                show_recent: true, ..
            } => "Recent",
            Self::Files {
                show_favourites: true,
                ..
            } => "Favourites",
            Self::Files { .. } => "Files",
            Self::Uploads => "Uploads",
            Self::Trash => "Trash",
            Self::Settings => "Settings",
            Self::NotFound { .. } => "Not Found",
        }
    }
}

impl Default for AppRoute {
    fn default() -> Self {
        Self::files("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_path(""), AppRoute::files("/"));
        assert_eq!(AppRoute::from_path("/"), AppRoute::files("/"));
        assert_eq!(AppRoute::from_path("/files"), AppRoute::files("/"));
        assert_eq!(AppRoute::from_path("/recent"), AppRoute::recent());
        assert_eq!(AppRoute::from_path("/uploads"), AppRoute::Uploads);
        assert_eq!(
            AppRoute::from_path("/files/papers/2023"),
            AppRoute::files("/papers/2023")
        );
    }

    #[test]
    fn test_route_to_path() {
        assert_eq!(AppRoute::files("/").to_path(), "/");
        assert_eq!(AppRoute::files("papers/2023/").to_path(), "/files/papers/2023");
        assert_eq!(AppRoute::recent().to_path(), "/recent");
        assert_eq!(AppRoute::Trash.to_path(), "/trash");
        assert_eq!(AppRoute::Settings.to_path(), "/settings");
        assert_eq!(
            AppRoute::NotFound {
                path: "/nope".to_string()
            }
            .to_path(),
            "/nope"
        );
    }

    #[test]
    fn test_canonical_paths_round_trip() {
        for path in ["/", "/recent", "/uploads", "/trash", "/settings", "/files/a/b"] {
            assert_eq!(AppRoute::from_path(path).to_path(), path);
        }
    }

    #[test]
    fn test_titles() {
        assert_eq!(AppRoute::files("/docs").title(), "Files");
        assert_eq!(AppRoute::recent().title(), "Recent");
        assert_eq!(AppRoute::from_path("/missing").title(), "Not Found");
    }
}
