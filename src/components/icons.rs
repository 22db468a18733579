//! Centralized icon asset paths.
//!
//! Icons are static SVGs served from `public/images`. Every component
//! references its icon through these constants, so renaming or re-theming an
//! icon only touches this file.

pub const LOGO: &str = "images/logo.svg";

// Header and search
pub const SEARCH: &str = "images/icons/search.svg";
pub const SEARCH_SETTINGS: &str = "images/icons/switches.svg";
pub const HELP: &str = "images/icons/help.svg";
pub const SETTINGS: &str = "images/icons/settings.svg";

// Sidebar
pub const UPLOAD_ARROW: &str = "images/icons/top-arrow.svg";
pub const FILESYSTEM: &str = "images/icons/filesystem.svg";
pub const CLOCK: &str = "images/icons/clock.svg";
pub const UPLOAD: &str = "images/icons/upload.svg";
pub const TRASH: &str = "images/icons/trash.svg";
pub const CLOUD: &str = "images/icons/cloud.svg";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_paths_are_relative_svgs() {
        for path in [
            LOGO,
            SEARCH,
            SEARCH_SETTINGS,
            HELP,
            SETTINGS,
            UPLOAD_ARROW,
            FILESYSTEM,
            CLOCK,
            UPLOAD,
            TRASH,
            CLOUD,
        ] {
            assert!(path.starts_with("images/"), "{path}");
            assert!(path.ends_with(".svg"), "{path}");
        }
    }
}
