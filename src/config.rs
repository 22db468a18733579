//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use crate::components::icons as ic;
use crate::models::NavItem;
use crate::utils::log::Level;

// =============================================================================
// Application Metadata
// =============================================================================

/// Product name shown next to the logo.
pub const APP_NAME: &str = "PrivaStore";

/// Id of the element the app mounts into.
pub const MOUNT_ELEMENT_ID: &str = "root";

// =============================================================================
// Logging
// =============================================================================

/// Most verbose level written to the browser console.
pub const LOG_LEVEL: Level = Level::Info;

// =============================================================================
// Navigation
// =============================================================================

/// Sidebar links, in display order.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem::new("File System", ic::FILESYSTEM, "/"),
    NavItem::new("Recent", ic::CLOCK, "/recent"),
    NavItem::new("Uploads", ic::UPLOAD, "/uploads"),
    NavItem::new("Trash", ic::TRASH, "/trash"),
    NavItem::new("Settings", ic::SETTINGS, "/settings"),
];

// =============================================================================
// Controls
// =============================================================================

/// Placeholder text of the header search box.
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search";

/// Tooltip used by round buttons that do not set one.
pub const DEFAULT_TOOLTIP: &str = "Tooltip";

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Storage quota configuration.
pub mod storage {
    /// Endpoint reporting quota usage as JSON.
    pub const USAGE_URL: &str = "/api/storage/usage";

    /// Usage shown until (or unless) the endpoint answers.
    pub const DEFAULT_USED: f64 = 7.39;
    pub const DEFAULT_TOTAL: f64 = 15.0;
    pub const DEFAULT_UNIT: &str = "GB";
}
