//! Left-hand sidebar: upload action, navigation and quota usage.
//!
//! - [`Sidebar`] - Container composing the pieces below
//! - [`SidebarNav`] - Ordered list of navigation links
//! - [`StorageUse`] - Quota usage label and bar

mod nav;
#[allow(clippy::module_inception)]
mod sidebar;
mod storage_use;

pub use nav::SidebarNav;
pub use sidebar::Sidebar;
pub use storage_use::StorageUse;

stylance::import_crate_style!(css, "src/components/sidebar/sidebar.module.css");
