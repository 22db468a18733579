//! Data models and types for the application.
//!
//! - [`AppRoute`] - Path-based navigation targets
//! - [`NavItem`] - Static sidebar link descriptors
//! - [`StorageUsage`], [`StorageUsageResponse`] - Quota usage and its wire format

mod nav;
mod route;
mod storage;

pub use nav::NavItem;
pub use route::AppRoute;
pub use storage::{StorageUsage, StorageUsageResponse};
