//! UI components built with Leptos.
//!
//! - [`router`] - Path routing, outlet and navigation links
//! - [`header`] - Top bar with logo and search
//! - [`sidebar`] - Navigation and storage usage
//! - [`controls`] - Buttons and search box
//! - [`percentage_bar`] - Two-segment progress bar
//! - [`views`] - Route-addressed views
//! - [`icons`] - Centralized icon asset paths

pub mod controls;
pub mod header;
pub mod icons;
pub mod percentage_bar;
pub mod router;
pub mod sidebar;
pub mod views;
