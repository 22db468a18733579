//! Top bar: logo, search and global controls.

#[allow(clippy::module_inception)]
mod header;
mod logo;

pub use header::Header;
pub use logo::Logo;

stylance::import_crate_style!(css, "src/components/header/header.module.css");
