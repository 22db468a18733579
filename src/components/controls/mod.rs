//! Small interactive controls shared by the header and the sidebar.
//!
//! - [`RoundButton`] - Circular icon button with a hover tooltip
//! - [`UploadButton`] - Primary "Upload" call to action
//! - [`SearchBox`] - Search input flanked by search/settings buttons

mod round_button;
mod search_box;
mod upload_button;

pub use round_button::RoundButton;
pub use search_box::SearchBox;
pub use upload_button::UploadButton;

stylance::import_crate_style!(css, "src/components/controls/controls.module.css");
