//! Route-addressed views rendered by the [`Outlet`](crate::components::router::Outlet).
//!
//! The storage views are placeholders until the backend API is available.

mod files;
mod not_found;
mod settings;
mod trash;
mod uploads;

pub use files::FilesView;
pub use not_found::NotFoundView;
pub use settings::SettingsView;
pub use trash::TrashView;
pub use uploads::UploadsView;

use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/views/views.module.css");

/// Shared frame for views: heading plus body.
#[component]
fn ViewFrame(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class=css::view>
            <h2 class=css::title>{title}</h2>
            {children()}
        </section>
    }
}
