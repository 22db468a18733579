use leptos::prelude::*;

use super::{SidebarNav, StorageUse, css};
use crate::components::controls::UploadButton;
use crate::config::NAV_ITEMS;
use crate::models::StorageUsage;
use crate::utils::log;

/// Sidebar container.
///
/// `usage` is injected by the caller; the sidebar never fetches it itself.
#[component]
pub fn Sidebar(#[prop(into)] usage: Signal<StorageUsage>) -> impl IntoView {
    let on_upload = Callback::new(move |_: leptos::ev::MouseEvent| {
        log::debug("Upload clicked");
    });

    view! {
        <div class=css::sidebar>
            <div class=css::uploadButton>
                <UploadButton on_click=on_upload />
            </div>
            <SidebarNav items=NAV_ITEMS />
            <StorageUse usage=usage />
        </div>
    }
}
