use leptos::prelude::*;

use super::{ViewFrame, css};

/// File browser for the folder at `path`.
#[component]
pub fn FilesView(
    path: String,
    #[prop(optional)] show_favourites: bool,
    #[prop(optional)] show_recent: bool,
) -> impl IntoView {
    let title = if show_recent {
        "Recent"
    } else if show_favourites {
        "Favourites"
    } else {
        "Files"
    };

    view! {
        <ViewFrame title=title>
            <p class=css::location>{path}</p>
            <p class=css::empty>"No files here yet."</p>
        </ViewFrame>
    }
}
