use leptos::prelude::*;

use super::{ViewFrame, css};
use crate::app::AppContext;
use crate::models::AppRoute;

/// Catch-all for paths with no route table entry.
#[component]
pub fn NotFoundView(path: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <ViewFrame title="Not Found">
            <p class=css::empty>
                "Nothing lives at "<code>{path}</code>"."
            </p>
            <button
                class=css::action
                on:click=move |_| ctx.navigate(&AppRoute::default())
            >
                "Back to files"
            </button>
        </ViewFrame>
    }
}
