use leptos::prelude::*;

use super::css;
use crate::components::icons as ic;

#[component]
pub fn UploadButton(
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
) -> impl IntoView {
    let on_click = move |ev: leptos::ev::MouseEvent| {
        if let Some(cb) = on_click {
            cb.run(ev);
        }
    };

    view! {
        <button class=css::uploadButton on:click=on_click>
            <img src=ic::UPLOAD_ARROW alt="" />
            <span>"Upload"</span>
        </button>
    }
}
