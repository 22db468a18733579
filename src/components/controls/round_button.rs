use leptos::prelude::*;

use super::css;
use crate::config::DEFAULT_TOOLTIP;

/// Circular icon button. `tooltip` doubles as the image alt text.
#[component]
pub fn RoundButton(
    img: &'static str,
    #[prop(default = DEFAULT_TOOLTIP)] tooltip: &'static str,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
) -> impl IntoView {
    let on_click = move |ev: leptos::ev::MouseEvent| {
        if let Some(cb) = on_click {
            cb.run(ev);
        }
    };

    view! {
        <div class=css::roundButton>
            <button on:click=on_click title=tooltip>
                <img src=img alt=tooltip />
            </button>
            <p class=css::tooltip>
                <span>{tooltip}</span>
            </p>
        </div>
    }
}
