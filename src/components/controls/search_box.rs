use leptos::prelude::*;

use super::RoundButton;
use super::css;
use crate::components::icons as ic;
use crate::config::DEFAULT_SEARCH_PLACEHOLDER;

/// Search input with a search button and a search-settings button.
///
/// `on_search` receives the trimmed query when the search button is clicked
/// or Enter is pressed; empty queries are not submitted.
#[component]
pub fn SearchBox(
    #[prop(default = DEFAULT_SEARCH_PLACEHOLDER)] placeholder: &'static str,
    #[prop(optional)] on_search: Option<Callback<String>>,
    #[prop(optional)] on_settings: Option<Callback<()>>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let submit = move || {
        let Some(input) = input_ref.get() else {
            return;
        };
        let query = input.value().trim().to_string();
        if let Some(cb) = on_search
            && !query.is_empty()
        {
            cb.run(query);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            submit();
        }
    };

    let on_search_click = Callback::new(move |_: leptos::ev::MouseEvent| submit());
    let on_settings_click = Callback::new(move |_: leptos::ev::MouseEvent| {
        if let Some(cb) = on_settings {
            cb.run(());
        }
    });

    view! {
        <div class=css::searchBox>
            <RoundButton img=ic::SEARCH tooltip="Search" on_click=on_search_click />
            <input
                node_ref=input_ref
                type="text"
                name="search"
                placeholder=placeholder
                on:keydown=on_keydown
            />
            <RoundButton
                img=ic::SEARCH_SETTINGS
                tooltip="Search Settings"
                on_click=on_settings_click
            />
        </div>
    }
}
