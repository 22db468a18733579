use leptos::prelude::*;

use super::{Logo, css};
use crate::app::AppContext;
use crate::components::controls::{RoundButton, SearchBox};
use crate::components::icons as ic;
use crate::models::AppRoute;
use crate::utils::log;

/// Application header with logo, search box, help and settings buttons.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let on_search = Callback::new(move |query: String| {
        log::info(&format!("search requested: {}", query));
    });

    let on_search_settings = Callback::new(move |_: ()| {
        log::debug("Search settings clicked");
    });

    let on_help = Callback::new(move |_: leptos::ev::MouseEvent| {
        log::debug("Help clicked");
    });

    let on_settings = Callback::new(move |_: leptos::ev::MouseEvent| {
        ctx.navigate(&AppRoute::Settings);
    });

    view! {
        <header class=css::header>
            <Logo />
            <div class=css::headerSearch>
                <SearchBox on_search=on_search on_settings=on_search_settings />
            </div>
            <div class=css::headerControls>
                <RoundButton img=ic::HELP tooltip="Help" on_click=on_help />
                <RoundButton img=ic::SETTINGS tooltip="Settings" on_click=on_settings />
            </div>
        </header>
    }
}
