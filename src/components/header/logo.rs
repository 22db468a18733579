use leptos::prelude::*;

use super::css;
use crate::components::icons as ic;
use crate::config::APP_NAME;

#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <div class=css::logo>
            <img src=ic::LOGO alt="" />
            <h1>{APP_NAME}</h1>
        </div>
    }
}
