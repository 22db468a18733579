use leptos::prelude::*;

use super::{ViewFrame, css};

#[component]
pub fn SettingsView() -> impl IntoView {
    view! {
        <ViewFrame title="Settings">
            <p class=css::empty>"There are no settings to change yet."</p>
        </ViewFrame>
    }
}
