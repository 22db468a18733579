use leptos::prelude::*;

use super::{ViewFrame, css};

#[component]
pub fn TrashView() -> impl IntoView {
    view! {
        <ViewFrame title="Trash">
            <p class=css::empty>"Trash is empty."</p>
        </ViewFrame>
    }
}
