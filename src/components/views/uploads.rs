use leptos::prelude::*;

use super::{ViewFrame, css};

#[component]
pub fn UploadsView() -> impl IntoView {
    view! {
        <ViewFrame title="Uploads">
            <p class=css::empty>"No uploads in progress."</p>
        </ViewFrame>
    }
}
