use leptos::prelude::*;

use super::css;
use crate::components::icons as ic;
use crate::components::percentage_bar::PercentageBar;
use crate::models::StorageUsage;

/// Quota indicator: label, usage bar and `used of total` details.
#[component]
pub fn StorageUse(#[prop(into)] usage: Signal<StorageUsage>) -> impl IntoView {
    let ratio = Signal::derive(move || usage.with(StorageUsage::ratio));
    let details = Signal::derive(move || usage.with(StorageUsage::details));

    view! {
        <div class=css::storageUse>
            <div class=css::label>
                <img src=ic::CLOUD alt="" />
                <span>"Storage"</span>
            </div>
            <PercentageBar value=ratio />
            <span class=css::details>{details}</span>
        </div>
    }
}
