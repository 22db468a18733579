//! Two-segment percentage bar.
//!
//! The first segment is filled to the normalized percentage, the second
//! covers the rest and is left out when the bar is full. Invalid values
//! render as an empty bar (see [`BarSegments::for_value`]).

use leptos::prelude::*;

use crate::core::BarSegments;

stylance::import_crate_style!(css, "src/components/percentage_bar/percentage_bar.module.css");

/// Horizontal bar for a ratio (`0..=1`) or a percentage (`1..=100`).
#[component]
pub fn PercentageBar(#[prop(into)] value: Signal<f64>) -> impl IntoView {
    let segments = Memo::new(move |_| BarSegments::for_value(value.get()));

    view! {
        <div
            class=css::percentageBar
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=move || segments.get().filled.get().to_string()
        >
            <div class=css::filled style=move || segments.get().filled.css_width()></div>
            {move || {
                segments.get().remainder.map(|remainder| {
                    view! { <div class=css::remainder style=remainder.css_width()></div> }
                })
            }}
        </div>
    }
}
