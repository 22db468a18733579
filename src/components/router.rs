//! Application router component.
//!
//! Handles path-based routing on top of the History API. Uses native
//! `popstate` events and `pushState` instead of a router crate.
//!
//! # Architecture
//!
//! - **Location path is the source of truth**: [`AppContext::location`]
//!   holds it; the active [`AppRoute`] is derived from it through the route
//!   table
//! - **Layout never re-renders on navigation**: only the [`Outlet`] swaps views
//! - **popstate events**: Browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::views::{FilesView, NotFoundView, SettingsView, TrashView, UploadsView};
use crate::config::APP_NAME;
use crate::core::routes::is_link_active;
use crate::models::AppRoute;
use crate::utils::dom;

/// Context for accessing the current route from any component.
#[derive(Clone, Copy)]
pub struct RouteContext(pub Memo<AppRoute>);

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// Derives the active route from the location, keeps the location in sync
/// with back/forward navigation, and provides [`RouteContext`] to `children`.
#[component]
pub fn AppRouter(children: Children) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Set up popstate listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            ctx.location.set(crate::core::routes::normalize_path(&dom::location_path()));
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let route = Memo::new(move |_| ctx.location.with(|path| AppRoute::from_path(path)));
    provide_context(RouteContext(route));

    Effect::new(move || {
        dom::set_document_title(&format!("{} - {}", route.get().title(), APP_NAME));
    });

    children()
}

// ============================================================================
// Outlet
// ============================================================================

/// Renders the view for the active route.
#[component]
pub fn Outlet() -> impl IntoView {
    let route_ctx = use_context::<RouteContext>().expect("RouteContext must be provided");

    move || match route_ctx.0.get() {
        AppRoute::Files {
            path,
            show_favourites,
            show_recent,
        } => view! {
            <FilesView path=path show_favourites=show_favourites show_recent=show_recent />
        }
        .into_any(),
        AppRoute::Uploads => view! { <UploadsView /> }.into_any(),
        AppRoute::Trash => view! { <TrashView /> }.into_any(),
        AppRoute::Settings => view! { <SettingsView /> }.into_any(),
        AppRoute::NotFound { path } => view! { <NotFoundView path=path /> }.into_any(),
    }
}

// ============================================================================
// Links
// ============================================================================

/// Whether a click should be handled as in-app navigation.
///
/// Modified clicks (new tab, new window, download) and non-primary buttons
/// are left to the browser.
fn is_plain_left_click(ev: &leptos::ev::MouseEvent) -> bool {
    ev.button() == 0 && !(ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key())
}

/// Anchor that navigates in-app and marks itself active for the current
/// location.
///
/// Activity follows [`is_link_active`]; `active_class` is applied and
/// `aria-current="page"` set while active.
#[component]
pub fn NavLink(
    href: &'static str,
    #[prop(default = "")] active_class: &'static str,
    children: Children,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_active = Memo::new(move |_| ctx.location.with(|loc| is_link_active(loc, href)));

    let on_click = move |ev: leptos::ev::MouseEvent| {
        if is_plain_left_click(&ev) {
            ev.prevent_default();
            ctx.navigate_to(href);
        }
    };

    view! {
        <a
            href=href
            class=move || if is_active.get() { active_class } else { "" }
            aria-current=move || is_active.get().then_some("page")
            on:click=on_click
        >
            {children()}
        </a>
    }
}
