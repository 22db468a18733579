//! Root application module.
//!
//! Contains the main App component, the AppContext definition and the page
//! layout binding the header, the sidebar and the routed view.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::header::Header;
use crate::components::router::{AppRouter, Outlet};
use crate::components::sidebar::Sidebar;
use crate::config::{FETCH_TIMEOUT_MS, storage::USAGE_URL};
use crate::core::routes::normalize_path;
use crate::models::{AppRoute, StorageUsage, StorageUsageResponse};
use crate::utils::{dom, fetch_json, log};

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Normalized location path. The active route is derived from it.
    pub location: RwSignal<String>,

    /// Quota usage shown in the sidebar.
    pub storage: RwSignal<StorageUsage>,
}

impl AppContext {
    /// Creates a context starting at `location` with the default usage.
    pub fn new(location: &str) -> Self {
        Self {
            location: RwSignal::new(normalize_path(location)),
            storage: RwSignal::new(StorageUsage::default()),
        }
    }

    /// Navigate to `path`: push a history entry and re-render the outlet.
    ///
    /// Navigating to the current location is a no-op.
    pub fn navigate_to(&self, path: &str) {
        let path = normalize_path(path);
        if self.location.with_untracked(|current| *current == path) {
            return;
        }
        log::debug(&format!("navigate {}", path));
        dom::push_path(&path);
        self.location.set(path);
    }

    /// Navigate to a typed route.
    pub fn navigate(&self, route: &AppRoute) {
        self.navigate_to(&route.to_path());
    }
}

/// Replace the default usage with the server's current figures.
///
/// Keeps the default on failure.
fn load_storage_usage(ctx: AppContext) {
    spawn_local(async move {
        match fetch_json::<StorageUsageResponse>(USAGE_URL, FETCH_TIMEOUT_MS).await {
            Ok(response) => ctx.storage.set(response.into()),
            Err(e) => log::warn(&format!("storage usage unavailable: {}", e)),
        }
    });
}

// ============================================================================
// Components
// ============================================================================

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Starts loading storage usage
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(&dom::location_path());
    provide_context(ctx);
    load_storage_usage(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::errorScreen>
                    <div class=css::errorCard>
                        <h1 class=css::errorTitle>"Something went wrong"</h1>
                        <p class=css::errorText>
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details class=css::errorDetails>
                            <summary>"Error details"</summary>
                            <ul>
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            class=css::reloadButton
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter>
                <AppLayout />
            </AppRouter>
        </ErrorBoundary>
    }
}

/// Page layout: header on top, sidebar on the left, routed view in the rest.
#[component]
fn AppLayout() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    view! {
        <div class=css::app>
            <Header />
            <div class=css::body>
                <Sidebar usage=ctx.storage />
                <main class=css::content>
                    <Outlet />
                </main>
            </div>
        </div>
    }
}
