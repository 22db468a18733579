//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::Window;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Set `document.title`.
pub fn set_document_title(title: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Current `location.pathname`, percent-decoded.
pub fn location_path() -> String {
    let raw = window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    js_sys::decode_uri_component(&raw)
        .ok()
        .and_then(|decoded| decoded.as_string())
        .unwrap_or(raw)
}

/// Push `path` onto the session history (adds a back-button entry).
///
/// `pushState` does not fire `popstate`; callers update reactive state
/// themselves.
pub fn push_path(path: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let url = encode_path(path);
        let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url));
    }
}

/// Percent-encode each segment of `path`, keeping the `/` separators.
///
/// Segments may contain `#` or `?`, which must not start a fragment or query.
fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| String::from(js_sys::encode_uri_component(segment)))
        .collect::<Vec<_>>()
        .join("/")
}
