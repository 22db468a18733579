//! JSON requests over the browser Fetch API.
//!
//! Requests are same-origin `GET`s that bypass the HTTP cache, so every call
//! reports what the server says now. A timer raced against the request bounds
//! how long a call can take.

use js_sys::{Array, Promise};
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, RequestMode, Response, Window};

use crate::core::error::FetchError;

/// `GET` `url` and deserialize its JSON body.
///
/// Fails with [`FetchError::Timeout`] when no response arrives within
/// `timeout_ms`.
pub async fn fetch_json<T: DeserializeOwned>(url: &str, timeout_ms: i32) -> Result<T, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;
    let request = get_request(url)?;

    let response: Response = within(&window, window.fetch_with_request(&request), timeout_ms)
        .await?
        .dyn_into()
        .map_err(|_| FetchError::InvalidContent)?;
    if !response.ok() {
        return Err(FetchError::HttpError(response.status()));
    }

    let body = response.text().map_err(|_| FetchError::ResponseReadFailed)?;
    let text = JsFuture::from(body)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?
        .as_string()
        .ok_or(FetchError::InvalidContent)?;

    serde_json::from_str(&text).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

fn get_request(url: &str) -> Result<Request, FetchError> {
    let init = RequestInit::new();
    init.set_method("GET");
    init.set_mode(RequestMode::SameOrigin);
    init.set_cache(RequestCache::NoStore);
    Request::new_with_str_and_init(url, &init).map_err(|_| FetchError::RequestCreationFailed)
}

/// Await `promise`, giving up after `timeout_ms`.
///
/// The timer settles with `undefined`; a fetch never does, so an `undefined`
/// winner means the timer fired first.
async fn within(window: &Window, promise: Promise, timeout_ms: i32) -> Result<JsValue, FetchError> {
    let timer = Promise::new(&mut |resolve, _reject| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    match JsFuture::from(Promise::race(&Array::of2(&promise, &timer))).await {
        Ok(value) if value.is_undefined() => Err(FetchError::Timeout),
        Ok(value) => Ok(value),
        Err(err) => Err(FetchError::NetworkError(rejection_message(&err))),
    }
}

/// Fetch rejects with a `TypeError`, not a string.
fn rejection_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "request failed".to_string())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    use crate::config::{FETCH_TIMEOUT_MS, storage::USAGE_URL};
    use crate::models::StorageUsageResponse;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_every_call_reaches_the_network() {
        // No usage endpoint behind the test server: each call must fail on
        // its own rather than replay an earlier answer.
        for _ in 0..2 {
            let result = fetch_json::<StorageUsageResponse>(USAGE_URL, FETCH_TIMEOUT_MS).await;
            assert!(result.is_err());
        }
    }

    #[wasm_bindgen_test]
    fn test_rejection_message_reads_type_errors() {
        let err: JsValue = js_sys::TypeError::new("Failed to fetch").into();
        assert_eq!(rejection_message(&err), "Failed to fetch");
        assert_eq!(rejection_message(&JsValue::from_str("offline")), "offline");
        assert_eq!(rejection_message(&JsValue::NULL), "request failed");
    }
}
