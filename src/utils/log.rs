//! Console logging.
//!
//! Thin wrappers over the browser console filtered by
//! [`LOG_LEVEL`](crate::config::LOG_LEVEL). Outside the browser every call is
//! a no-op, except in native unit tests, where messages are captured per
//! thread for `take_captured`.

use crate::config::LOG_LEVEL;

/// Log severity, ordered from most to least severe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Error,
    Warn,
    Info,
    Debug,
}

/// Whether messages at `level` pass the configured filter.
#[inline]
pub fn enabled(level: Level) -> bool {
    level <= LOG_LEVEL
}

pub fn error(msg: &str) {
    write(Level::Error, msg);
}

pub fn warn(msg: &str) {
    write(Level::Warn, msg);
}

pub fn info(msg: &str) {
    write(Level::Info, msg);
}

pub fn debug(msg: &str) {
    write(Level::Debug, msg);
}

#[cfg(target_arch = "wasm32")]
fn write(level: Level, msg: &str) {
    use web_sys::console;

    if !enabled(level) {
        return;
    }
    let msg = wasm_bindgen::JsValue::from_str(msg);
    match level {
        Level::Error => console::error_1(&msg),
        Level::Warn => console::warn_1(&msg),
        Level::Info => console::info_1(&msg),
        Level::Debug => console::debug_1(&msg),
    }
}

#[cfg(all(not(target_arch = "wasm32"), not(test)))]
fn write(_level: Level, _msg: &str) {}

#[cfg(all(not(target_arch = "wasm32"), test))]
thread_local! {
    static CAPTURED: std::cell::RefCell<Vec<(Level, String)>> =
        const { std::cell::RefCell::new(Vec::new()) };
}

#[cfg(all(not(target_arch = "wasm32"), test))]
fn write(level: Level, msg: &str) {
    if enabled(level) {
        CAPTURED.with(|captured| captured.borrow_mut().push((level, msg.to_string())));
    }
}

/// Drain the messages logged on this thread so far.
#[cfg(all(not(target_arch = "wasm32"), test))]
pub fn take_captured() -> Vec<(Level, String)> {
    CAPTURED.with(|captured| captured.take())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Error < Level::Warn);
        assert!(Level::Info < Level::Debug);
        assert!(enabled(Level::Error));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_messages_below_level_are_dropped() {
        take_captured();
        error("disk full");
        debug("navigate /trash");
        assert_eq!(take_captured(), vec![(Level::Error, "disk full".to_string())]);
        assert!(take_captured().is_empty());
    }
}
