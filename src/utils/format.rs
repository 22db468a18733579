//! Formatting utilities for quantities and byte sizes.
//!
//! Byte units are binary (1 KB = 1024 B).

pub const KILOBYTE: u64 = 1024;
pub const MEGABYTE: u64 = 1024 * KILOBYTE;
pub const GIGABYTE: u64 = 1024 * MEGABYTE;

/// Round to `places` decimal places, half away from zero.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    let rounded = (value * factor).round() / factor;
    // Avoid rendering "-0".
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Format a display quantity rounded to two decimals, without trailing zeros.
///
/// `7.39` → `"7.39"`, `15.0` → `"15"`, `2.5` → `"2.5"`.
pub fn format_quantity(value: f64) -> String {
    format!("{}", round_to(value, 2))
}

/// Scale `bytes` into the unit that fits `reference`.
///
/// Used to express a used/total pair in the unit chosen for the total.
pub fn scale_bytes(bytes: u64, reference: u64) -> (f64, &'static str) {
    let (divisor, unit) = if reference >= GIGABYTE {
        (GIGABYTE, "GB")
    } else if reference >= MEGABYTE {
        (MEGABYTE, "MB")
    } else if reference >= KILOBYTE {
        (KILOBYTE, "KB")
    } else {
        (1, "B")
    };
    (bytes as f64 / divisor as f64, unit)
}
