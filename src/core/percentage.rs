//! Percentage normalization for progress-style bars.
//!
//! Callers hand in either a ratio (`0.0..=1.0`) or a percentage
//! (`1.0..=100.0`). Anything else is rejected by [`normalize`]; display code
//! goes through [`Percentage::from_value_lossy`], which logs the rejection and
//! falls back to 0% so the bar always renders.

use std::fmt;

use crate::core::error::PercentageError;
use crate::utils::log;

/// Whole-number percentage, always within `0..=100`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Self = Self(0);
    pub const FULL: Self = Self(100);

    pub const fn get(self) -> u8 {
        self.0
    }

    /// `100 - self`.
    pub const fn complement(self) -> Self {
        Self(100 - self.0)
    }

    /// Normalize `value`, logging and substituting 0% when it is invalid.
    pub fn from_value_lossy(value: f64) -> Self {
        normalize(value).unwrap_or_else(|err| {
            log::error(&err.to_string());
            Self::ZERO
        })
    }

    /// CSS width declaration for this percentage, e.g. `width: 49%`.
    pub fn css_width(self) -> String {
        format!("width: {}%", self.0)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Convert a ratio or percentage into a [`Percentage`].
///
/// - `0.0..=1.0` is a ratio: scaled by 100 and rounded.
/// - `(1.0, 100.0]` is already a percentage: rounded.
/// - Negative, above 100, NaN and infinities are errors.
///
/// A value of exactly `1.0` is read as a ratio (100%), not as 1%.
pub fn normalize(value: f64) -> Result<Percentage, PercentageError> {
    if !value.is_finite() {
        return Err(PercentageError::NotFinite(value));
    }
    let scaled = if (0.0..=1.0).contains(&value) {
        value * 100.0
    } else if value > 1.0 && value <= 100.0 {
        value
    } else {
        return Err(PercentageError::OutOfRange(value));
    };
    // Range checked above, so the cast cannot truncate.
    Ok(Percentage(scaled.round() as u8))
}

/// The two segments drawn by a percentage bar.
///
/// `remainder` is omitted when the bar is completely filled, otherwise
/// `filled + remainder == 100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarSegments {
    pub filled: Percentage,
    pub remainder: Option<Percentage>,
}

impl BarSegments {
    /// Segments for a raw bar value, via [`Percentage::from_value_lossy`].
    pub fn for_value(value: f64) -> Self {
        Self::from(Percentage::from_value_lossy(value))
    }
}

impl From<Percentage> for BarSegments {
    fn from(filled: Percentage) -> Self {
        Self {
            filled,
            remainder: (filled != Percentage::FULL).then(|| filled.complement()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(segments: BarSegments) -> u8 {
        segments.filled.get() + segments.remainder.map_or(0, Percentage::get)
    }

    #[test]
    fn test_ratio_is_scaled_and_rounded() {
        assert_eq!(normalize(0.0), Ok(Percentage::ZERO));
        assert_eq!(normalize(0.5).unwrap().get(), 50);
        assert_eq!(normalize(0.123).unwrap().get(), 12);
        assert_eq!(normalize(0.125).unwrap().get(), 13);
        assert_eq!(normalize(0.996).unwrap().get(), 100);
        assert_eq!(normalize(1.0), Ok(Percentage::FULL));
    }

    #[test]
    fn test_percentage_passes_through() {
        assert_eq!(normalize(1.5).unwrap().get(), 2);
        assert_eq!(normalize(42.0).unwrap().get(), 42);
        assert_eq!(normalize(99.4).unwrap().get(), 99);
        assert_eq!(normalize(100.0), Ok(Percentage::FULL));
    }

    #[test]
    fn test_invalid_values_are_rejected_with_their_value() {
        assert_eq!(normalize(-5.0), Err(PercentageError::OutOfRange(-5.0)));
        assert_eq!(normalize(-0.01), Err(PercentageError::OutOfRange(-0.01)));
        assert_eq!(normalize(100.5), Err(PercentageError::OutOfRange(100.5)));
        assert_eq!(
            normalize(f64::INFINITY),
            Err(PercentageError::NotFinite(f64::INFINITY))
        );
        assert!(matches!(
            normalize(f64::NAN),
            Err(PercentageError::NotFinite(v)) if v.is_nan()
        ));
    }

    #[test]
    fn test_lossy_falls_back_to_zero() {
        assert_eq!(Percentage::from_value_lossy(-5.0), Percentage::ZERO);
        assert_eq!(Percentage::from_value_lossy(250.0), Percentage::ZERO);
        assert_eq!(Percentage::from_value_lossy(7.39 / 0.0), Percentage::ZERO);
        assert_eq!(Percentage::from_value_lossy(0.5).get(), 50);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_invalid_value_is_logged_as_error() {
        use crate::utils::log::{self, Level};

        log::take_captured();
        assert_eq!(BarSegments::for_value(-5.0).filled, Percentage::ZERO);
        assert_eq!(
            log::take_captured(),
            vec![(Level::Error, "Invalid percentage value: -5".to_string())]
        );

        BarSegments::for_value(0.5);
        BarSegments::for_value(100.0);
        assert!(log::take_captured().is_empty());
    }

    #[test]
    fn test_segments() {
        let half = BarSegments::for_value(0.5);
        assert_eq!(half.filled.get(), 50);
        assert_eq!(half.remainder.map(Percentage::get), Some(50));

        let full = BarSegments::for_value(100.0);
        assert_eq!(full.filled, Percentage::FULL);
        assert_eq!(full.remainder, None);

        let invalid = BarSegments::for_value(-5.0);
        assert_eq!(invalid.filled, Percentage::ZERO);
        assert_eq!(invalid.remainder, Some(Percentage::FULL));
    }

    #[test]
    fn test_segments_always_sum_to_100() {
        for step in 0..=1000 {
            let ratio = f64::from(step) / 1000.0;
            let segments = BarSegments::for_value(ratio);
            assert_eq!(total(segments), 100, "ratio {ratio}");
            assert_eq!(segments.filled.get(), (ratio * 100.0).round() as u8);
        }
        for pct in 2..=100u8 {
            let segments = BarSegments::for_value(f64::from(pct));
            assert_eq!(segments.filled.get(), pct);
            assert_eq!(total(segments), 100);
        }
    }

    #[test]
    fn test_display_and_css() {
        let p = normalize(49.0).unwrap();
        assert_eq!(p.to_string(), "49%");
        assert_eq!(p.css_width(), "width: 49%");
        assert_eq!(Percentage::FULL.complement(), Percentage::ZERO);
    }
}
