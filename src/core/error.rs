//! Custom error types for the application.
//!
//! Each domain gets its own error enum:
//!
//! - [`PercentageError`] - Values that cannot be shown on a percentage bar
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests

use thiserror::Error;

/// Rejected input to the percentage normalization rule.
///
/// Both variants carry the original offending value so diagnostics report
/// what the caller actually passed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PercentageError {
    /// Negative, or larger than 100.
    #[error("Invalid percentage value: {0}")]
    OutOfRange(f64),
    /// NaN or infinite, e.g. a usage ratio with a zero total.
    #[error("Invalid percentage value: {0} is not a finite number")]
    NotFinite(f64),
}

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("Browser window not available")]
    NoWindow,
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// The request was rejected, e.g. while offline.
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Non-2xx response.
    #[error("HTTP error: {0}")]
    HttpError(u16),
    #[error("Failed to read response")]
    ResponseReadFailed,
    #[error("Invalid response content")]
    InvalidContent,
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    #[error("Request timed out")]
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_error_reports_offending_value() {
        let err = PercentageError::OutOfRange(-5.0);
        assert_eq!(err.to_string(), "Invalid percentage value: -5");

        let err = PercentageError::OutOfRange(250.5);
        assert_eq!(err.to_string(), "Invalid percentage value: 250.5");
    }

    #[test]
    fn test_not_finite_message() {
        let err = PercentageError::NotFinite(f64::INFINITY);
        assert_eq!(
            err.to_string(),
            "Invalid percentage value: inf is not a finite number"
        );
        assert_eq!(
            PercentageError::NotFinite(f64::NAN).to_string(),
            "Invalid percentage value: NaN is not a finite number"
        );
    }

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(FetchError::HttpError(404).to_string(), "HTTP error: 404");
        assert_eq!(FetchError::Timeout.to_string(), "Request timed out");
        assert_eq!(
            FetchError::JsonParseError("expected value".into()).to_string(),
            "JSON parse error: expected value"
        );
    }
}
