//! Unified error types for the service and its harness.

use thiserror::Error;

/// Unified error type for the hello service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Harness check failure.
    #[error("harness error: {0}")]
    Harness(#[from] HarnessError),

    /// Metrics exporter could not be installed.
    #[error("metrics error: {0}")]
    Metrics(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures reported by the hello endpoint checks.
///
/// [`HarnessError::Unreachable`] is a connectivity failure; every other
/// variant means the service answered but the answer was wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HarnessError {
    /// The target could not be reached (connect failure or timeout).
    #[error("endpoint {url} unreachable: {reason}")]
    Unreachable {
        /// Target URL.
        url: String,
        /// Transport-level reason.
        reason: String,
    },

    /// Response status differs from the expected one.
    #[error("unexpected status: expected {expected}, got {actual}")]
    StatusMismatch {
        /// Expected status code.
        expected: u16,
        /// Observed status code.
        actual: u16,
    },

    /// Content-Type is missing or not a JSON media type.
    #[error("unexpected content type: expected a JSON media type, got {actual:?}")]
    ContentTypeMismatch {
        /// Observed header value, if any.
        actual: Option<String>,
    },

    /// Body does not equal the expected payload.
    #[error("unexpected body: expected {expected}, got {actual}")]
    BodyMismatch {
        /// Expected body, as compact JSON.
        expected: String,
        /// Observed body, as received.
        actual: String,
    },

    /// Base URL could not be parsed or joined.
    #[error("invalid target url: {0}")]
    InvalidUrl(String),
}

impl HarnessError {
    /// True for connectivity failures, false for correctness failures.
    pub fn is_unreachable(&self) -> bool {
        matches!(self, Self::Unreachable { .. })
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ServiceError>;
