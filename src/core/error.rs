//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`ValidationError`] - Filter form input rejected before navigation
//! - [`DecodeError`] - Query string arguments that fail listing validation
//! - [`RequestError`] - Delete request failures
//! - [`StateError`] - Missing or malformed embedded page state

use thiserror::Error;

/// Filter form validation errors.
///
/// The `Display` text is shown to the user verbatim in a blocking alert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Filename prefix is empty after trimming
    #[error("Please enter a prefix.")]
    EmptyPrefix,
    /// Content type is empty after trimming
    #[error("Please enter a content type.")]
    EmptyContentType,
    /// Size input is not a number
    #[error("Size must be a number.")]
    InvalidSize,
    /// Range creation filter without either date
    #[error("Please enter a start date, end date, or both.")]
    MissingRange,
    /// Range creation filter whose end day precedes its start day
    #[error("End date must be after start date.")]
    EndBeforeStart,
    /// A calendar day has no representable local midnight
    #[error("Invalid date.")]
    InvalidDate,
}

/// Listing argument errors, raised while decoding a query string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Value not in the set of accepted values for the key
    #[error("{key} must be one of: {allowed}")]
    NotAllowed {
        key: &'static str,
        allowed: &'static str,
    },
    /// Value is not a number of the expected kind
    #[error("{key} must be {expected}")]
    NotANumber {
        key: &'static str,
        expected: &'static str,
    },
    /// Numeric value is negative
    #[error("{0} must be non-negative")]
    Negative(&'static str),
    /// Active filter is missing its key
    #[error("{0} is required")]
    Missing(&'static str),
    /// Size filter without all of its keys
    #[error("size, size_op, size_unit are required")]
    MissingSize,
    /// Range creation filter without either bound
    #[error("At least one of creation_start or creation_end is required")]
    MissingRange,
    /// Range creation filter whose end precedes its start
    #[error("creation_end must not precede creation_start")]
    EndBeforeStart,
}

/// Delete request errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// Request could not be built or sent
    #[error("Network error: {0}")]
    Network(String),
    /// Non-2xx response
    #[error("HTTP error: {0}")]
    Http(u16),
}

impl From<gloo_net::Error> for RequestError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Embedded page state errors.
#[derive(Debug, Error)]
pub enum StateError {
    /// Browser document not available
    #[error("Browser document not available")]
    NoDocument,
    /// No element carries the page state
    #[error("Page state element '#{0}' not found")]
    Missing(&'static str),
    /// Page state is not valid JSON for [`PageState`](crate::models::PageState)
    #[error("Page state parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
