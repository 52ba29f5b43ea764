//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Page Integration
// =============================================================================

/// Id of the element the application mounts into.
pub const MOUNT_ELEMENT_ID: &str = "app";

/// Id of the `<script type="application/json">` element carrying the
/// server-rendered [`PageState`](crate::models::PageState).
pub const PAGE_STATE_ELEMENT_ID: &str = "page-state";

// =============================================================================
// Backend Endpoints
// =============================================================================

/// Bulk delete endpoint (form-encoded POST).
pub const DELETE_ENDPOINT: &str = "/api/delete";

/// Form field carrying the comma-joined blob keys.
pub const DELETE_KEYS_FIELD: &str = "keys";

/// Blob download endpoint; the blob key is passed as `key`.
pub const SERVE_ENDPOINT: &str = "/serve";

// =============================================================================
// Query Encoding
// =============================================================================

/// Query string keys shared with the listing server.
pub mod keys {
    pub const FILTER: &str = "filter";
    pub const FILENAME_PREFIX: &str = "filename_prefix";
    pub const CONTENT_TYPE: &str = "content_type";
    pub const SIZE: &str = "size";
    pub const SIZE_OP: &str = "size_op";
    pub const SIZE_UNIT: &str = "size_unit";
    pub const CREATION_OP: &str = "creation_op";
    pub const CREATION_START: &str = "creation_start";
    pub const CREATION_END: &str = "creation_end";
    pub const SORT_COL: &str = "sort_col";
    pub const SORT_DIR: &str = "sort_dir";
    pub const START: &str = "start";
}

/// Seconds added to the end day's local midnight so a day range includes
/// the whole end day.
pub const END_OF_DAY_SECONDS: i64 = 60 * 60 * 24 - 1;

// =============================================================================
// Logging
// =============================================================================

/// Log level for the browser console.
pub const LOG_LEVEL: log::Level = log::Level::Info;
