//! Utility modules for browser, network, and display operations.
//!
//! Provides:
//! - [`dom`] - Window access, embedded page state, navigation and dialogs
//! - [`HttpDeleteApi`] - Bulk delete request
//! - [`format`] - Size and timestamp formatting

pub mod dom;
mod fetch;
pub mod format;

pub use fetch::{HttpDeleteApi, serve_url};
