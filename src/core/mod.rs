//! Core business logic for the blob browser.
//!
//! This module provides:
//! - [`query`] encoding, validation and decoding of listing query strings
//! - [`SelectionController`] bulk selection and the delete protocol

pub mod error;
pub mod query;
mod selection;

pub use query::{ListingArgs, build_filter_query, next_page_query, sort_query};
pub use selection::{BrowserActions, DeleteApi, DeleteOutcome, SelectionController};
