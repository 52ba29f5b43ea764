//! UI components built with Leptos.
//!
//! - [`BlobBrowser`] - Page layout (main entry point)
//! - [`filter_panel`] - Filter kind selector and per-kind inputs
//! - [`listing`] - Sortable blob table with row checkboxes
//! - [`actions`] - Delete button and next-page control
//! - [`icons`] - Centralized icon definitions

pub mod actions;
mod browser;
pub mod filter_panel;
pub mod icons;
pub mod listing;

pub use browser::BlobBrowser;
