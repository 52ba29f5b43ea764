//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`FilterSpec`], [`FilterKind`], [`SizeOp`], [`SizeUnit`], [`CreationOp`] - Listing filters
//! - [`FilterForm`] - Raw filter form contents
//! - [`SortSpec`], [`SortColumn`], [`SortDirection`] - Listing sort order
//! - [`QueryState`] - Ordered query string parameters
//! - [`PageState`], [`BlobRow`], [`PageCursor`] - Server-embedded listing state
//! - [`SelectionSet`] - Rows checked for bulk delete

mod filter;
mod form;
mod page;
mod query;
mod selection;
mod sort;

pub use filter::{CreationOp, FilterKind, FilterSpec, SizeOp, SizeUnit};
pub use form::FilterForm;
pub use page::{BlobRow, PageCursor, PageState};
pub use query::QueryState;
pub use selection::SelectionSet;
pub use sort::{SortColumn, SortDirection, SortSpec};
