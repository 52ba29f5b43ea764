//! Listing state embedded by the server into each rendered page.

use serde::{Deserialize, Serialize};

use super::sort::SortSpec;

/// Opaque pagination token issued by the listing server.
///
/// Forwarded verbatim as the `start` query parameter; never inspected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageCursor(String);

impl PageCursor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One blob row of the listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobRow {
    /// Blob key, also the row identifier for bulk selection.
    pub key: String,
    pub filename: String,
    pub content_type: String,
    /// Size in bytes
    pub size: u64,
    /// Creation time, epoch seconds (UTC)
    pub creation: i64,
}

/// Current page of the listing.
///
/// `sort` is only present when no filter is active; filtered listings are
/// ordered by the filtered column.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageState {
    #[serde(default)]
    pub blobs: Vec<BlobRow>,
    #[serde(default)]
    pub cursor: Option<PageCursor>,
    #[serde(default)]
    pub more: bool,
    #[serde(default)]
    pub sort: Option<SortSpec>,
}

impl PageState {
    /// Parse the embedded JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Cursor for the next page, if the server reported more results.
    pub fn next_cursor(&self) -> Option<&PageCursor> {
        if self.more { self.cursor.as_ref() } else { None }
    }

    /// Row identifiers in display order.
    pub fn row_keys(&self) -> Vec<String> {
        self.blobs.iter().map(|b| b.key.clone()).collect()
    }
}
