//! Listing sort order.

use serde::{Deserialize, Serialize};

/// Sortable listing column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    #[default]
    Filename,
    ContentType,
    Size,
    Creation,
}

impl SortColumn {
    /// All columns in header order.
    pub const ALL: [SortColumn; 4] = [
        SortColumn::Filename,
        SortColumn::ContentType,
        SortColumn::Size,
        SortColumn::Creation,
    ];

    /// Query string value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Filename => "filename",
            Self::ContentType => "content_type",
            Self::Size => "size",
            Self::Creation => "creation",
        }
    }

    /// Parse a query string value.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }

    /// Column header label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Filename => "Filename",
            Self::ContentType => "Content type",
            Self::Size => "Size",
            Self::Creation => "Created",
        }
    }
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    /// The other direction.
    pub fn opposite(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Active sort column and direction, as rendered by the listing server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Whether `column` is the active sort column.
    pub fn is_active(&self, column: SortColumn) -> bool {
        self.column == column
    }

    /// Sort after clicking `column`: the active column flips direction,
    /// any other column starts over at the default direction.
    pub fn toggle(&self, column: SortColumn) -> Self {
        if self.is_active(column) {
            Self::new(column, self.direction.opposite())
        } else {
            Self::new(column, SortDirection::default())
        }
    }
}
