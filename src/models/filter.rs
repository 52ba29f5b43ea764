//! Listing filter types.
//!
//! Exactly one filter kind is active at a time. The string forms of every
//! enum here are the values exchanged with the listing server.

use serde::{Deserialize, Serialize};

/// Filter category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    #[default]
    Filename,
    ContentType,
    Size,
    Creation,
}

impl FilterKind {
    pub const ALL: [FilterKind; 4] = [
        FilterKind::Filename,
        FilterKind::ContentType,
        FilterKind::Size,
        FilterKind::Creation,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Filename => "filename",
            Self::ContentType => "content_type",
            Self::Size => "size",
            Self::Creation => "creation",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == value)
    }

    /// Label shown in the filter selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Filename => "Filename prefix",
            Self::ContentType => "Content type",
            Self::Size => "Size",
            Self::Creation => "Creation date",
        }
    }
}

/// Size comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeOp {
    /// At most
    #[default]
    Le,
    /// At least
    Ge,
}

impl SizeOp {
    pub const ALL: [SizeOp; 2] = [SizeOp::Le, SizeOp::Ge];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Le => "le",
            Self::Ge => "ge",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Le => "at most",
            Self::Ge => "at least",
        }
    }
}

/// Size unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeUnit {
    #[default]
    B,
    KB,
    MB,
    GB,
}

impl SizeUnit {
    pub const ALL: [SizeUnit; 4] = [SizeUnit::B, SizeUnit::KB, SizeUnit::MB, SizeUnit::GB];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::B => "B",
            Self::KB => "KB",
            Self::MB => "MB",
            Self::GB => "GB",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.as_str() == value)
    }
}

/// Creation date filter operator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreationOp {
    /// Created in the last day
    #[default]
    Day,
    /// Created in the last week
    Week,
    /// Created in the last 31 days
    Month,
    /// Created between explicit start/end days
    Range,
}

impl CreationOp {
    pub const ALL: [CreationOp; 4] = [
        CreationOp::Day,
        CreationOp::Week,
        CreationOp::Month,
        CreationOp::Range,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Range => "range",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Day => "in the last day",
            Self::Week => "in the last week",
            Self::Month => "in the last month",
            Self::Range => "in a date range",
        }
    }
}

/// A validated filter.
///
/// `Creation::start`/`end` are epoch seconds and only carried by
/// [`CreationOp::Range`]; at least one is set and `start <= end`.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterSpec {
    Filename {
        prefix: String,
    },
    ContentType {
        value: String,
    },
    Size {
        op: SizeOp,
        unit: SizeUnit,
        value: f64,
    },
    Creation {
        op: CreationOp,
        start: Option<i64>,
        end: Option<i64>,
    },
}

impl FilterSpec {
    pub fn kind(&self) -> FilterKind {
        match self {
            Self::Filename { .. } => FilterKind::Filename,
            Self::ContentType { .. } => FilterKind::ContentType,
            Self::Size { .. } => FilterKind::Size,
            Self::Creation { .. } => FilterKind::Creation,
        }
    }
}
