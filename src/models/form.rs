//! Raw filter form contents.

use chrono::{NaiveDate, TimeZone};

use super::filter::{CreationOp, FilterKind, FilterSpec, SizeOp, SizeUnit};

/// Unvalidated filter form state.
///
/// Text inputs are kept exactly as typed; range dates are calendar days as
/// picked, converted to epoch seconds only when the form is submitted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterForm {
    pub kind: FilterKind,
    pub filename_prefix: String,
    pub content_type: String,
    pub size: String,
    pub size_op: SizeOp,
    pub size_unit: SizeUnit,
    pub creation_op: CreationOp,
    pub creation_start: Option<NaiveDate>,
    pub creation_end: Option<NaiveDate>,
}

impl FilterForm {
    /// Pre-populate the form from the filter currently applied to the
    /// listing. Range bounds are shown as days in `tz`.
    pub fn from_filter<Tz: TimeZone>(filter: &FilterSpec, tz: &Tz) -> Self {
        let mut form = Self {
            kind: filter.kind(),
            ..Self::default()
        };
        match filter {
            FilterSpec::Filename { prefix } => form.filename_prefix = prefix.clone(),
            FilterSpec::ContentType { value } => form.content_type = value.clone(),
            FilterSpec::Size { op, unit, value } => {
                form.size_op = *op;
                form.size_unit = *unit;
                form.size = value.to_string();
            }
            FilterSpec::Creation { op, start, end } => {
                form.creation_op = *op;
                form.creation_start = start.and_then(|secs| local_day(secs, tz));
                form.creation_end = end.and_then(|secs| local_day(secs, tz));
            }
        }
        form
    }

    /// Switch to another filter kind, clearing that kind's inputs back to
    /// their defaults.
    pub fn select_kind(&mut self, kind: FilterKind) {
        let defaults = Self::default();
        self.kind = kind;
        match kind {
            FilterKind::Filename => self.filename_prefix = defaults.filename_prefix,
            FilterKind::ContentType => self.content_type = defaults.content_type,
            FilterKind::Size => {
                self.size = defaults.size;
                self.size_op = defaults.size_op;
                self.size_unit = defaults.size_unit;
            }
            FilterKind::Creation => {
                self.creation_op = defaults.creation_op;
                self.creation_start = defaults.creation_start;
                self.creation_end = defaults.creation_end;
            }
        }
    }

    /// Whether the start/end day pickers are shown.
    pub fn shows_range(&self) -> bool {
        self.kind == FilterKind::Creation && self.creation_op == CreationOp::Range
    }
}

/// Calendar day of an epoch timestamp in `tz`.
fn local_day<Tz: TimeZone>(secs: i64, tz: &Tz) -> Option<NaiveDate> {
    tz.timestamp_opt(secs, 0)
        .single()
        .map(|dt| dt.date_naive())
}
