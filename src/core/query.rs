//! Listing query encoding and decoding.
//!
//! This is the single place that knows which query keys exist and how their
//! values are written and validated. Filter and sort changes always build a
//! query from scratch, dropping sort and pagination state; paging keeps the
//! current query and only replaces `start`.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime, TimeZone};
use regex::Regex;

use crate::config::{END_OF_DAY_SECONDS, keys};
use crate::core::error::{DecodeError, ValidationError};
use crate::models::{
    CreationOp, FilterForm, FilterKind, FilterSpec, PageCursor, QueryState, SizeOp, SizeUnit,
    SortColumn, SortDirection, SortSpec,
};

/// Integer or decimal, optionally signed, optionally with an exponent.
static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").expect("number pattern is valid")
});

// =============================================================================
// Encoding
// =============================================================================

/// Validate the filter form into a typed filter.
///
/// Range days are converted to epoch seconds at local midnight in `tz`; the
/// end day is pushed to its last second so the range includes it.
pub fn validate_filter<Tz: TimeZone>(
    form: &FilterForm,
    tz: &Tz,
) -> Result<FilterSpec, ValidationError> {
    match form.kind {
        FilterKind::Filename => {
            let prefix = form.filename_prefix.trim();
            if prefix.is_empty() {
                return Err(ValidationError::EmptyPrefix);
            }
            Ok(FilterSpec::Filename {
                prefix: prefix.to_string(),
            })
        }
        FilterKind::ContentType => {
            let value = form.content_type.trim();
            if value.is_empty() {
                return Err(ValidationError::EmptyContentType);
            }
            Ok(FilterSpec::ContentType {
                value: value.to_string(),
            })
        }
        FilterKind::Size => {
            let value = parse_number(form.size.trim()).ok_or(ValidationError::InvalidSize)?;
            Ok(FilterSpec::Size {
                op: form.size_op,
                unit: form.size_unit,
                value,
            })
        }
        FilterKind::Creation => {
            if form.creation_op != CreationOp::Range {
                return Ok(FilterSpec::Creation {
                    op: form.creation_op,
                    start: None,
                    end: None,
                });
            }
            let (start_day, end_day) = (form.creation_start, form.creation_end);
            if start_day.is_none() && end_day.is_none() {
                return Err(ValidationError::MissingRange);
            }
            if let (Some(start), Some(end)) = (start_day, end_day)
                && end < start
            {
                return Err(ValidationError::EndBeforeStart);
            }
            let start = start_day.map(|day| local_midnight(day, tz)).transpose()?;
            let end = end_day
                .map(|day| local_midnight(day, tz).map(|secs| secs + END_OF_DAY_SECONDS))
                .transpose()?;
            Ok(FilterSpec::Creation {
                op: CreationOp::Range,
                start,
                end,
            })
        }
    }
}

/// Query for a validated filter. Keys of inactive kinds are never written.
pub fn encode_filter(filter: &FilterSpec) -> QueryState {
    let query = QueryState::empty().set(keys::FILTER, filter.kind().as_str());
    match filter {
        FilterSpec::Filename { prefix } => query.set(keys::FILENAME_PREFIX, prefix),
        FilterSpec::ContentType { value } => query.set(keys::CONTENT_TYPE, value),
        FilterSpec::Size { op, unit, value } => query
            .set(keys::SIZE_OP, op.as_str())
            .set(keys::SIZE_UNIT, unit.as_str())
            .set(keys::SIZE, value),
        FilterSpec::Creation { op, start, end } => {
            let mut query = query.set(keys::CREATION_OP, op.as_str());
            if *op == CreationOp::Range {
                if let Some(start) = start {
                    query = query.set(keys::CREATION_START, start);
                }
                if let Some(end) = end {
                    query = query.set(keys::CREATION_END, end);
                }
            }
            query
        }
    }
}

/// Validate the form and build the navigation query for it.
pub fn build_filter_query<Tz: TimeZone>(
    form: &FilterForm,
    tz: &Tz,
) -> Result<QueryState, ValidationError> {
    let filter = validate_filter(form, tz).inspect_err(|err| {
        log::debug!("filter form rejected: {}", err);
    })?;
    Ok(encode_filter(&filter))
}

/// Query for a click on a column header.
///
/// Clicking the active sort column requests the opposite direction;
/// any other column leaves `sort_dir` out so the server default applies.
pub fn sort_query(column: SortColumn, current: Option<&SortSpec>) -> QueryState {
    let query = QueryState::empty().set(keys::SORT_COL, column.as_str());
    match current {
        Some(sort) if sort.is_active(column) => {
            query.set(keys::SORT_DIR, sort.toggle(column).direction.as_str())
        }
        _ => query,
    }
}

/// Query for the next page: the current query with `start` replaced.
pub fn next_page_query(current: &QueryState, cursor: &PageCursor) -> QueryState {
    current.clone().set(keys::START, cursor.as_str())
}

fn parse_number(value: &str) -> Option<f64> {
    if !NUMBER.is_match(value) {
        return None;
    }
    value.parse().ok()
}

/// Epoch seconds of midnight starting `day` in `tz`.
fn local_midnight<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> Result<i64, ValidationError> {
    tz.from_local_datetime(&day.and_time(NaiveTime::MIN))
        .earliest()
        .map(|dt| dt.timestamp())
        .ok_or(ValidationError::InvalidDate)
}

// =============================================================================
// Decoding
// =============================================================================

const SORT_COLUMNS: &str = "filename, content_type, size, creation";
const SORT_DIRECTIONS: &str = "asc, desc";
const SIZE_OPS: &str = "le, ge";
const SIZE_UNITS: &str = "B, KB, MB, GB";
const CREATION_OPS: &str = "day, week, month, range";
const FILTERS: &str = SORT_COLUMNS;

/// Listing arguments carried by a query string.
#[derive(Clone, Debug, PartialEq)]
pub struct ListingArgs {
    /// Active filter, if any
    pub filter: Option<FilterSpec>,
    /// Requested order; ignored by the server while a filter is active
    pub sort: SortSpec,
    /// Page to start from
    pub cursor: Option<PageCursor>,
}

impl ListingArgs {
    /// Decode and validate listing arguments.
    ///
    /// Every present key is checked, whether or not it belongs to the
    /// active filter. Values are trimmed before validation.
    pub fn decode(query: &QueryState) -> Result<Self, DecodeError> {
        let sort = SortSpec::new(
            parse_or_default(query, keys::SORT_COL, SORT_COLUMNS, SortColumn::parse)?,
            parse_or_default(query, keys::SORT_DIR, SORT_DIRECTIONS, SortDirection::parse)?,
        );

        let size_op = parse_allowed(query, keys::SIZE_OP, SIZE_OPS, SizeOp::parse)?;
        let size_unit = parse_allowed(query, keys::SIZE_UNIT, SIZE_UNITS, SizeUnit::parse)?;
        let size = trimmed(query, keys::SIZE)
            .map(|raw| {
                let value = raw
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or(DecodeError::NotANumber {
                        key: keys::SIZE,
                        expected: "a float",
                    })?;
                if value < 0.0 {
                    return Err(DecodeError::Negative(keys::SIZE));
                }
                Ok(value)
            })
            .transpose()?;

        let creation_op = parse_allowed(query, keys::CREATION_OP, CREATION_OPS, CreationOp::parse)?;
        let creation_start = parse_epoch(query, keys::CREATION_START)?;
        let creation_end = parse_epoch(query, keys::CREATION_END)?;

        let kind = parse_allowed(query, keys::FILTER, FILTERS, FilterKind::parse)?;
        let filter = match kind {
            None => None,
            Some(FilterKind::Filename) => Some(FilterSpec::Filename {
                prefix: trimmed(query, keys::FILENAME_PREFIX)
                    .ok_or(DecodeError::Missing(keys::FILENAME_PREFIX))?
                    .to_string(),
            }),
            Some(FilterKind::ContentType) => Some(FilterSpec::ContentType {
                value: trimmed(query, keys::CONTENT_TYPE)
                    .ok_or(DecodeError::Missing(keys::CONTENT_TYPE))?
                    .to_string(),
            }),
            Some(FilterKind::Size) => match (size, size_op, size_unit) {
                (Some(value), Some(op), Some(unit)) => Some(FilterSpec::Size { op, unit, value }),
                _ => return Err(DecodeError::MissingSize),
            },
            Some(FilterKind::Creation) => {
                let op = creation_op.ok_or(DecodeError::Missing(keys::CREATION_OP))?;
                if op != CreationOp::Range {
                    Some(FilterSpec::Creation {
                        op,
                        start: None,
                        end: None,
                    })
                } else {
                    if creation_start.is_none() && creation_end.is_none() {
                        return Err(DecodeError::MissingRange);
                    }
                    if let (Some(start), Some(end)) = (creation_start, creation_end)
                        && end < start
                    {
                        return Err(DecodeError::EndBeforeStart);
                    }
                    Some(FilterSpec::Creation {
                        op,
                        start: creation_start,
                        end: creation_end,
                    })
                }
            }
        };

        let cursor = trimmed(query, keys::START)
            .filter(|token| !token.is_empty())
            .map(PageCursor::new);

        Ok(Self {
            filter,
            sort,
            cursor,
        })
    }
}

fn trimmed<'a>(query: &'a QueryState, key: &str) -> Option<&'a str> {
    query.get(key).map(str::trim)
}

fn parse_allowed<T>(
    query: &QueryState,
    key: &'static str,
    allowed: &'static str,
    parse: fn(&str) -> Option<T>,
) -> Result<Option<T>, DecodeError> {
    trimmed(query, key)
        .map(|value| parse(value).ok_or(DecodeError::NotAllowed { key, allowed }))
        .transpose()
}

fn parse_or_default<T: Default>(
    query: &QueryState,
    key: &'static str,
    allowed: &'static str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, DecodeError> {
    Ok(parse_allowed(query, key, allowed, parse)?.unwrap_or_default())
}

fn parse_epoch(query: &QueryState, key: &'static str) -> Result<Option<i64>, DecodeError> {
    trimmed(query, key)
        .map(|value| {
            let secs = value.parse::<i64>().map_err(|_| DecodeError::NotANumber {
                key,
                expected: "an integer",
            })?;
            if secs < 0 {
                return Err(DecodeError::Negative(key));
            }
            Ok(secs)
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn form(kind: FilterKind) -> FilterForm {
        FilterForm {
            kind,
            ..FilterForm::default()
        }
    }

    fn range_form(start: Option<NaiveDate>, end: Option<NaiveDate>) -> FilterForm {
        FilterForm {
            kind: FilterKind::Creation,
            creation_op: CreationOp::Range,
            creation_start: start,
            creation_end: end,
            ..FilterForm::default()
        }
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    #[test]
    fn test_empty_inputs_rejected() {
        let mut filename = form(FilterKind::Filename);
        filename.filename_prefix = "   ".to_string();
        assert_eq!(
            build_filter_query(&filename, &Utc),
            Err(ValidationError::EmptyPrefix)
        );

        let mut content_type = form(FilterKind::ContentType);
        content_type.content_type = "\t".to_string();
        assert_eq!(
            build_filter_query(&content_type, &Utc),
            Err(ValidationError::EmptyContentType)
        );

        for bad in ["", "abc", "12kb", "inf", "NaN", "1.2.3"] {
            let mut size = form(FilterKind::Size);
            size.size = bad.to_string();
            assert_eq!(
                build_filter_query(&size, &Utc),
                Err(ValidationError::InvalidSize),
                "{bad:?}"
            );
        }

        assert_eq!(
            build_filter_query(&range_form(None, None), &Utc),
            Err(ValidationError::MissingRange)
        );
    }

    #[test]
    fn test_end_before_start_rejected() {
        let form = range_form(Some(day(2024, 5, 2)), Some(day(2024, 5, 1)));
        assert_eq!(
            build_filter_query(&form, &Utc),
            Err(ValidationError::EndBeforeStart)
        );
    }

    #[test]
    fn test_accepted_numbers() {
        for (raw, expected) in [("10", 10.0), (" 2.5 ", 2.5), ("-3", -3.0), (".5", 0.5), ("1e3", 1000.0)] {
            let mut size = form(FilterKind::Size);
            size.size = raw.to_string();
            let filter = validate_filter(&size, &Utc).unwrap();
            assert!(
                matches!(filter, FilterSpec::Size { value, .. } if value == expected),
                "{raw:?}"
            );
        }
    }

    // -------------------------------------------------------------------------
    // Encoding
    // -------------------------------------------------------------------------

    #[test]
    fn test_encode_filename_trims() {
        let mut filename = form(FilterKind::Filename);
        filename.filename_prefix = "  logs/2024 ".to_string();
        let query = build_filter_query(&filename, &Utc).unwrap();
        assert_eq!(query.to_query_string(), "filter=filename&filename_prefix=logs%2F2024");
    }

    #[test]
    fn test_encode_size() {
        let mut size = form(FilterKind::Size);
        size.size = "10".to_string();
        size.size_op = SizeOp::Ge;
        size.size_unit = SizeUnit::MB;
        let query = build_filter_query(&size, &Utc).unwrap();
        assert_eq!(
            query.to_query_string(),
            "filter=size&size_op=ge&size_unit=MB&size=10"
        );
    }

    #[test]
    fn test_encode_creation_without_range_has_no_dates() {
        let mut creation = form(FilterKind::Creation);
        creation.creation_op = CreationOp::Week;
        creation.creation_start = Some(day(2024, 1, 1));
        let query = build_filter_query(&creation, &Utc).unwrap();
        assert_eq!(query.to_query_string(), "filter=creation&creation_op=week");
    }

    #[test]
    fn test_range_start_only() {
        let query = build_filter_query(&range_form(Some(day(2024, 1, 1)), None), &Utc).unwrap();
        assert_eq!(query.get(keys::CREATION_START), Some("1704067200"));
        assert!(!query.contains(keys::CREATION_END));
    }

    #[test]
    fn test_range_end_only() {
        let query = build_filter_query(&range_form(None, Some(day(2024, 1, 1))), &Utc).unwrap();
        assert!(!query.contains(keys::CREATION_START));
        assert_eq!(query.get(keys::CREATION_END), Some("1704153599"));
    }

    #[test]
    fn test_same_day_range_spans_whole_day() {
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        let d = day(2024, 7, 4);
        let query = build_filter_query(&range_form(Some(d), Some(d)), &tz).unwrap();
        let start: i64 = query.get(keys::CREATION_START).unwrap().parse().unwrap();
        let end: i64 = query.get(keys::CREATION_END).unwrap().parse().unwrap();
        assert_eq!(end - start, 86399);
    }

    #[test]
    fn test_range_uses_local_midnight() {
        // 2024-01-01 00:00 at UTC+09:00 is 2023-12-31 15:00 UTC
        let tz = FixedOffset::east_opt(9 * 3600).unwrap();
        let query = build_filter_query(&range_form(Some(day(2024, 1, 1)), None), &tz).unwrap();
        assert_eq!(query.get(keys::CREATION_START), Some("1704034800"));
    }

    #[test]
    fn test_sort_active_column_toggles_direction() {
        let asc = SortSpec::new(SortColumn::Size, SortDirection::Asc);
        let query = sort_query(SortColumn::Size, Some(&asc));
        assert_eq!(query.to_query_string(), "sort_col=size&sort_dir=desc");

        let desc = SortSpec::new(SortColumn::Size, SortDirection::Desc);
        let query = sort_query(SortColumn::Size, Some(&desc));
        assert_eq!(query.get(keys::SORT_DIR), Some("asc"));
    }

    #[test]
    fn test_sort_other_column_omits_direction() {
        let sort = SortSpec::new(SortColumn::Size, SortDirection::Desc);
        let query = sort_query(SortColumn::Filename, Some(&sort));
        assert_eq!(query.to_query_string(), "sort_col=filename");
        // No rendered sort state while a filter is active
        assert_eq!(
            sort_query(SortColumn::Size, None).to_query_string(),
            "sort_col=size"
        );
    }

    #[test]
    fn test_paging_preserves_query() {
        let current = QueryState::parse("?filter=content_type&content_type=image%2Fpng&start=old");
        let next = next_page_query(&current, &PageCursor::new("CjQS+/=="));
        assert_eq!(next.get(keys::FILTER), Some("content_type"));
        assert_eq!(next.get(keys::CONTENT_TYPE), Some("image/png"));
        assert_eq!(next.get(keys::START), Some("CjQS+/=="));
        assert_eq!(next.keys().count(), 3);

        let sorted = QueryState::parse("sort_col=size&sort_dir=desc");
        let next = next_page_query(&sorted, &PageCursor::new("abc"));
        assert_eq!(next.to_query_string(), "sort_col=size&sort_dir=desc&start=abc");
    }

    #[test]
    fn test_filter_drops_sort_and_cursor() {
        let mut filename = form(FilterKind::Filename);
        filename.filename_prefix = "a".to_string();
        let query = build_filter_query(&filename, &Utc).unwrap();
        assert!(!query.contains(keys::SORT_COL));
        assert!(!query.contains(keys::START));
    }

    // -------------------------------------------------------------------------
    // Decoding
    // -------------------------------------------------------------------------

    #[test]
    fn test_decode_defaults() {
        let args = ListingArgs::decode(&QueryState::empty()).unwrap();
        assert_eq!(args.filter, None);
        assert_eq!(args.sort, SortSpec::default());
        assert_eq!(args.cursor, None);
    }

    #[test]
    fn test_decode_sort_and_cursor() {
        let args =
            ListingArgs::decode(&QueryState::parse("sort_col=+creation+&sort_dir=desc&start=xyz"))
                .unwrap();
        assert_eq!(
            args.sort,
            SortSpec::new(SortColumn::Creation, SortDirection::Desc)
        );
        assert_eq!(args.cursor, Some(PageCursor::new("xyz")));
    }

    #[test]
    fn test_decode_rejects_unknown_values() {
        assert_eq!(
            ListingArgs::decode(&QueryState::parse("sort_dir=up")),
            Err(DecodeError::NotAllowed {
                key: keys::SORT_DIR,
                allowed: SORT_DIRECTIONS,
            })
        );
        assert_eq!(
            ListingArgs::decode(&QueryState::parse("filter=owner")),
            Err(DecodeError::NotAllowed {
                key: keys::FILTER,
                allowed: FILTERS,
            })
        );
        // Checked even though no size filter is active
        assert!(matches!(
            ListingArgs::decode(&QueryState::parse("size_unit=TB")),
            Err(DecodeError::NotAllowed { key: "size_unit", .. })
        ));
    }

    #[test]
    fn test_decode_rejects_bad_numbers() {
        assert_eq!(
            ListingArgs::decode(&QueryState::parse("size=-1")),
            Err(DecodeError::Negative(keys::SIZE))
        );
        assert!(matches!(
            ListingArgs::decode(&QueryState::parse("creation_start=yesterday")),
            Err(DecodeError::NotANumber { key: "creation_start", .. })
        ));
    }

    #[test]
    fn test_decode_requires_filter_keys() {
        assert_eq!(
            ListingArgs::decode(&QueryState::parse("filter=filename")),
            Err(DecodeError::Missing(keys::FILENAME_PREFIX))
        );
        assert_eq!(
            ListingArgs::decode(&QueryState::parse("filter=size&size=3&size_op=le")),
            Err(DecodeError::MissingSize)
        );
        assert_eq!(
            ListingArgs::decode(&QueryState::parse("filter=creation&creation_op=range")),
            Err(DecodeError::MissingRange)
        );
        assert_eq!(
            ListingArgs::decode(&QueryState::parse(
                "filter=creation&creation_op=range&creation_start=200&creation_end=100"
            )),
            Err(DecodeError::EndBeforeStart)
        );
    }

    #[test]
    fn test_decode_reads_back_encoded_filter() {
        let filter = FilterSpec::Creation {
            op: CreationOp::Range,
            start: Some(1_704_067_200),
            end: None,
        };
        let query = QueryState::parse(&encode_filter(&filter).to_query_string());
        let args = ListingArgs::decode(&query).unwrap();
        assert_eq!(args.filter, Some(filter));

        let filter = FilterSpec::Size {
            op: SizeOp::Le,
            unit: SizeUnit::KB,
            value: 1.5,
        };
        let args = ListingArgs::decode(&encode_filter(&filter)).unwrap();
        assert_eq!(args.filter, Some(filter));
    }
}
