//! Date-range query validation.
//!
//! Every read endpoint accepts optional `startDate`/`endDate` ISO bounds.
//! The demo providers do not filter by date, but malformed bounds are still
//! rejected up front so callers learn about bad input instead of silently
//! getting the default window.

#[cfg(test)]
#[path = "range_test.rs"]
mod range_test;

use axum::http::StatusCode;
use dto::DateRange;
use time::Date;
use time::format_description;

/// Parse a `YYYY-MM-DD` date string.
#[must_use]
pub fn parse_iso_date(value: &str) -> Option<Date> {
    let format = format_description::parse("[year]-[month]-[day]").ok()?;
    Date::parse(value, &format).ok()
}

/// Validate both optional bounds, rejecting malformed dates and inverted
/// ranges with `400 Bad Request`.
pub fn validate(range: &DateRange) -> Result<(), StatusCode> {
    let start = match &range.start_date {
        Some(raw) => Some(parse_iso_date(raw).ok_or(StatusCode::BAD_REQUEST)?),
        None => None,
    };
    let end = match &range.end_date {
        Some(raw) => Some(parse_iso_date(raw).ok_or(StatusCode::BAD_REQUEST)?),
        None => None,
    };

    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            return Err(StatusCode::BAD_REQUEST);
        }
    }

    Ok(())
}
