//! Calendar-date input parsing.

use chrono::NaiveDate;

use crate::error::TimeError;

/// Accepted layouts, tried in order: day-first, then ISO.
const LAYOUTS: [&str; 2] = ["%d-%m-%Y", "%Y-%m-%d"];

/// Parse a calendar date written as `DD-MM-YYYY` or `YYYY-MM-DD`.
pub fn parse_calendar_date(input: &str) -> Result<NaiveDate, TimeError> {
    let text = input.trim();
    LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(text, layout).ok())
        .ok_or_else(|| TimeError::InvalidDate {
            input: input.to_string(),
        })
}
