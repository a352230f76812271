use chrono::NaiveDate;

use crate::error::CalendarError;

/// Parses a date in ISO form (`YYYY-MM-DD`, zero-padded).
///
/// Malformed input is rejected rather than normalized.
pub fn parse_iso_date(date_str: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| CalendarError::InvalidDate(date_str.to_owned()))
}
