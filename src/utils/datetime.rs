//! Date and time utility functions
//!
//! The backend stores lead dates as RFC 3339 timestamps while the form edits
//! them as plain `YYYY-MM-DD` text. The conversions both ways live here.

use chrono::{DateTime, Local, NaiveDate, SecondsFormat, TimeZone, Utc};

/// Date format used by the lead form and kept in drafts
pub const FORM_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_ymd(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, FORM_DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(FORM_DATE_FORMAT).to_string()
}

/// Current local date as YYYY-MM-DD, the empty-draft default
pub fn today_ymd() -> String {
    format_ymd(Local::now().date_naive())
}

/// Convert a form date to the RFC 3339 timestamp the backend stores
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// * `Option<String>` - Midnight UTC of that date, `None` if unparseable
pub fn ymd_to_rfc3339(date_str: &str) -> Option<String> {
    let date = parse_ymd(date_str).ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(
        Utc.from_utc_datetime(&midnight)
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}

/// Normalize a wire timestamp back to the form's YYYY-MM-DD shape
///
/// Accepts RFC 3339 or an already-plain date string; anything else is `None`.
pub fn rfc3339_to_ymd(datetime_str: &str) -> Option<String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        return Some(format_ymd(dt.naive_utc().date()));
    }
    parse_ymd(datetime_str).ok().map(format_ymd)
}

/// Format a wire timestamp for table display using the configured format
///
/// Unparseable input renders as-is rather than hiding the row.
pub fn format_wire_date(datetime_str: &str, format: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        return dt.naive_utc().date().format(format).to_string();
    }
    match parse_ymd(datetime_str) {
        Ok(date) => date.format(format).to_string(),
        Err(_) => datetime_str.to_string(),
    }
}
