//! Timestamp helpers for reservation start times.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;

/// Storage format inside SQLite; sorts chronologically as text.
const STORE_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats accepted from the reservation form. Browsers submit
/// datetime-local values as "YYYY-MM-DDTHH:MM" with optional seconds; the
/// space-separated spelling is accepted too.
const INPUT_FMTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

pub fn parse_start_at(input: &str) -> AppResult<NaiveDateTime> {
    for fmt in INPUT_FMTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
            return Ok(dt);
        }
    }
    Err(AppError::InvalidStartAt(input.to_string()))
}

pub fn parse_store(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, STORE_FMT)
        .map_err(|_| AppError::InvalidStartAt(s.to_string()))
}

pub fn format_store(dt: &NaiveDateTime) -> String {
    dt.format(STORE_FMT).to_string()
}

/// Human-readable form used by the detail view.
pub fn format_display(dt: &NaiveDateTime) -> String {
    dt.format("%a %b %e, %Y %H:%M").to_string()
}
