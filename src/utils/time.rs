use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

/// Parse a wall-clock time, accepting `HH:MM` or `HH:MM:SS`.
/// Seconds default to zero, matching the zero-padded storage format.
pub fn parse_time(s: &str) -> AppResult<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| AppError::InvalidTime(format!("{} (expected HH:MM or HH:MM:SS)", s)))
}

pub fn fmt_hms(t: NaiveTime) -> String {
    t.format("%H:%M:%S").to_string()
}

pub fn fmt_hm(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}
