use crate::errors::{AppError, AppResult};
use crate::utils::date::generate_from_period;
use chrono::NaiveDate;

/// Parse --range (year / month / day / interval).
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - any of the above joined as START:END
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start_days = generate_from_period(start_raw.trim())?;
        let end_days = generate_from_period(end_raw.trim())?;

        let from = *start_days.first().expect("period expansion is never empty");
        let to = *end_days.last().expect("period expansion is never empty");

        if to < from {
            return Err(AppError::InvalidDate(format!(
                "range end {} is before range start {}",
                to, from
            )));
        }

        Ok((from, to))
    } else {
        let days = generate_from_period(r.trim())?;
        let from = *days.first().expect("period expansion is never empty");
        let to = *days.last().expect("period expansion is never empty");
        Ok((from, to))
    }
}
