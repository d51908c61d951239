use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use regex::Regex;

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(format!("{} (expected YYYY-MM-DD)", s)))
}

/// Validate a period prefix: `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
/// Returns the trimmed prefix for use in a LIKE filter.
pub fn period_prefix(p: &str) -> AppResult<String> {
    let p = p.trim();
    let re = Regex::new(r"^\d{4}(-\d{2}){0,2}$").expect("static regex");
    if !re.is_match(p) {
        return Err(AppError::InvalidDate(format!(
            "{} (expected YYYY, YYYY-MM or YYYY-MM-DD)",
            p
        )));
    }
    Ok(p.to_string())
}

/// Expand a period into the dates it covers.
pub fn generate_from_period(p: &str) -> AppResult<Vec<NaiveDate>> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok(vec![d]);
    }

    // YYYY-MM
    if p.len() == 7
        && let Ok(first) = NaiveDate::parse_from_str(&format!("{}-01", p), "%Y-%m-%d")
    {
        return Ok(all_days_of_month(first.year(), first.month()));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        return Ok(all_days_of_year(year));
    }

    Err(AppError::InvalidDate(format!("Invalid period: {}", p)))
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = NaiveDate::from_ymd_opt(year, month, 1).expect("valid first of month");

    while d.month() == month {
        out.push(d);
        d = d.succ_opt().expect("date within month");
    }

    out
}

pub fn all_days_of_year(year: i32) -> Vec<NaiveDate> {
    let mut v = Vec::new();

    let mut d = NaiveDate::from_ymd_opt(year, 1, 1).expect("valid first of year");
    while d.year() == year {
        v.push(d);
        d = d.succ_opt().expect("date within year");
    }

    v
}
