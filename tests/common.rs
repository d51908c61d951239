#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use punchdeck::core::normalize::normalize;
use punchdeck::models::punch::{Origin, PunchCandidate, PunchRecord};
use punchdeck::models::punch_kind::PunchKind;
use punchdeck::models::shift::Shift;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pdk() -> Command {
    cargo_bin_cmd!("punchdeck")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchdeck.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB schema via the CLI (uses --test init to skip config writes)
pub fn init_db(db_path: &str) {
    pdk()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

// ---------------------------------------------------------------
// Library-level helpers for validator / normalizer tests
// ---------------------------------------------------------------

pub fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .expect("test time")
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("test date")
}

/// The reference shift used across the suite: 08:00-23:00 with a 3h buffer,
/// so the window runs 05:00 same-day to 02:00 next-day.
pub fn day_shift() -> Shift {
    Shift::new(t("08:00"), t("23:00"), 3)
}

/// Build a stored record the way the recorder would: resolved through the
/// normalizer with the shift captured at write time.
pub fn rec(id: i64, kind: PunchKind, date: &str, time: &str, shift: &Shift) -> PunchRecord {
    let date = d(date);
    let time = t(time);
    let norm = normalize(date, time, shift);
    PunchRecord {
        id,
        shop_id: 1,
        employee_id: Some(7),
        date_at: date,
        time_at: time,
        resolved_at: norm.resolved_at,
        shift_start: shift.start,
        shift_end: shift.end,
        buffer_hours: shift.buffer_hours,
        kind,
        comment: String::new(),
        origin: Origin::Api,
        created_at: String::new(),
    }
}

pub fn cand(kind: PunchKind, date: &str, time: &str) -> PunchCandidate {
    PunchCandidate {
        shop_id: 1,
        employee_id: Some(7),
        date: d(date),
        time: t(time),
        kind,
        comment: None,
        origin: Origin::Api,
    }
}
