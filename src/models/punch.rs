use super::{punch_kind::PunchKind, shift::Shift};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Where a punch was submitted from.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Origin {
    Api,
    Web,
}

impl Origin {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Origin::Api => "api",
            Origin::Web => "web",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "api" => Some(Origin::Api),
            "web" => Some(Origin::Web),
            _ => None,
        }
    }
}

/// A punch as submitted by the caller, before validation. The date is the
/// calendar day the punch was submitted against; early-morning times may
/// later resolve to the following day (see `core::normalize`).
#[derive(Debug, Clone)]
pub struct PunchCandidate {
    pub shop_id: i64,
    pub employee_id: Option<i64>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub kind: PunchKind,
    pub comment: Option<String>,
    pub origin: Origin,
}

/// A persisted punch.
///
/// `resolved_at` is derived once from `(date_at, time_at)` plus the
/// rollover rule and is the single source of truth for chronological
/// ordering; `time_at` alone is ambiguous across midnight.
#[derive(Debug, Clone, Serialize)]
pub struct PunchRecord {
    pub id: i64,
    pub shop_id: i64,                 // ⇔ punches.shop_id
    pub employee_id: Option<i64>,     // ⇔ punches.employee_id (NULL = shop-level punch)
    pub date_at: NaiveDate,           // ⇔ punches.date_at (TEXT "YYYY-MM-DD")
    pub time_at: NaiveTime,           // ⇔ punches.time_at (TEXT "HH:MM:SS")
    pub resolved_at: NaiveDateTime,   // ⇔ punches.resolved_at (TEXT "YYYY-MM-DD HH:MM:SS")
    pub shift_start: NaiveTime,       // shift parameters captured at write time
    pub shift_end: NaiveTime,
    pub buffer_hours: u32,
    pub kind: PunchKind,
    pub comment: String,              // ⇔ punches.comment (TEXT, default '')
    pub origin: Origin,               // ⇔ punches.origin ('api' | 'web')
    pub created_at: String,           // ⇔ punches.created_at (TEXT, ISO8601)
}

impl PunchRecord {
    /// Build the record for an accepted candidate.
    /// - `id = 0` (assigned by the store on insert)
    /// - `created_at = now() in ISO8601`
    pub fn accepted(candidate: &PunchCandidate, shift: &Shift, resolved_at: NaiveDateTime) -> Self {
        Self {
            id: 0,
            shop_id: candidate.shop_id,
            employee_id: candidate.employee_id,
            date_at: candidate.date,
            time_at: candidate.time,
            resolved_at,
            shift_start: shift.start,
            shift_end: shift.end,
            buffer_hours: shift.buffer_hours,
            kind: candidate.kind,
            comment: candidate.comment.clone().unwrap_or_default(),
            origin: candidate.origin,
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date_at.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        self.time_at.format("%H:%M:%S").to_string()
    }

    pub fn resolved_str(&self) -> String {
        self.resolved_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
