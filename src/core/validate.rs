//! Punch validation state machine.
//!
//! Pure decision function over a candidate punch, the shift parameters and
//! the immutable `DayEventSet` snapshot. No side effects: on acceptance
//! the caller persists the record and the next call re-reads a fresh
//! snapshot. Every ordering comparison uses `resolved_at`, never raw
//! time-of-day, so decisions stay correct across midnight rollover.

use super::normalize::{NormalizedPunch, normalize};
use super::window::buffer_window;
use crate::models::day_events::DayEventSet;
use crate::models::punch::PunchCandidate;
use crate::models::punch_kind::PunchKind;
use crate::models::shift::Shift;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

const STAMP: &str = "%Y-%m-%d %H:%M:%S";

/// Why a punch was refused. Expected, local outcomes — returned as values,
/// never escalated. Each message interpolates the boundary instant the
/// candidate collided with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("a {} punch already exists at {} {}", .kind.label(), .date, .time.format("%H:%M:%S"))]
    DuplicatePunch {
        kind: PunchKind,
        date: NaiveDate,
        time: NaiveTime,
    },

    #[error("punch at {} is before the earliest allowed clock-in {}", .time.format("%H:%M:%S"), .earliest.format(STAMP))]
    OutsideBufferWindow {
        time: NaiveTime,
        earliest: NaiveDateTime,
    },

    #[error("shift opened at {} is still open; complete a Day Out first", .opened_at.format(STAMP))]
    ShiftAlreadyOpen { opened_at: NaiveDateTime },

    #[error("a new shift must start after the previous Day Out at {}", .closed_at.format(STAMP))]
    OutOfOrder { closed_at: NaiveDateTime },

    #[error("no open shift: punch a Day In first")]
    NoOpenShift,

    #[error("punch must come after the shift opened at {}", .opened_at.format(STAMP))]
    BeforeShiftStart { opened_at: NaiveDateTime },

    #[error("a break opened at {} is still open", .started_at.format(STAMP))]
    BreakAlreadyOpen { started_at: NaiveDateTime },

    #[error("no open break: punch a Break Start first")]
    NoOpenBreak,

    #[error("the break opened at {} was already closed at {}", .started_at.format(STAMP), .ended_at.format(STAMP))]
    BreakAlreadyClosed {
        started_at: NaiveDateTime,
        ended_at: NaiveDateTime,
    },

    #[error("break end must come after the break started at {}", .started_at.format(STAMP))]
    BeforeBreakStart { started_at: NaiveDateTime },

    #[error("break end must come before the shift closed at {}", .closed_at.format(STAMP))]
    AfterShiftEnd { closed_at: NaiveDateTime },

    #[error("the shift opened at {} was already closed at {}", .opened_at.format(STAMP), .closed_at.format(STAMP))]
    ShiftAlreadyClosed {
        opened_at: NaiveDateTime,
        closed_at: NaiveDateTime,
    },

    #[error("close the break opened at {} before punching out", .started_at.format(STAMP))]
    OpenBreakPending { started_at: NaiveDateTime },

    #[error("day out must come after the last break end at {}", .ended_at.format(STAMP))]
    BeforeLastBreakEnd { ended_at: NaiveDateTime },

    #[error("unknown punch kind: {0}")]
    InvalidKind(String),
}

impl Rejection {
    /// Stable machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::DuplicatePunch { .. } => "duplicate_punch",
            Rejection::OutsideBufferWindow { .. } => "outside_buffer_window",
            Rejection::ShiftAlreadyOpen { .. } => "shift_already_open",
            Rejection::OutOfOrder { .. } => "out_of_order",
            Rejection::NoOpenShift => "no_open_shift",
            Rejection::BeforeShiftStart { .. } => "before_shift_start",
            Rejection::BreakAlreadyOpen { .. } => "break_already_open",
            Rejection::NoOpenBreak => "no_open_break",
            Rejection::BreakAlreadyClosed { .. } => "break_already_closed",
            Rejection::BeforeBreakStart { .. } => "before_break_start",
            Rejection::AfterShiftEnd { .. } => "after_shift_end",
            Rejection::ShiftAlreadyClosed { .. } => "shift_already_closed",
            Rejection::OpenBreakPending { .. } => "open_break_pending",
            Rejection::BeforeLastBreakEnd { .. } => "before_last_break_end",
            Rejection::InvalidKind(_) => "invalid_kind",
        }
    }
}

/// A positive decision: the instant the punch resolves to, and whether it
/// was classified as a next-day rollover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acceptance {
    pub resolved_at: NaiveDateTime,
    pub rolled_to_next_day: bool,
}

/// Decide a candidate punch against the bucket snapshot.
///
/// Boundary semantics, applied uniformly: ordering between punches is
/// strict (`<` / `>`); the earliest clock-in edge is inclusive (a Day In
/// at exactly `shift_start - buffer` passes); the rollover buffer-end
/// minute is inclusive (handled in `normalize`).
pub fn validate(
    candidate: &PunchCandidate,
    shift: &Shift,
    existing: &DayEventSet,
) -> Result<Acceptance, Rejection> {
    let norm = normalize(candidate.date, candidate.time, shift);

    // Shared pre-check: same kind at the exact same second in this bucket.
    if existing.has_kind_at_second(candidate.kind, candidate.time) {
        return Err(Rejection::DuplicatePunch {
            kind: candidate.kind,
            date: candidate.date,
            time: candidate.time,
        });
    }

    match candidate.kind {
        PunchKind::DayIn => check_day_in(candidate, shift, existing, &norm),
        PunchKind::BreakStart => check_break_start(existing, &norm),
        PunchKind::BreakEnd => check_break_end(existing, &norm),
        PunchKind::DayOut => check_day_out(existing, &norm),
    }?;

    Ok(Acceptance {
        resolved_at: norm.resolved_at,
        rolled_to_next_day: norm.rolled_to_next_day,
    })
}

fn check_day_in(
    candidate: &PunchCandidate,
    shift: &Shift,
    existing: &DayEventSet,
    norm: &NormalizedPunch,
) -> Result<(), Rejection> {
    let Some(day_in) = existing.latest_day_in() else {
        // First Day In of the bucket. Rollover times are the continuation
        // of the shift window, not an early arrival, so they always pass;
        // same-day times must reach the earliest clock-in edge.
        if norm.rolled_to_next_day {
            return Ok(());
        }
        let earliest = buffer_window(shift).earliest_in_at(candidate.date);
        if norm.resolved_at >= earliest {
            return Ok(());
        }
        return Err(Rejection::OutsideBufferWindow {
            time: candidate.time,
            earliest,
        });
    };

    match existing.day_out_after(day_in.resolved_at) {
        // Open shift: the previous Day In was never closed.
        None => Err(Rejection::ShiftAlreadyOpen {
            opened_at: day_in.resolved_at,
        }),
        // Closed shift: a new one may start, strictly after the close.
        Some(day_out) => {
            if norm.resolved_at > day_out.resolved_at {
                Ok(())
            } else {
                Err(Rejection::OutOfOrder {
                    closed_at: day_out.resolved_at,
                })
            }
        }
    }
}

fn check_break_start(existing: &DayEventSet, norm: &NormalizedPunch) -> Result<(), Rejection> {
    let Some(day_in) = existing.open_day_in() else {
        return Err(Rejection::NoOpenShift);
    };

    if norm.resolved_at <= day_in.resolved_at {
        return Err(Rejection::BeforeShiftStart {
            opened_at: day_in.resolved_at,
        });
    }

    if existing.has_unmatched_break_start() {
        // latest_of_kind is Some here: an unmatched start implies at
        // least one BreakStart record.
        let started_at = existing
            .latest_of_kind(PunchKind::BreakStart)
            .map(|r| r.resolved_at)
            .unwrap_or(norm.resolved_at);
        return Err(Rejection::BreakAlreadyOpen { started_at });
    }

    Ok(())
}

fn check_break_end(existing: &DayEventSet, norm: &NormalizedPunch) -> Result<(), Rejection> {
    let Some(break_start) = existing.latest_of_kind(PunchKind::BreakStart) else {
        return Err(Rejection::NoOpenBreak);
    };

    if let Some(break_end) = existing.break_end_after(break_start.resolved_at) {
        return Err(Rejection::BreakAlreadyClosed {
            started_at: break_start.resolved_at,
            ended_at: break_end.resolved_at,
        });
    }

    if norm.resolved_at <= break_start.resolved_at {
        return Err(Rejection::BeforeBreakStart {
            started_at: break_start.resolved_at,
        });
    }

    // A Day Out for the current shift caps the break end; without one, no
    // upper bound is enforced.
    if let Some(day_in) = existing.latest_day_in()
        && let Some(day_out) = existing.day_out_after(day_in.resolved_at)
        && norm.resolved_at >= day_out.resolved_at
    {
        return Err(Rejection::AfterShiftEnd {
            closed_at: day_out.resolved_at,
        });
    }

    Ok(())
}

fn check_day_out(existing: &DayEventSet, norm: &NormalizedPunch) -> Result<(), Rejection> {
    let Some(day_in) = existing.latest_day_in() else {
        return Err(Rejection::NoOpenShift);
    };

    if let Some(day_out) = existing.day_out_after(day_in.resolved_at) {
        return Err(Rejection::ShiftAlreadyClosed {
            opened_at: day_in.resolved_at,
            closed_at: day_out.resolved_at,
        });
    }

    if existing.has_unmatched_break_start() {
        let started_at = existing
            .latest_of_kind(PunchKind::BreakStart)
            .map(|r| r.resolved_at)
            .unwrap_or(norm.resolved_at);
        return Err(Rejection::OpenBreakPending { started_at });
    }

    if norm.resolved_at <= day_in.resolved_at {
        return Err(Rejection::BeforeShiftStart {
            opened_at: day_in.resolved_at,
        });
    }

    if let Some(break_end) = existing.break_end_after(day_in.resolved_at)
        && norm.resolved_at <= break_end.resolved_at
    {
        return Err(Rejection::BeforeLastBreakEnd {
            ended_at: break_end.resolved_at,
        });
    }

    Ok(())
}
