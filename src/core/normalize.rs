use super::window::buffer_window;
use crate::models::shift::Shift;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// A raw (date, time) punch resolved to an absolute, shift-aware instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedPunch {
    pub resolved_at: NaiveDateTime,
    pub rolled_to_next_day: bool,
}

/// Resolve a punch submitted against calendar day `date`.
///
/// A shift like 08:00-23:00 with a 3-hour buffer legitimately extends into
/// the 00:00-02:00 window of the following calendar date; a punch in that
/// window still belongs to `date`'s shift and must resolve to an instant
/// *after* that shift's start for ordering. Classification: when the
/// buffered shift end crosses midnight, a time at or before it (compared
/// to the minute, inclusive of the exact buffer-end minute) belongs to the
/// next calendar day. Times past the buffer end, and every time of a shift
/// whose buffered end stays inside the nominal day, are same-day.
pub fn normalize(date: NaiveDate, time: NaiveTime, shift: &Shift) -> NormalizedPunch {
    let window = buffer_window(shift);
    let buffer_end = window.latest_out;

    let rolled = window.out_on_next_day
        && (time.hour() < buffer_end.hour()
            || (time.hour() == buffer_end.hour() && time.minute() <= buffer_end.minute()));

    let day = if rolled {
        date + Duration::days(1)
    } else {
        date
    };

    NormalizedPunch {
        resolved_at: day.and_time(time),
        rolled_to_next_day: rolled,
    }
}
