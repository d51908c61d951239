use crate::models::shift::Shift;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Allowed punch boundaries for a shift: the grace period before the
/// nominal start and after the nominal end. Both bounds are time-of-day
/// values that may wrap past midnight; the flags record on which side of
/// the nominal day each bound landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferWindow {
    pub earliest_in: NaiveTime,
    pub in_on_prev_day: bool,
    pub latest_out: NaiveTime,
    pub out_on_next_day: bool,
}

impl BufferWindow {
    /// Anchor `earliest_in` to an absolute instant for the given shift date.
    pub fn earliest_in_at(&self, date: NaiveDate) -> NaiveDateTime {
        let day = if self.in_on_prev_day {
            date - Duration::days(1)
        } else {
            date
        };
        day.and_time(self.earliest_in)
    }

    /// Anchor `latest_out` to an absolute instant for the given shift date.
    pub fn latest_out_at(&self, date: NaiveDate) -> NaiveDateTime {
        let day = if self.out_on_next_day {
            date + Duration::days(1)
        } else {
            date
        };
        day.and_time(self.latest_out)
    }
}

/// Derive the buffer window from the shift parameters.
/// Pure arithmetic, no failure modes (shift validity is checked upstream).
pub fn buffer_window(shift: &Shift) -> BufferWindow {
    let buffer = shift.buffer();
    let (earliest_in, borrowed) = shift.start.overflowing_sub_signed(buffer);
    let (latest_out, carried) = shift.end.overflowing_add_signed(buffer);

    BufferWindow {
        earliest_in,
        in_on_prev_day: borrowed != 0,
        latest_out,
        out_on_next_day: carried != 0,
    }
}
