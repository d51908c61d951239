use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveTime};
use serde::Serialize;

/// Nominal shift parameters for one (shop, employee) pair at submission
/// time. Captured into each punch record on write; historical records stay
/// immutable if the configuration changes later.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Shift {
    pub start: NaiveTime, // ⇔ punches.shift_start (TEXT "HH:MM:SS")
    pub end: NaiveTime,   // ⇔ punches.shift_end (TEXT "HH:MM:SS")
    pub buffer_hours: u32,
}

impl Shift {
    pub fn new(start: NaiveTime, end: NaiveTime, buffer_hours: u32) -> Self {
        Self {
            start,
            end,
            buffer_hours,
        }
    }

    pub fn buffer(&self) -> Duration {
        Duration::hours(i64::from(self.buffer_hours))
    }

    /// Reject malformed configurations up front.
    ///
    /// `start < end` within the nominal day, and the full buffered window
    /// `(end - start) + 2 * buffer` must stay under 24 hours: a wider
    /// window makes the next-day rollover classification ambiguous.
    pub fn validate(&self) -> AppResult<()> {
        if self.start >= self.end {
            return Err(AppError::InvalidShift(format!(
                "shift start {} must be before shift end {}",
                self.start.format("%H:%M"),
                self.end.format("%H:%M"),
            )));
        }

        let window = (self.end - self.start) + self.buffer() * 2;
        if window >= Duration::hours(24) {
            return Err(AppError::InvalidShift(format!(
                "shift {}-{} with a {}h buffer spans a full day; \
                 shrink the shift or the buffer",
                self.start.format("%H:%M"),
                self.end.format("%H:%M"),
                self.buffer_hours,
            )));
        }

        Ok(())
    }

    pub fn start_str(&self) -> String {
        self.start.format("%H:%M:%S").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%H:%M:%S").to_string()
    }
}
