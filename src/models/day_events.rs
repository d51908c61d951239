use super::punch::PunchRecord;
use super::punch_kind::PunchKind;
use chrono::{NaiveDateTime, NaiveTime};

/// Read-only snapshot of every punch recorded for one
/// (shop, employee, calendar date) bucket.
///
/// The store returns rows ordered by raw `time_at`, which is ambiguous when
/// a shift rolls past midnight; the constructor re-sorts by `resolved_at`
/// so every view below is correct across rollover. Built fresh per
/// validation call and never mutated — an accepted punch is appended to the
/// store and the next call re-reads a fresh snapshot.
#[derive(Debug, Clone, Default)]
pub struct DayEventSet {
    records: Vec<PunchRecord>,
}

impl DayEventSet {
    pub fn new(mut records: Vec<PunchRecord>) -> Self {
        records.sort_by_key(|r| (r.resolved_at, r.id));
        Self { records }
    }

    pub fn records(&self) -> &[PunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn all_of_kind(&self, kind: PunchKind) -> impl DoubleEndedIterator<Item = &PunchRecord> {
        self.records.iter().filter(move |r| r.kind == kind)
    }

    pub fn count_of_kind(&self, kind: PunchKind) -> usize {
        self.all_of_kind(kind).count()
    }

    /// Latest record of `kind` by `resolved_at`, if any.
    pub fn latest_of_kind(&self, kind: PunchKind) -> Option<&PunchRecord> {
        self.all_of_kind(kind).next_back()
    }

    /// More Break Starts than Break Ends → a break is open somewhere in
    /// the bucket.
    pub fn has_unmatched_break_start(&self) -> bool {
        self.count_of_kind(PunchKind::BreakStart) > self.count_of_kind(PunchKind::BreakEnd)
    }

    /// The Day In that opened the current shift: the latest one overall.
    /// A day may hold several closed Day In / Day Out pairs; earlier pairs
    /// never reopen, so the latest Day In is the only one that can still
    /// be open.
    pub fn latest_day_in(&self) -> Option<&PunchRecord> {
        self.latest_of_kind(PunchKind::DayIn)
    }

    /// The latest Day In, provided no Day Out has closed it yet.
    pub fn open_day_in(&self) -> Option<&PunchRecord> {
        let day_in = self.latest_day_in()?;
        if self.day_out_after(day_in.resolved_at).is_some() {
            None
        } else {
            Some(day_in)
        }
    }

    /// Latest Day Out strictly after the given instant, if any.
    pub fn day_out_after(&self, after: NaiveDateTime) -> Option<&PunchRecord> {
        self.all_of_kind(PunchKind::DayOut)
            .filter(|r| r.resolved_at > after)
            .next_back()
    }

    /// Latest Break End strictly after the given instant, if any.
    pub fn break_end_after(&self, after: NaiveDateTime) -> Option<&PunchRecord> {
        self.all_of_kind(PunchKind::BreakEnd)
            .filter(|r| r.resolved_at > after)
            .next_back()
    }

    /// Duplicate probe: same kind at the exact same wall-clock second,
    /// regardless of how the times resolved across midnight.
    pub fn has_kind_at_second(&self, kind: PunchKind, time: NaiveTime) -> bool {
        self.all_of_kind(kind).any(|r| r.time_at == time)
    }
}
