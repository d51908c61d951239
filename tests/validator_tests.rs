mod common;
use common::{cand, d, day_shift, rec, t};

use punchdeck::core::validate::{Rejection, validate};
use punchdeck::models::day_events::DayEventSet;
use punchdeck::models::punch_kind::PunchKind::{BreakEnd, BreakStart, DayIn, DayOut};

const DATE: &str = "2025-01-10";

#[test]
fn first_day_in_at_window_edge_is_accepted() {
    let shift = day_shift();
    let empty = DayEventSet::default();

    // 05:00 is exactly shift_start - buffer: inclusive edge.
    let acc = validate(&cand(DayIn, DATE, "05:00"), &shift, &empty).expect("accepted");
    assert!(!acc.rolled_to_next_day);
    assert_eq!(acc.resolved_at, d(DATE).and_time(t("05:00")));
}

#[test]
fn first_day_in_before_window_is_rejected() {
    let shift = day_shift();
    let empty = DayEventSet::default();

    let err = validate(&cand(DayIn, DATE, "04:59"), &shift, &empty).unwrap_err();
    assert!(matches!(err, Rejection::OutsideBufferWindow { .. }));
    assert_eq!(err.code(), "outside_buffer_window");
}

#[test]
fn rollover_day_in_skips_the_early_window_check() {
    let shift = day_shift();
    let empty = DayEventSet::default();

    // 01:30 falls inside the next-day continuation window (ends 02:00),
    // which is never an early arrival.
    let acc = validate(&cand(DayIn, DATE, "01:30"), &shift, &empty).expect("accepted");
    assert!(acc.rolled_to_next_day);
    assert_eq!(acc.resolved_at, d("2025-01-11").and_time(t("01:30")));
}

#[test]
fn duplicate_same_kind_same_second_is_rejected() {
    let shift = day_shift();
    let set = DayEventSet::new(vec![rec(1, DayIn, DATE, "08:00", &shift)]);

    let err = validate(&cand(DayIn, DATE, "08:00"), &shift, &set).unwrap_err();
    assert_eq!(err.code(), "duplicate_punch");

    // Same rule regardless of how much state sits in between.
    let set = DayEventSet::new(vec![
        rec(1, DayIn, DATE, "08:00", &shift),
        rec(2, BreakStart, DATE, "12:00", &shift),
        rec(3, BreakEnd, DATE, "12:30", &shift),
        rec(4, DayOut, DATE, "17:00", &shift),
    ]);
    let err = validate(&cand(BreakStart, DATE, "12:00"), &shift, &set).unwrap_err();
    assert_eq!(err.code(), "duplicate_punch");
}

#[test]
fn second_day_in_while_shift_open_is_rejected() {
    let shift = day_shift();
    let set = DayEventSet::new(vec![rec(1, DayIn, DATE, "08:00", &shift)]);

    let err = validate(&cand(DayIn, DATE, "09:00"), &shift, &set).unwrap_err();
    assert_eq!(err.code(), "shift_already_open");
}

#[test]
fn new_shift_after_close_must_be_later_than_the_close() {
    let shift = day_shift();
    let set = DayEventSet::new(vec![
        rec(1, DayIn, DATE, "08:00", &shift),
        rec(2, DayOut, DATE, "12:00", &shift),
    ]);

    // Strictly after the Day Out: accepted.
    assert!(validate(&cand(DayIn, DATE, "13:00"), &shift, &set).is_ok());

    // At or before the Day Out: out of order.
    let err = validate(&cand(DayIn, DATE, "12:00"), &shift, &set).unwrap_err();
    assert_eq!(err.code(), "out_of_order");
    let err = validate(&cand(DayIn, DATE, "11:00"), &shift, &set).unwrap_err();
    assert_eq!(err.code(), "out_of_order");
}

#[test]
fn break_start_needs_an_open_shift() {
    let shift = day_shift();

    let err = validate(&cand(BreakStart, DATE, "12:00"), &shift, &DayEventSet::default())
        .unwrap_err();
    assert_eq!(err.code(), "no_open_shift");

    // A closed shift is no better than no shift at all.
    let closed = DayEventSet::new(vec![
        rec(1, DayIn, DATE, "08:00", &shift),
        rec(2, DayOut, DATE, "12:00", &shift),
    ]);
    let err = validate(&cand(BreakStart, DATE, "13:00"), &shift, &closed).unwrap_err();
    assert_eq!(err.code(), "no_open_shift");
}

#[test]
fn break_start_must_follow_the_day_in_strictly() {
    let shift = day_shift();
    let set = DayEventSet::new(vec![rec(1, DayIn, DATE, "08:00", &shift)]);

    // Same instant as the Day In: strict comparison rejects it. The
    // duplicate pre-check only covers same-kind punches, so this lands on
    // the ordering rule instead.
    let err = validate(&cand(BreakStart, DATE, "08:00:00"), &shift, &set).unwrap_err();
    assert_eq!(err.code(), "before_shift_start");

    // One second later is already strictly after.
    assert!(validate(&cand(BreakStart, DATE, "08:00:01"), &shift, &set).is_ok());
}

#[test]
fn second_break_start_while_break_open_is_rejected() {
    let shift = day_shift();
    let set = DayEventSet::new(vec![
        rec(1, DayIn, DATE, "08:00", &shift),
        rec(2, BreakStart, DATE, "12:00", &shift),
    ]);

    let err = validate(&cand(BreakStart, DATE, "13:00"), &shift, &set).unwrap_err();
    assert_eq!(err.code(), "break_already_open");
}

#[test]
fn break_end_needs_an_open_break() {
    let shift = day_shift();
    let set = DayEventSet::new(vec![rec(1, DayIn, DATE, "08:00", &shift)]);

    let err = validate(&cand(BreakEnd, DATE, "12:30"), &shift, &set).unwrap_err();
    assert_eq!(err.code(), "no_open_break");
}

#[test]
fn break_end_after_break_closed_is_rejected() {
    let shift = day_shift();
    let set = DayEventSet::new(vec![
        rec(1, DayIn, DATE, "08:00", &shift),
        rec(2, BreakStart, DATE, "12:00", &shift),
        rec(3, BreakEnd, DATE, "12:30", &shift),
    ]);

    let err = validate(&cand(BreakEnd, DATE, "12:45"), &shift, &set).unwrap_err();
    assert_eq!(err.code(), "break_already_closed");
}

#[test]
fn break_end_must_follow_its_break_start() {
    let shift = day_shift();
    let set = DayEventSet::new(vec![
        rec(1, DayIn, DATE, "08:00", &shift),
        rec(2, BreakStart, DATE, "12:00", &shift),
    ]);

    let err = validate(&cand(BreakEnd, DATE, "11:59"), &shift, &set).unwrap_err();
    assert_eq!(err.code(), "before_break_start");
}

#[test]
fn break_end_is_unbounded_until_a_day_out_exists() {
    let shift = day_shift();
    let set = DayEventSet::new(vec![
        rec(1, DayIn, DATE, "08:00", &shift),
        rec(2, BreakStart, DATE, "12:00", &shift),
    ]);

    // Hours later, still fine: no Day Out caps it yet.
    assert!(validate(&cand(BreakEnd, DATE, "22:30"), &shift, &set).is_ok());
}

#[test]
fn break_end_after_day_out_is_rejected() {
    let shift = day_shift();
    // A Day Out exists but the break never got closed (records written by
    // an older, more permissive client); the cap still applies.
    let set = DayEventSet::new(vec![
        rec(1, DayIn, DATE, "08:00", &shift),
        rec(2, BreakStart, DATE, "12:00", &shift),
        rec(3, DayOut, DATE, "17:00", &shift),
    ]);

    let err = validate(&cand(BreakEnd, DATE, "17:30"), &shift, &set).unwrap_err();
    assert_eq!(err.code(), "after_shift_end");

    // Strictly before the Day Out: accepted.
    assert!(validate(&cand(BreakEnd, DATE, "16:30"), &shift, &set).is_ok());
}

#[test]
fn day_out_needs_an_open_shift() {
    let shift = day_shift();

    let err = validate(&cand(DayOut, DATE, "17:00"), &shift, &DayEventSet::default())
        .unwrap_err();
    assert_eq!(err.code(), "no_open_shift");
}

#[test]
fn second_day_out_for_the_same_shift_is_rejected() {
    let shift = day_shift();
    let set = DayEventSet::new(vec![
        rec(1, DayIn, DATE, "08:00", &shift),
        rec(2, DayOut, DATE, "17:00", &shift),
    ]);

    let err = validate(&cand(DayOut, DATE, "18:00"), &shift, &set).unwrap_err();
    assert_eq!(err.code(), "shift_already_closed");
}

#[test]
fn day_out_with_open_break_is_rejected() {
    let shift = day_shift();
    let set = DayEventSet::new(vec![
        rec(1, DayIn, DATE, "08:00", &shift),
        rec(2, BreakStart, DATE, "12:00", &shift),
    ]);

    let err = validate(&cand(DayOut, DATE, "17:00"), &shift, &set).unwrap_err();
    assert_eq!(err.code(), "open_break_pending");
}

#[test]
fn day_out_must_follow_day_in_and_last_break_end() {
    let shift = day_shift();
    let set = DayEventSet::new(vec![
        rec(1, DayIn, DATE, "08:00", &shift),
        rec(2, BreakStart, DATE, "12:00", &shift),
        rec(3, BreakEnd, DATE, "12:30", &shift),
    ]);

    let err = validate(&cand(DayOut, DATE, "07:00"), &shift, &set).unwrap_err();
    assert_eq!(err.code(), "before_shift_start");

    let err = validate(&cand(DayOut, DATE, "12:15"), &shift, &set).unwrap_err();
    assert_eq!(err.code(), "before_last_break_end");

    assert!(validate(&cand(DayOut, DATE, "17:00"), &shift, &set).is_ok());
}

#[test]
fn accepted_sequence_is_monotonic_on_resolved_at() {
    let shift = day_shift();
    let mut records = Vec::new();
    let mut id = 0;

    // Drive a full shift through the validator, persisting each accepted
    // punch into the snapshot the next step validates against.
    for (kind, time) in [
        (DayIn, "05:00"),
        (BreakStart, "12:00"),
        (BreakEnd, "12:30"),
        (DayOut, "01:30"), // rolls into the next-day window
    ] {
        let set = DayEventSet::new(records.clone());
        let acc = validate(&cand(kind, DATE, time), &shift, &set)
            .unwrap_or_else(|e| panic!("{} at {} rejected: {}", kind.label(), time, e));
        id += 1;
        let mut r = rec(id, kind, DATE, time, &shift);
        r.resolved_at = acc.resolved_at;
        records.push(r);
    }

    let resolved: Vec<_> = records.iter().map(|r| r.resolved_at).collect();
    let mut sorted = resolved.clone();
    sorted.sort();
    assert_eq!(resolved, sorted, "punch order must be chronological");
    assert_eq!(records.last().unwrap().resolved_at, d("2025-01-11").and_time(t("01:30")));
}

#[test]
fn two_closed_shifts_in_one_calendar_day() {
    let shift = day_shift();
    let set = DayEventSet::new(vec![
        rec(1, DayIn, DATE, "08:00", &shift),
        rec(2, DayOut, DATE, "12:00", &shift),
        rec(3, DayIn, DATE, "14:00", &shift),
    ]);

    // The second shift closes independently of the first.
    assert!(validate(&cand(DayOut, DATE, "18:00"), &shift, &set).is_ok());

    // Breaks attach to the open (latest) shift only.
    assert!(validate(&cand(BreakStart, DATE, "15:00"), &shift, &set).is_ok());
}
