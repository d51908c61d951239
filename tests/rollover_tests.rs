mod common;
use common::{d, day_shift, t};

use punchdeck::core::normalize::normalize;
use punchdeck::core::window::buffer_window;
use punchdeck::models::shift::Shift;

#[test]
fn times_inside_the_wrapped_buffer_roll_to_the_next_day() {
    let shift = day_shift(); // 08:00-23:00, buffer 3h → window ends 02:00 next day

    let n = normalize(d("2025-01-10"), t("01:30"), &shift);
    assert!(n.rolled_to_next_day);
    assert_eq!(n.resolved_at, d("2025-01-11").and_time(t("01:30")));

    // The exact buffer-end minute is inclusive.
    let n = normalize(d("2025-01-10"), t("02:00"), &shift);
    assert!(n.rolled_to_next_day);
    assert_eq!(n.resolved_at, d("2025-01-11").and_time(t("02:00")));

    // Any second within the buffer-end minute still rolls.
    let n = normalize(d("2025-01-10"), t("02:00:59"), &shift);
    assert!(n.rolled_to_next_day);
}

#[test]
fn times_past_the_buffer_end_stay_on_the_submission_day() {
    let shift = day_shift();

    let n = normalize(d("2025-01-10"), t("02:01"), &shift);
    assert!(!n.rolled_to_next_day);
    assert_eq!(n.resolved_at, d("2025-01-10").and_time(t("02:01")));

    // The early clock-in window below shift start is same-day too.
    let n = normalize(d("2025-01-10"), t("05:00"), &shift);
    assert!(!n.rolled_to_next_day);
}

#[test]
fn shifts_whose_buffer_stays_inside_the_day_never_roll() {
    // 08:00-12:00 with 3h buffer ends at 15:00, no midnight crossing;
    // no time of day may be reclassified.
    let shift = Shift::new(t("08:00"), t("12:00"), 3);

    for time in ["00:30", "01:00", "09:00", "14:59", "23:00"] {
        let n = normalize(d("2025-01-10"), t(time), &shift);
        assert!(!n.rolled_to_next_day, "{} must not roll", time);
        assert_eq!(n.resolved_at.date(), d("2025-01-10"));
    }
}

#[test]
fn window_bounds_wrap_and_anchor_correctly() {
    let w = buffer_window(&day_shift());
    assert_eq!(w.earliest_in, t("05:00"));
    assert!(!w.in_on_prev_day);
    assert_eq!(w.latest_out, t("02:00"));
    assert!(w.out_on_next_day);

    assert_eq!(
        w.latest_out_at(d("2025-01-10")),
        d("2025-01-11").and_time(t("02:00"))
    );

    // An early shift pushes the earliest clock-in into the previous day.
    let w = buffer_window(&Shift::new(t("01:00"), t("09:00"), 3));
    assert_eq!(w.earliest_in, t("22:00"));
    assert!(w.in_on_prev_day);
    assert_eq!(
        w.earliest_in_at(d("2025-01-10")),
        d("2025-01-09").and_time(t("22:00"))
    );
    assert_eq!(w.latest_out, t("12:00"));
    assert!(!w.out_on_next_day);
}

#[test]
fn malformed_shift_configurations_are_fatal() {
    // start >= end
    assert!(Shift::new(t("23:00"), t("08:00"), 3).validate().is_err());
    assert!(Shift::new(t("08:00"), t("08:00"), 3).validate().is_err());

    // Buffered window spanning a full day: rollover would be ambiguous.
    assert!(Shift::new(t("08:00"), t("23:00"), 21).validate().is_err());
    assert!(Shift::new(t("00:30"), t("23:45"), 1).validate().is_err());

    // Sane configurations pass.
    assert!(Shift::new(t("08:00"), t("23:00"), 3).validate().is_ok());
    assert!(Shift::new(t("08:00"), t("17:00"), 0).validate().is_ok());
}
