mod common;
use common::ts;

use punchclock::core::calculator::adjustment::hours_for_month;
use punchclock::core::calculator::intervals::hours_for_month_raw;
use punchclock::models::adjustment::MonthAdjustment;
use punchclock::models::month::Month;
use punchclock::models::punch::Punch;

fn punches(times: &[&str]) -> Vec<Punch> {
    times.iter().map(|t| Punch::new(ts(t))).collect()
}

fn may() -> Month {
    Month::parse("2024-05").unwrap()
}

#[test]
fn test_no_adjustment_equals_raw() {
    let p = punches(&["2024-05-16 09:00", "2024-05-16 12:00"]);

    assert_eq!(hours_for_month(&p, may(), None), hours_for_month_raw(&p, may()));
}

#[test]
fn test_adjustment_replaces_hours_up_to_cutoff() {
    // punches before the cutoff are fully superseded by the manual value
    let p = punches(&["2024-05-10 09:00", "2024-05-10 18:00"]);
    let adj = MonthAdjustment::new(may(), 40.0, ts("2024-05-15 00:00"));

    assert_eq!(hours_for_month(&p, may(), Some(&adj)), 40.0);
}

#[test]
fn test_punches_after_cutoff_are_added() {
    let p = punches(&[
        "2024-05-10 09:00",
        "2024-05-10 18:00",
        "2024-05-16 09:00",
        "2024-05-16 11:00",
    ]);
    let adj = MonthAdjustment::new(may(), 40.0, ts("2024-05-15 00:00"));

    assert_eq!(hours_for_month(&p, may(), Some(&adj)), 42.0);
}

#[test]
fn test_adjustment_for_other_month_is_ignored() {
    let p = punches(&["2024-05-16 09:00", "2024-05-16 12:00"]);
    let adj = MonthAdjustment::new(Month::parse("2024-04").unwrap(), 40.0, ts("2024-04-15 00:00"));

    assert_eq!(hours_for_month(&p, may(), Some(&adj)), 3.0);
}

#[test]
fn test_vacuous_cutoff_falls_back_to_raw() {
    let p = punches(&["2024-05-16 09:00", "2024-05-16 12:00"]);

    // cutoff at (or before) the first instant of the month covers nothing
    let adj = MonthAdjustment::new(may(), 40.0, ts("2024-05-01 00:00"));
    assert_eq!(hours_for_month(&p, may(), Some(&adj)), 3.0);
}

#[test]
fn test_cutoff_past_month_end_is_clamped() {
    // manual value covers the whole month; nothing is computed after it
    let p = punches(&["2024-05-16 09:00", "2024-05-16 12:00"]);
    let adj = MonthAdjustment::new(may(), 40.0, ts("2024-07-01 00:00"));

    assert_eq!(hours_for_month(&p, may(), Some(&adj)), 40.0);
}
