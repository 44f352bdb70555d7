mod common;
use common::ts;

use punchclock::core::calculator::intervals::{hours_for_day, worked_millis};
use punchclock::models::punch::Punch;
use punchclock::utils::date::parse_date;

fn punches(times: &[&str]) -> Vec<Punch> {
    times.iter().map(|t| Punch::new(ts(t))).collect()
}

#[test]
fn test_worked_millis_empty_ledger_is_zero() {
    let (s, e) = (ts("2024-05-16 00:00"), ts("2024-05-17 00:00"));
    assert_eq!(worked_millis(&[], s, e), 0);
}

#[test]
fn test_worked_millis_bounds() {
    let p = punches(&[
        "2024-05-16 08:55",
        "2024-05-16 12:10",
        "2024-05-16 13:05",
        "2024-05-16 18:40",
        "2024-05-17 09:00",
    ]);
    let (s, e) = (ts("2024-05-16 00:00"), ts("2024-05-17 00:00"));

    let w = worked_millis(&p, s, e);
    assert!(w >= 0);
    assert!(w <= e - s);
}

#[test]
fn test_worked_millis_additive_over_partition() {
    let p = punches(&[
        "2024-05-16 09:00",
        "2024-05-16 12:00",
        "2024-05-16 13:00",
        "2024-05-16 18:00",
    ]);
    let a = ts("2024-05-16 00:00");
    let b = ts("2024-05-16 12:30");
    let c = ts("2024-05-17 00:00");

    // the split point falls inside the lunch break, but additivity must hold
    // for any partition point
    assert_eq!(
        worked_millis(&p, a, c),
        worked_millis(&p, a, b) + worked_millis(&p, b, c)
    );

    // partition point in the middle of a session
    let mid = ts("2024-05-16 10:30");
    assert_eq!(
        worked_millis(&p, a, c),
        worked_millis(&p, a, mid) + worked_millis(&p, mid, c)
    );
}

#[test]
fn test_full_day_scenario_is_exactly_eight_hours() {
    // 09:00-12:00 + 13:00-18:00 = 3h + 5h
    let p = punches(&[
        "2024-05-16 09:00",
        "2024-05-16 12:00",
        "2024-05-16 13:00",
        "2024-05-16 18:00",
    ]);
    let d = parse_date("2024-05-16").unwrap();

    assert_eq!(hours_for_day(&p, d), 8.0);
}

#[test]
fn test_trailing_unpaired_punch_contributes_nothing() {
    let d = parse_date("2024-05-16").unwrap();

    // a single open session counts zero until closed
    let open = punches(&["2024-05-16 09:00"]);
    assert_eq!(hours_for_day(&open, d), 0.0);

    // odd ledger: only the first pair counts
    let p = punches(&["2024-05-16 09:00", "2024-05-16 12:00", "2024-05-16 13:00"]);
    assert_eq!(hours_for_day(&p, d), 3.0);
}

#[test]
fn test_pairing_uses_chronological_order_not_insertion_order() {
    // out-of-order arrival: the accountant sorts before pairing
    let p = punches(&["2024-05-16 12:00", "2024-05-16 09:00"]);
    let d = parse_date("2024-05-16").unwrap();

    assert_eq!(hours_for_day(&p, d), 3.0);
}

#[test]
fn test_session_clipped_to_day_boundaries() {
    // session spans midnight: each day gets its own share
    let p = punches(&["2024-05-16 22:00", "2024-05-17 02:00"]);
    let d1 = parse_date("2024-05-16").unwrap();
    let d2 = parse_date("2024-05-17").unwrap();

    assert_eq!(hours_for_day(&p, d1), 2.0);
    assert_eq!(hours_for_day(&p, d2), 2.0);
}

#[test]
fn test_pair_outside_range_contributes_nothing() {
    let p = punches(&["2024-05-10 09:00", "2024-05-10 17:00"]);
    let d = parse_date("2024-05-16").unwrap();

    assert_eq!(hours_for_day(&p, d), 0.0);
}
