mod common;
use common::ts;

use punchclock::config::Config;
use punchclock::core::calculator::calendar::OverrideMap;
use punchclock::core::engine::{Engine, PunchOutcome};
use punchclock::models::punch::Punch;
use punchclock::models::punch_kind::PunchKind;
use punchclock::utils::date::parse_date;

fn test_config() -> Config {
    Config {
        database: String::new(),
        workday_hours: 7.5,
        cooldown_secs: 10,
        show_seconds: true,
    }
}

fn empty_engine() -> Engine {
    Engine::new(Vec::new(), OverrideMap::new(), None, &test_config())
}

#[test]
fn test_punch_alternates_in_out_by_count_parity() {
    let mut engine = empty_engine();

    assert!(engine.next_punch_kind().is_in());

    let first = engine.add_punch(ts("2024-05-16 09:00"));
    assert_eq!(first, PunchOutcome::Accepted(PunchKind::In));
    assert!(engine.next_punch_kind().is_out());

    let second = engine.add_punch(ts("2024-05-16 12:00"));
    assert_eq!(second, PunchOutcome::Accepted(PunchKind::Out));
    assert!(engine.next_punch_kind().is_in());
}

#[test]
fn test_punch_within_cooldown_is_rejected() {
    let mut engine = empty_engine();
    engine.add_punch(ts("2024-05-16 09:00:00"));

    // nine seconds later: still inside the 10s window
    let outcome = engine.add_punch(ts("2024-05-16 09:00:09"));
    assert_eq!(outcome, PunchOutcome::Cooldown { remaining_secs: 1 });
    assert_eq!(engine.ledger.len(), 1);

    // exactly ten seconds later: accepted
    let outcome = engine.add_punch(ts("2024-05-16 09:00:10"));
    assert_eq!(outcome, PunchOutcome::Accepted(PunchKind::Out));
    assert_eq!(engine.ledger.len(), 2);
}

#[test]
fn test_backfilled_older_punch_is_not_gated() {
    let mut engine = empty_engine();
    engine.add_punch(ts("2024-05-16 12:00"));

    // an earlier instant is a backfill, not a duplicate tap
    let outcome = engine.add_punch(ts("2024-05-16 09:00"));
    assert!(matches!(outcome, PunchOutcome::Accepted(_)));
    assert_eq!(engine.ledger.len(), 2);
}

#[test]
fn test_new_punch_sits_at_the_head() {
    let mut engine = empty_engine();
    engine.add_punch(ts("2024-05-16 09:00"));
    engine.add_punch(ts("2024-05-16 12:00"));

    assert_eq!(engine.ledger[0], Punch::new(ts("2024-05-16 12:00")));
}

#[test]
fn test_clear_punches_on_date() {
    let mut engine = empty_engine();
    engine.add_punch(ts("2024-05-16 09:00"));
    engine.add_punch(ts("2024-05-16 12:00"));
    engine.add_punch(ts("2024-05-17 09:00"));

    let d = parse_date("2024-05-16").unwrap();
    assert!(engine.clear_punches_on_date(d));
    assert_eq!(engine.ledger.len(), 1);
    assert_eq!(engine.ledger[0].local_date(), parse_date("2024-05-17").unwrap());

    // second clear finds nothing
    assert!(!engine.clear_punches_on_date(d));
}

#[test]
fn test_toggle_override_round_trip() {
    let mut engine = empty_engine();
    let saturday = parse_date("2024-05-18").unwrap();

    let (now_workday, changed) = engine.toggle_override(saturday);
    assert!(now_workday);
    assert!(changed);
    assert_eq!(engine.overrides.len(), 1);

    // toggling back restores the default and normalizes the map
    let (now_workday, changed) = engine.toggle_override(saturday);
    assert!(!now_workday);
    assert!(changed);
    assert!(engine.overrides.is_empty());
}

#[test]
fn test_scheduled_hours_uses_configured_workday_length() {
    let engine = empty_engine();
    let may = punchclock::models::month::Month::parse("2024-05").unwrap();

    assert_eq!(engine.scheduled_workdays(may), 23);
    assert_eq!(engine.scheduled_hours(may), 23.0 * 7.5);
}

#[test]
fn test_punches_on_date_keeps_display_order() {
    let mut engine = empty_engine();
    engine.add_punch(ts("2024-05-16 09:00"));
    engine.add_punch(ts("2024-05-16 12:00"));
    engine.add_punch(ts("2024-05-17 08:30"));

    let d = parse_date("2024-05-16").unwrap();
    let on_day = engine.punches_on_date(d);

    // most-recent-first, restricted to the requested date
    assert_eq!(on_day.len(), 2);
    assert_eq!(on_day[0], Punch::new(ts("2024-05-16 12:00")));
    assert_eq!(on_day[1], Punch::new(ts("2024-05-16 09:00")));
}
