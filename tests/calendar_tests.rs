use punchclock::core::calculator::calendar::{
    OverrideMap, count_workdays, effective_workday, is_default_workday, set_override,
};
use punchclock::models::month::Month;
use punchclock::utils::date::parse_date;

#[test]
fn test_default_policy_is_monday_to_friday() {
    assert!(is_default_workday(parse_date("2024-05-13").unwrap())); // Monday
    assert!(is_default_workday(parse_date("2024-05-17").unwrap())); // Friday
    assert!(!is_default_workday(parse_date("2024-05-18").unwrap())); // Saturday
    assert!(!is_default_workday(parse_date("2024-05-19").unwrap())); // Sunday
}

#[test]
fn test_saturday_override_scenario() {
    let saturday = parse_date("2024-05-18").unwrap();
    let mut overrides = OverrideMap::new();

    assert!(!effective_workday(saturday, &overrides));

    let changed = set_override(&mut overrides, saturday, true);
    assert!(changed);
    assert!(effective_workday(saturday, &overrides));
    assert_eq!(overrides.len(), 1);
}

#[test]
fn test_override_equal_to_default_is_removed() {
    let saturday = parse_date("2024-05-18").unwrap();
    let monday = parse_date("2024-05-13").unwrap();
    let mut overrides = OverrideMap::new();

    // round-trip: forcing a date back to its default empties the map
    set_override(&mut overrides, saturday, true);
    set_override(&mut overrides, saturday, false);
    assert!(overrides.is_empty());

    // writing the default value for an untouched date is a no-op
    let changed = set_override(&mut overrides, monday, true);
    assert!(!changed);
    assert!(overrides.is_empty());
}

#[test]
fn test_count_workdays_default_and_with_overrides() {
    let month = Month::parse("2024-05").unwrap();
    let mut overrides = OverrideMap::new();

    // May 2024 has 23 weekdays
    assert_eq!(count_workdays(month, &overrides), 23);

    // force a Saturday on, a Monday off
    set_override(&mut overrides, parse_date("2024-05-18").unwrap(), true);
    assert_eq!(count_workdays(month, &overrides), 24);

    set_override(&mut overrides, parse_date("2024-05-13").unwrap(), false);
    assert_eq!(count_workdays(month, &overrides), 23);
}

#[test]
fn test_overrides_outside_month_do_not_affect_count() {
    let month = Month::parse("2024-05").unwrap();
    let mut overrides = OverrideMap::new();

    set_override(&mut overrides, parse_date("2024-06-01").unwrap(), true);
    assert_eq!(count_workdays(month, &overrides), 23);
}
