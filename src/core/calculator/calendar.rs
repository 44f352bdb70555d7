//! Workday policy: Monday–Friday by default, with per-date overrides.

use crate::models::month::Month;
use crate::utils::date::all_days_of_month;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Map of per-date exceptions to the default policy. Absent entry = default.
pub type OverrideMap = BTreeMap<NaiveDate, bool>;

pub fn is_default_workday(date: NaiveDate) -> bool {
    date.weekday().number_from_monday() <= 5
}

/// Resolved workday status after applying overrides.
pub fn effective_workday(date: NaiveDate, overrides: &OverrideMap) -> bool {
    overrides
        .get(&date)
        .copied()
        .unwrap_or_else(|| is_default_workday(date))
}

/// Record the desired status for a date, keeping the map normalized: an
/// override equal to the default policy is redundant and is removed instead.
/// Returns whether the map changed (decides whether a save is needed).
pub fn set_override(overrides: &mut OverrideMap, date: NaiveDate, desired: bool) -> bool {
    if desired == is_default_workday(date) {
        overrides.remove(&date).is_some()
    } else {
        overrides.insert(date, desired) != Some(desired)
    }
}

/// Number of effective workdays in the month.
pub fn count_workdays(month: Month, overrides: &OverrideMap) -> usize {
    all_days_of_month(month)
        .into_iter()
        .filter(|d| effective_workday(*d, overrides))
        .count()
}
