//! Interval accounting: pair punches chronologically and sum the time each
//! session spends inside a half-open instant range.

use crate::models::month::Month;
use crate::models::punch::Punch;
use crate::utils::date::{day_range_millis, month_range_millis};
use chrono::NaiveDate;

pub const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Total worked milliseconds within `[range_start, range_end)`.
///
/// Punches are sorted chronologically and paired consecutively: each pair is
/// one clock-in/clock-out session. A trailing unpaired punch is an open
/// session and contributes nothing until closed. Each session is clipped to
/// the range before summing.
pub fn worked_millis(punches: &[Punch], range_start: i64, range_end: i64) -> i64 {
    if punches.is_empty() {
        return 0;
    }

    let mut sorted: Vec<i64> = punches.iter().map(|p| p.ts_millis).collect();
    sorted.sort_unstable();

    let mut total = 0;
    for pair in sorted.chunks_exact(2) {
        let start = pair[0].max(range_start);
        let end = pair[1].min(range_end);
        if end > start {
            total += end - start;
        }
    }

    total
}

pub fn millis_to_hours(millis: i64) -> f64 {
    millis as f64 / MILLIS_PER_HOUR
}

/// Worked hours on one local calendar day.
pub fn hours_for_day(punches: &[Punch], date: NaiveDate) -> f64 {
    let (start, end) = day_range_millis(date);
    millis_to_hours(worked_millis(punches, start, end))
}

/// Worked hours over one month, from punches alone (no adjustment applied).
pub fn hours_for_month_raw(punches: &[Punch], month: Month) -> f64 {
    let (start, end) = month_range_millis(month);
    millis_to_hours(worked_millis(punches, start, end))
}
