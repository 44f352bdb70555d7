use crate::models::month::Month;
use crate::utils::time::local_millis;
use chrono::{NaiveDate, NaiveTime};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn now_millis() -> i64 {
    chrono::Local::now().timestamp_millis()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// First instant of the date in the fixed local zone, as epoch milliseconds.
/// Total even when the day's midnight is DST-ambiguous or skipped.
pub fn day_start_millis(date: NaiveDate) -> i64 {
    local_millis(date.and_time(NaiveTime::MIN))
}

/// Half-open instant range `[start, end)` covering one local calendar day.
pub fn day_range_millis(date: NaiveDate) -> (i64, i64) {
    let start = day_start_millis(date);
    let end = day_start_millis(date.succ_opt().unwrap());
    (start, end)
}

/// Half-open instant range `[start, end)` covering one local calendar month.
pub fn month_range_millis(month: Month) -> (i64, i64) {
    let start = day_start_millis(month.first_day());
    let end = day_start_millis(month.next().first_day());
    (start, end)
}

pub fn all_days_of_month(month: Month) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = month.first_day();

    while month.contains(d) {
        out.push(d);
        d = d.succ_opt().unwrap();
    }

    out
}
