//! Time utilities: parsing timestamps from the CLI, formatting hours and
//! punch times for display.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, LocalResult, NaiveDateTime, TimeDelta, TimeZone, Utc};

/// Parse a local date-time from the CLI: "YYYY-MM-DD HH:MM[:SS]", or a bare
/// "YYYY-MM-DD" which means midnight.
pub fn parse_date_time(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M") {
        return Some(dt);
    }
    crate::utils::date::parse_date(s).map(|d| d.and_time(chrono::NaiveTime::MIN))
}

pub fn parse_optional_date_time(input: Option<&String>) -> AppResult<Option<NaiveDateTime>> {
    if let Some(s) = input {
        let dt = parse_date_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(dt))
    } else {
        Ok(None)
    }
}

/// Resolve a wall-clock time in the fixed local zone. Total across DST
/// transitions: an ambiguous time resolves to its earliest occurrence, a
/// time inside a spring-forward gap slides to the first instant after it.
pub fn resolve_local(dt: NaiveDateTime) -> DateTime<Local> {
    match dt.and_local_timezone(Local) {
        LocalResult::Single(t) => t,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => {
            // DST gaps are at most a couple of hours, so stepping forward in
            // 30-minute increments finds a representable instant quickly
            let mut candidate = dt;
            loop {
                candidate += TimeDelta::minutes(30);
                match candidate.and_local_timezone(Local) {
                    LocalResult::Single(t) | LocalResult::Ambiguous(t, _) => break t,
                    LocalResult::None => {}
                }
            }
        }
    }
}

/// Local date-time → epoch milliseconds in the fixed local zone.
pub fn local_millis(dt: NaiveDateTime) -> i64 {
    resolve_local(dt).timestamp_millis()
}

/// One-decimal hour figure, the format used by every summary line.
pub fn format_hours(hours: f64) -> String {
    format!("{:.1}", hours)
}

pub fn format_timestamp(ts_millis: i64, show_seconds: bool) -> String {
    let dt = Utc
        .timestamp_millis_opt(ts_millis)
        .unwrap()
        .with_timezone(&Local);
    if show_seconds {
        dt.format("%H:%M:%S").to_string()
    } else {
        dt.format("%H:%M").to_string()
    }
}
