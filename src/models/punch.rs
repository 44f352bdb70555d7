use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};

/// A single clock-in or clock-out event, stored as milliseconds since the
/// Unix epoch. Whether it is an "in" or an "out" is not stored: it follows
/// from the punch's position in chronological order (even = in, odd = out).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Punch {
    pub ts_millis: i64, // ⇔ punches.ts (INTEGER, > 0)
}

impl Punch {
    pub fn new(ts_millis: i64) -> Self {
        Self { ts_millis }
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        Utc.timestamp_millis_opt(self.ts_millis)
            .unwrap()
            .with_timezone(&Local)
    }

    /// Calendar date of the punch in the fixed local zone.
    pub fn local_date(&self) -> NaiveDate {
        self.timestamp().date_naive()
    }

    pub fn local_time(&self) -> NaiveTime {
        self.timestamp().time()
    }
}
