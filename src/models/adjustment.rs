use super::month::Month;

/// Manual correction for one month: worked hours up to `cutoff_millis` are
/// fixed at `hours`; hours after the cutoff are computed from punches and
/// added on top. Only one adjustment exists at a time, globally — setting a
/// new one replaces any prior one, even for a different month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthAdjustment {
    pub month: Month,       // ⇔ adjustment.month (TEXT "YYYY-MM")
    pub hours: f64,         // ⇔ adjustment.hours (REAL, finite)
    pub cutoff_millis: i64, // ⇔ adjustment.cutoff (INTEGER, > 0)
}

impl MonthAdjustment {
    pub fn new(month: Month, hours: f64, cutoff_millis: i64) -> Self {
        Self {
            month,
            hours,
            cutoff_millis,
        }
    }
}
