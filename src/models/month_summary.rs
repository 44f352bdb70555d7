use super::month::Month;

/// Derived figures for one month, recomputed on demand — nothing in here is
/// ever persisted.
#[derive(Debug, Clone, Copy)]
pub struct MonthSummary {
    pub month: Month,
    pub workdays: usize,
    pub scheduled_hours: f64,
    pub month_hours: f64,
    pub today_hours: f64,
}
