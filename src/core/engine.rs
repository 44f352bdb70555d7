//! Attendance engine: owns the three state containers (punch ledger,
//! override map, month adjustment) and exposes every derived quantity and
//! mutation. All derived values are computed on demand; the caller persists
//! after each accepted mutation.

use crate::config::Config;
use crate::core::calculator::{adjustment, calendar, intervals};
use crate::core::calculator::calendar::OverrideMap;
use crate::models::adjustment::MonthAdjustment;
use crate::models::month::Month;
use crate::models::punch::Punch;
use crate::models::punch_kind::PunchKind;
use chrono::NaiveDate;

/// Result of submitting a new punch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunchOutcome {
    Accepted(PunchKind),
    /// Rejected: fewer than the cooldown interval elapsed since the last
    /// accepted punch (duplicate-tap guard).
    Cooldown { remaining_secs: i64 },
}

#[derive(Debug, Clone)]
pub struct Engine {
    /// Punch ledger, most-recent-first. Accounting re-sorts chronologically,
    /// so insertion order only matters for display.
    pub ledger: Vec<Punch>,
    pub overrides: OverrideMap,
    pub adjustment: Option<MonthAdjustment>,
    workday_hours: f64,
    cooldown_millis: i64,
}

impl Engine {
    pub fn new(
        ledger: Vec<Punch>,
        overrides: OverrideMap,
        adjustment: Option<MonthAdjustment>,
        cfg: &Config,
    ) -> Self {
        Self {
            ledger,
            overrides,
            adjustment,
            workday_hours: cfg.workday_hours,
            cooldown_millis: cfg.cooldown_secs * 1000,
        }
    }

    // ---------------------------
    // Punch ledger
    // ---------------------------

    /// Kind of the next punch, from the raw-count parity heuristic: the next
    /// punch opens a session iff the ledger holds an even number of punches.
    /// Display-only; the interval accountant never relies on it.
    pub fn next_punch_kind(&self) -> PunchKind {
        PunchKind::from_index(self.ledger.len())
    }

    /// Submit a punch at `ts_millis`. Rejected when less than the cooldown
    /// interval has elapsed since the most recently accepted punch;
    /// otherwise inserted at the head of the ledger.
    pub fn add_punch(&mut self, ts_millis: i64) -> PunchOutcome {
        if let Some(last) = self.ledger.first() {
            let elapsed = ts_millis - last.ts_millis;
            if elapsed >= 0 && elapsed < self.cooldown_millis {
                let remaining = self.cooldown_millis - elapsed;
                return PunchOutcome::Cooldown {
                    remaining_secs: (remaining as u64).div_ceil(1000) as i64,
                };
            }
        }

        let kind = self.next_punch_kind();
        self.ledger.insert(0, Punch::new(ts_millis));
        PunchOutcome::Accepted(kind)
    }

    /// Remove every punch whose local calendar date equals `date`.
    /// Returns whether anything was removed.
    pub fn clear_punches_on_date(&mut self, date: NaiveDate) -> bool {
        let before = self.ledger.len();
        self.ledger.retain(|p| p.local_date() != date);
        self.ledger.len() != before
    }

    /// Punches for one date, in display order (most-recent-first).
    pub fn punches_on_date(&self, date: NaiveDate) -> Vec<Punch> {
        self.ledger
            .iter()
            .copied()
            .filter(|p| p.local_date() == date)
            .collect()
    }

    // ---------------------------
    // Calendar policy
    // ---------------------------

    pub fn effective_workday(&self, date: NaiveDate) -> bool {
        calendar::effective_workday(date, &self.overrides)
    }

    /// Flip the workday status of a date. Returns `(now_workday, changed)`;
    /// the map stays normalized (no entries equal to the default policy).
    pub fn toggle_override(&mut self, date: NaiveDate) -> (bool, bool) {
        let desired = !self.effective_workday(date);
        let changed = calendar::set_override(&mut self.overrides, date, desired);
        (desired, changed)
    }

    pub fn scheduled_workdays(&self, month: Month) -> usize {
        calendar::count_workdays(month, &self.overrides)
    }

    pub fn scheduled_hours(&self, month: Month) -> f64 {
        self.scheduled_workdays(month) as f64 * self.workday_hours
    }

    // ---------------------------
    // Month adjustment
    // ---------------------------

    /// Install a new adjustment, discarding any prior one (also for a
    /// different month). Validation happens at submission, not here.
    pub fn set_adjustment(&mut self, adj: MonthAdjustment) {
        self.adjustment = Some(adj);
    }

    /// Clear the adjustment. Returns whether one was present.
    pub fn clear_adjustment(&mut self) -> bool {
        self.adjustment.take().is_some()
    }

    // ---------------------------
    // Derived hours
    // ---------------------------

    pub fn day_hours(&self, date: NaiveDate) -> f64 {
        intervals::hours_for_day(&self.ledger, date)
    }

    /// Month hours with the adjustment applied (raw when none targets it).
    pub fn month_hours(&self, month: Month) -> f64 {
        adjustment::hours_for_month(&self.ledger, month, self.adjustment.as_ref())
    }
}
