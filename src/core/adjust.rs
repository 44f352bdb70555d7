use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::save_adjustment;
use crate::errors::{AppError, AppResult};
use crate::models::adjustment::MonthAdjustment;
use crate::models::month::Month;
use crate::utils::time::local_millis;
use chrono::NaiveDateTime;

pub struct AdjustLogic;

impl AdjustLogic {
    /// Validate and install a month adjustment. Rules:
    ///   - hours must be a finite number
    ///   - the cutoff date must fall inside the targeted month
    ///   - the cutoff must not be in the future (corrections apply to the past)
    /// Any violation is rejected with no state change. An accepted
    /// adjustment replaces the previous one, whatever month it targeted.
    pub fn apply(
        pool: &mut DbPool,
        cfg: &Config,
        month: Month,
        hours: f64,
        cutoff: NaiveDateTime,
        now: NaiveDateTime,
    ) -> AppResult<MonthAdjustment> {
        if !hours.is_finite() {
            return Err(AppError::InvalidHours(hours.to_string()));
        }
        if !month.contains(cutoff.date()) {
            return Err(AppError::AdjustOutsideMonth(
                cutoff.date().to_string(),
                month.to_string(),
            ));
        }
        if cutoff > now {
            return Err(AppError::CutoffInFuture(
                cutoff.format("%Y-%m-%d %H:%M").to_string(),
            ));
        }

        let mut engine = Core::load_engine(pool, cfg)?;
        let adj = MonthAdjustment::new(month, hours, local_millis(cutoff));
        engine.set_adjustment(adj);
        save_adjustment(pool, engine.adjustment.as_ref())?;

        Ok(adj)
    }

    /// Clear the adjustment. Returns whether one was present.
    pub fn reset(pool: &mut DbPool, cfg: &Config) -> AppResult<bool> {
        let mut engine = Core::load_engine(pool, cfg)?;

        let was_present = engine.clear_adjustment();
        if was_present {
            save_adjustment(pool, None)?;
        }

        Ok(was_present)
    }
}
