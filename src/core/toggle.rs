use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::save_overrides;
use crate::errors::AppResult;
use chrono::NaiveDate;

pub struct ToggleLogic;

impl ToggleLogic {
    /// Flip the workday status of `date` and persist the normalized map.
    /// Returns the new effective status.
    pub fn apply(pool: &mut DbPool, cfg: &Config, date: NaiveDate) -> AppResult<bool> {
        let mut engine = Core::load_engine(pool, cfg)?;

        let (now_workday, changed) = engine.toggle_override(date);
        if changed {
            save_overrides(pool, &engine.overrides)?;
        }

        Ok(now_workday)
    }
}
