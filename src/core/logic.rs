use crate::config::Config;
use crate::core::engine::Engine;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::month::Month;
use crate::models::month_summary::MonthSummary;
use chrono::NaiveDate;

pub struct Core;

impl Core {
    /// Load the three state containers and assemble the engine.
    pub fn load_engine(pool: &mut DbPool, cfg: &Config) -> AppResult<Engine> {
        let ledger = queries::load_punches(pool)?;
        let overrides = queries::load_overrides(pool)?;
        let adjustment = queries::load_adjustment(pool)?;
        Ok(Engine::new(ledger, overrides, adjustment, cfg))
    }

    pub fn build_month_summary(engine: &Engine, month: Month, today: NaiveDate) -> MonthSummary {
        MonthSummary {
            month,
            workdays: engine.scheduled_workdays(month),
            scheduled_hours: engine.scheduled_hours(month),
            month_hours: engine.month_hours(month),
            today_hours: engine.day_hours(today),
        }
    }
}
