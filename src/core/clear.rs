use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::save_punches;
use crate::errors::AppResult;
use chrono::NaiveDate;

pub struct ClearLogic;

impl ClearLogic {
    /// Remove every punch on `date`. Returns whether anything was removed;
    /// the ledger is only rewritten when it was.
    pub fn apply(pool: &mut DbPool, cfg: &Config, date: NaiveDate) -> AppResult<bool> {
        let mut engine = Core::load_engine(pool, cfg)?;

        let removed = engine.clear_punches_on_date(date);
        if removed {
            save_punches(pool, &engine.ledger)?;
        }

        Ok(removed)
    }
}
