use crate::config::Config;
use crate::core::engine::PunchOutcome;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::insert_punch;
use crate::errors::AppResult;
use crate::models::punch::Punch;

pub struct PunchLogic;

impl PunchLogic {
    /// Submit a punch at `ts_millis`. A cooldown rejection is a quiet no-op
    /// (nothing is persisted); an accepted punch is appended to the ledger
    /// and saved.
    pub fn apply(pool: &mut DbPool, cfg: &Config, ts_millis: i64) -> AppResult<PunchOutcome> {
        let mut engine = Core::load_engine(pool, cfg)?;

        let outcome = engine.add_punch(ts_millis);
        if let PunchOutcome::Accepted(_) = outcome {
            insert_punch(pool, Punch::new(ts_millis))?;
        }

        Ok(outcome)
    }
}
