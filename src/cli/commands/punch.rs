use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::PunchOutcome;
use crate::core::punch::PunchLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::time::{format_timestamp, local_millis, parse_optional_date_time};

/// Record a punch: now by default, or at an explicit time with `--at`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch { at } = cmd {
        //
        // 1. Resolve the punch instant
        //
        let ts_millis = match parse_optional_date_time(at.as_ref())? {
            Some(dt) => local_millis(dt),
            None => crate::utils::date::now_millis(),
        };

        //
        // 2. Submit through the engine
        //
        let mut pool = DbPool::new(&cfg.database)?;

        match PunchLogic::apply(&mut pool, cfg, ts_millis)? {
            PunchOutcome::Accepted(kind) => {
                success(format!(
                    "Recorded {} at {}",
                    kind.label(),
                    format_timestamp(ts_millis, cfg.show_seconds)
                ));
            }
            PunchOutcome::Cooldown { remaining_secs } => {
                warning(format!(
                    "Punch ignored: last punch was under {}s ago (try again in {}s)",
                    cfg.cooldown_secs, remaining_secs
                ));
            }
        }
    }

    Ok(())
}
