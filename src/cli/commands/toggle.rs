use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::toggle::ToggleLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Toggle { date: date_str } = cmd {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;

        let mut pool = DbPool::new(&cfg.database)?;
        let now_workday = ToggleLogic::apply(&mut pool, cfg, d)?;

        if now_workday {
            success(format!("{} is now a workday.", d));
        } else {
            success(format!("{} is now a rest day.", d));
        }
    }

    Ok(())
}
