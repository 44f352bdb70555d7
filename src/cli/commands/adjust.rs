use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::adjust::AdjustLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::month::Month;
use crate::ui::messages::{info, success};
use crate::utils::time::{format_hours, parse_date_time};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Adjust {
        month,
        hours,
        until,
        reset,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        //
        // Reset mode: clear the current adjustment
        //
        if *reset {
            if AdjustLogic::reset(&mut pool, cfg)? {
                success("Month adjustment cleared.");
            } else {
                info("No month adjustment was set.");
            }
            return Ok(());
        }

        //
        // Set mode: --hours and --until are both required
        //
        let (h, until_str) = match (hours, until) {
            (Some(h), Some(u)) => (*h, u),
            _ => {
                return Err(AppError::Config(
                    "adjust requires both --hours and --until (or --reset)".to_string(),
                ));
            }
        };

        let m = match month {
            Some(s) => Month::parse(s).ok_or_else(|| AppError::InvalidMonth(s.to_string()))?,
            None => Month::current(),
        };

        let cutoff =
            parse_date_time(until_str).ok_or_else(|| AppError::InvalidTime(until_str.clone()))?;
        let now = chrono::Local::now().naive_local();

        let adj = AdjustLogic::apply(&mut pool, cfg, m, h, cutoff, now)?;

        success(format!(
            "Adjustment set for {}: {} hours up to {}.",
            adj.month,
            format_hours(adj.hours),
            cutoff.format("%Y-%m-%d %H:%M")
        ));
    }

    Ok(())
}
