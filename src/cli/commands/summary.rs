use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::month::Month;
use crate::utils::date;
use crate::utils::time::format_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { month } = cmd {
        let m = match month {
            Some(s) => Month::parse(s).ok_or_else(|| AppError::InvalidMonth(s.to_string()))?,
            None => Month::current(),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let engine = Core::load_engine(&mut pool, cfg)?;
        let summary = Core::build_month_summary(&engine, m, date::today());

        println!("📅 Summary for {}", summary.month);
        println!(
            "   Workdays        : {} ({} scheduled hours)",
            summary.workdays,
            format_hours(summary.scheduled_hours)
        );
        println!(
            "   Month worked    : {} hours",
            format_hours(summary.month_hours)
        );
        println!(
            "   Today worked    : {} hours",
            format_hours(summary.today_hours)
        );
    }

    Ok(())
}
