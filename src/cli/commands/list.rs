use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::punch::Punch;
use crate::models::punch_kind::PunchKind;
use crate::ui::messages::warning;
use crate::utils::date;
use crate::utils::time::format_timestamp;
use chrono::NaiveDate;

/// List punches most-recent-first, labeled clock-in/clock-out by their
/// chronological position within each day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { date: date_str } = cmd {
        let filter = match date_str {
            Some(s) => {
                Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?)
            }
            None => None,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let engine = Core::load_engine(&mut pool, cfg)?;

        // Collect the dates to display, most recent first
        let mut dates: Vec<NaiveDate> = match filter {
            Some(d) => vec![d],
            None => {
                let mut ds: Vec<NaiveDate> = engine.ledger.iter().map(|p| p.local_date()).collect();
                ds.sort();
                ds.dedup();
                ds.reverse();
                ds
            }
        };

        if filter.is_none() && dates.is_empty() {
            warning("No punches recorded.");
            return Ok(());
        }

        for d in dates.drain(..) {
            let mut on_day: Vec<Punch> = engine.punches_on_date(d);
            if on_day.is_empty() {
                warning(format!("No punches for {}.", d));
                continue;
            }

            // chronological order decides the in/out label
            on_day.sort();

            println!("📅 {}", d);
            for (idx, p) in on_day.iter().enumerate().rev() {
                let kind = PunchKind::from_index(idx);
                println!(
                    "   {:<9}  {}",
                    kind.label(),
                    format_timestamp(p.ts_millis, cfg.show_seconds)
                );
            }
        }
    }

    Ok(())
}
