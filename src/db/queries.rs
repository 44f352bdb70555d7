//! Load and save the three state containers. Loading drops malformed rows
//! individually (bad dates, non-positive timestamps, NaN hours) instead of
//! aborting the whole load; saving rewrites the affected table inside a
//! transaction after each accepted mutation.

use crate::core::calculator::calendar::OverrideMap;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::adjustment::MonthAdjustment;
use crate::models::month::Month;
use crate::models::punch::Punch;
use crate::utils::date::parse_date;
use chrono::{TimeZone, Utc};
use rusqlite::{OptionalExtension, params};

/// Punch ledger, most-recent-first (insertion order = id order).
pub fn load_punches(pool: &mut DbPool) -> AppResult<Vec<Punch>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT ts FROM punches ORDER BY id DESC")?;

    let rows = stmt.query_map([], |row| row.get::<_, i64>(0))?;

    let mut out = Vec::new();
    for r in rows {
        let ts = r?;
        // non-positive or out-of-range timestamps are dropped individually
        if ts > 0 && Utc.timestamp_millis_opt(ts).single().is_some() {
            out.push(Punch::new(ts));
        }
    }
    Ok(out)
}

/// Append one accepted punch. Insertion order is preserved by the id.
pub fn insert_punch(pool: &mut DbPool, punch: Punch) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO punches (ts) VALUES (?1)",
        params![punch.ts_millis],
    )?;
    Ok(())
}

/// Rewrite the whole ledger (used after a bulk removal).
pub fn save_punches(pool: &mut DbPool, ledger: &[Punch]) -> AppResult<()> {
    let tx = pool.conn.transaction()?;
    tx.execute("DELETE FROM punches", [])?;
    {
        let mut stmt = tx.prepare("INSERT INTO punches (ts) VALUES (?1)")?;
        // ledger is most-recent-first; insert oldest-first so ids keep
        // matching the arrival order
        for p in ledger.iter().rev() {
            stmt.execute(params![p.ts_millis])?;
        }
    }
    tx.commit()?;
    Ok(())
}

pub fn load_overrides(pool: &mut DbPool) -> AppResult<OverrideMap> {
    let mut stmt = pool.conn.prepare("SELECT date, workday FROM overrides")?;

    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;

    let mut out = OverrideMap::new();
    for r in rows {
        let (date_str, workday) = r?;
        // unparseable dates are dropped, never fatal
        if let Some(date) = parse_date(&date_str) {
            out.insert(date, workday != 0);
        }
    }
    Ok(out)
}

pub fn save_overrides(pool: &mut DbPool, overrides: &OverrideMap) -> AppResult<()> {
    let tx = pool.conn.transaction()?;
    tx.execute("DELETE FROM overrides", [])?;
    {
        let mut stmt = tx.prepare("INSERT INTO overrides (date, workday) VALUES (?1, ?2)")?;
        for (date, workday) in overrides {
            stmt.execute(params![
                date.format("%Y-%m-%d").to_string(),
                if *workday { 1 } else { 0 }
            ])?;
        }
    }
    tx.commit()?;
    Ok(())
}

/// The single adjustment row, if present and well-formed. A partial or
/// corrupt record (bad month, NaN hours, non-positive cutoff) is treated
/// as absent.
pub fn load_adjustment(pool: &mut DbPool) -> AppResult<Option<MonthAdjustment>> {
    let row = pool
        .conn
        .query_row(
            "SELECT month, hours, cutoff FROM adjustment WHERE id = 1",
            [],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, f64>(1)?,
                    row.get::<_, i64>(2)?,
                ))
            },
        )
        .optional()?;

    Ok(row.and_then(|(month_str, hours, cutoff)| {
        if hours.is_nan() || cutoff <= 0 {
            return None;
        }
        let month = Month::parse(&month_str)?;
        Some(MonthAdjustment::new(month, hours, cutoff))
    }))
}

/// Replace (or clear, with `None`) the single adjustment row.
pub fn save_adjustment(pool: &mut DbPool, adj: Option<&MonthAdjustment>) -> AppResult<()> {
    let tx = pool.conn.transaction()?;
    tx.execute("DELETE FROM adjustment", [])?;
    if let Some(a) = adj {
        tx.execute(
            "INSERT INTO adjustment (id, month, hours, cutoff) VALUES (1, ?1, ?2, ?3)",
            params![a.month.to_string(), a.hours, a.cutoff_millis],
        )?;
    }
    tx.commit()?;
    Ok(())
}
