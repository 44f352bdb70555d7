use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the schema. Idempotent: safe to run on every `init`.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS punches (
             id INTEGER PRIMARY KEY AUTOINCREMENT,
             ts INTEGER NOT NULL
         );
         CREATE TABLE IF NOT EXISTS overrides (
             date    TEXT PRIMARY KEY,
             workday INTEGER NOT NULL
         );
         CREATE TABLE IF NOT EXISTS adjustment (
             id     INTEGER PRIMARY KEY CHECK (id = 1),
             month  TEXT NOT NULL,
             hours  REAL NOT NULL,
             cutoff INTEGER NOT NULL
         );",
    )?;
    Ok(())
}
