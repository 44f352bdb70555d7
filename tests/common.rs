#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pcl() -> Command {
    cargo_bin_cmd!("punchclock")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_punchclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the schema for a test DB (no config file is written)
pub fn init_test_db(db_path: &str) {
    pcl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Record a punch at an explicit local time ("YYYY-MM-DD HH:MM[:SS]")
pub fn punch_at(db_path: &str, at: &str) {
    pcl()
        .args(["--db", db_path, "--test", "punch", "--at", at])
        .assert()
        .success();
}

/// Epoch milliseconds for a local wall-clock time "YYYY-MM-DD HH:MM[:SS]"
pub fn ts(s: &str) -> i64 {
    let dt = punchclock::utils::time::parse_date_time(s).expect("valid datetime literal");
    punchclock::utils::time::local_millis(dt)
}
