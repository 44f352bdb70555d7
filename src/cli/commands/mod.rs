pub mod adjust;
pub mod clear;
pub mod config;
pub mod init;
pub mod list;
pub mod punch;
pub mod summary;
pub mod toggle;
