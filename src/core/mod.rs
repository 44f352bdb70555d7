pub mod adjust;
pub mod calculator;
pub mod clear;
pub mod engine;
pub mod logic;
pub mod punch;
pub mod toggle;
