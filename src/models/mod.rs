pub mod adjustment;
pub mod month;
pub mod month_summary;
pub mod punch;
pub mod punch_kind;
