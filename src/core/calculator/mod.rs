pub mod adjustment;
pub mod calendar;
pub mod intervals;
