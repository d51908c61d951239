pub mod day_events;
pub mod punch;
pub mod punch_kind;
pub mod shift;
