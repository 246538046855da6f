//! Database models

mod counters;

pub use counters::UserCountersModel;
