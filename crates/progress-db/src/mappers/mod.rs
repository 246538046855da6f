//! Entity ↔ Model mappers

mod counters;

pub use counters::counters_from_model;
