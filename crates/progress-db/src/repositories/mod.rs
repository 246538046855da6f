//! Repository implementations

mod counters;
mod error;

pub use counters::PgCounterRepository;
pub use error::map_db_error;
