//! Port traits - the interfaces external collaborators expose to the core

mod gateway;
mod repositories;

pub use gateway::{ChatGateway, GatewayResult};
pub use repositories::{CounterRepository, RepoResult};
