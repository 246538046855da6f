//! Inbound gateway events consumed by the progression engine

mod gateway_event;

pub use gateway_event::{GatewayEvent, MessageCreated, MessageInfo, MessageRef, ReactionAdded};
