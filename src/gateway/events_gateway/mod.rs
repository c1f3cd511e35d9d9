mod dto;
mod events_gateway;
mod events_gateway_impl;

pub use dto::*;
pub use events_gateway::*;
pub use events_gateway_impl::*;
