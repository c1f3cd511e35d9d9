mod fanout_service;
mod tracing_fanout_service;

pub use fanout_service::*;
pub use tracing_fanout_service::*;
