mod entity;
mod in_memory_tickets_repository;
mod tickets_repository;
mod tickets_repository_impl;

pub use in_memory_tickets_repository::*;
pub use tickets_repository::*;
pub use tickets_repository_impl::*;
