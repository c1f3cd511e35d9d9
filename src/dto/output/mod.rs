mod check_access;
mod generated_tickets;

pub use check_access::*;
pub use generated_tickets::*;
