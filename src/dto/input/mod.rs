mod cancel_ticket;
mod check_access;
mod confirm_tickets;
mod generate_tickets;
mod validate_ticket;

pub use cancel_ticket::*;
pub use check_access::*;
pub use confirm_tickets::*;
pub use generate_tickets::*;
pub use validate_ticket::*;
