mod error;
mod events;
mod qr_code;
mod ticket;
mod ticket_status;
mod ticket_type;

pub use error::*;
pub use events::*;
pub use qr_code::*;
pub use ticket::*;
pub use ticket_status::*;
pub use ticket_type::*;
