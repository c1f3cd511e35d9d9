///
/// Lifecycle states of a ticket.
///
/// Discriminant values are the persisted representation,
/// do not reorder.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::FromRepr)]
#[repr(i32)]
pub enum TicketStatus {
    Pending = 0,
    Confirmed = 1,
    Cancelled = 2,
    Used = 3,
}

impl TicketStatus {
    ///
    /// Active tickets count against event/section capacity.
    ///
    pub fn is_active(self) -> bool {
        matches!(self, TicketStatus::Pending | TicketStatus::Confirmed)
    }
}
