#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TicketError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    #[error("invariant violation: {0}")]
    InvariantViolation(&'static str),

    #[error("illegal transition: {0}")]
    IllegalTransition(&'static str),
}
