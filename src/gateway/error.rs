use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("event {0} not exist")]
    EventNotExist(Uuid),

    #[error("events service request failed: {0}")]
    Request(#[from] reqwest::Error),
}
