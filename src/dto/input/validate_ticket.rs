use serde::Deserialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct ValidateTicket {
    pub qr_code: String,
    pub location: String,
    pub validator_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub validated_at: OffsetDateTime,
}
