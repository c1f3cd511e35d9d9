use serde::Deserialize;
use uuid::Uuid;

///
/// Query parameter names are fixed by the public API contract.
///
#[derive(Debug, Deserialize)]
pub struct CheckAccess {
    #[serde(rename = "eventId")]
    pub event_id: Uuid,
    #[serde(rename = "userId")]
    pub user_id: Uuid,
}
