use serde::Serialize;
use uuid::Uuid;

///
/// Field names are fixed by the public API contract.
///
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAccess {
    pub has_access: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_type: Option<String>,
    pub status: String,
}
