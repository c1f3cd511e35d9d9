use crate::domain::TicketType;
use serde::Deserialize;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct GenerateTickets {
    pub event_id: Uuid,
    pub reservation_id: Uuid,
    pub attendee_id: Uuid,
    ///
    /// Defaults to the current time when omitted
    ///
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub issued_at: Option<OffsetDateTime>,
    pub items: Vec<GenerateTicketItem>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateTicketItem {
    pub ticket_type: TicketType,
    pub price: f64,
    pub seat_id: Option<Uuid>,
    pub section_name: Option<String>,
    pub qr_code_value: String,
    #[serde(with = "de_base64")]
    pub qr_code_image: Vec<u8>,
}

mod de_base64 {
    //!
    //! Module allows to deserialize JSON base64 string directly
    //! to bytes, so it's not neccessary to do it in services
    //!

    use base64::{prelude::BASE64_STANDARD, Engine};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<u8>, D::Error> {
        let string = String::deserialize(d)?;
        let bytes = BASE64_STANDARD
            .decode(string)
            .map_err(serde::de::Error::custom)?;

        Ok(bytes)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use base64::{prelude::BASE64_STANDARD, Engine};

    #[test]
    fn generate_tickets_json_deserialize_ok() {
        let image = "MTIzNA==";
        let json = format!(
            r#"{{
                "event_id": "6b8f6c0e-0f3a-4e6e-9e7c-0a4f2cf2a111",
                "reservation_id": "5a7e5b0d-1e2b-4c5d-8f9a-1b3c5d7e9f00",
                "attendee_id": "0c1d2e3f-4a5b-6c7d-8e9f-0a1b2c3d4e5f",
                "items": [
                    {{
                        "ticket_type": "VIP",
                        "price": 250.0,
                        "seat_id": null,
                        "section_name": "VIP",
                        "qr_code_value": "QR-1",
                        "qr_code_image": "{image}"
                    }}
                ]
            }}"#
        );

        let request = serde_json::from_str::<GenerateTickets>(&json).unwrap();

        assert!(request.issued_at.is_none());
        assert_eq!(request.items.len(), 1);
        assert_eq!(request.items[0].ticket_type, TicketType::Vip);
        assert_eq!(
            request.items[0].qr_code_image,
            BASE64_STANDARD.decode(image).unwrap()
        );
    }

    #[test]
    fn generate_tickets_json_deserialize_base64_invalid() {
        let json = r#"{
            "event_id": "6b8f6c0e-0f3a-4e6e-9e7c-0a4f2cf2a111",
            "reservation_id": "5a7e5b0d-1e2b-4c5d-8f9a-1b3c5d7e9f00",
            "attendee_id": "0c1d2e3f-4a5b-6c7d-8e9f-0a1b2c3d4e5f",
            "items": [
                {
                    "ticket_type": "General",
                    "price": 100.0,
                    "seat_id": null,
                    "section_name": null,
                    "qr_code_value": "QR-1",
                    "qr_code_image": "¢≠³² not base64"
                }
            ]
        }"#;

        let request = serde_json::from_str::<GenerateTickets>(json);

        assert!(request.is_err());
    }
}
