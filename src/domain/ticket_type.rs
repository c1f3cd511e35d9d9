use serde::{Deserialize, Serialize};

///
/// Ticket types admitted by the domain.
///
/// Discriminant values are the persisted representation,
/// do not reorder.
///
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::FromRepr,
)]
#[repr(i32)]
pub enum TicketType {
    General = 0,
    #[serde(rename = "VIP")]
    #[strum(serialize = "VIP")]
    Vip = 1,
    FrontRow = 2,
    FullAccess = 3,
    Complimentary = 4,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ticket_type_json_names() {
        let vip = serde_json::from_str::<TicketType>("\"VIP\"").unwrap();
        let front_row = serde_json::from_str::<TicketType>("\"FrontRow\"").unwrap();

        assert_eq!(vip, TicketType::Vip);
        assert_eq!(front_row, TicketType::FrontRow);
    }

    #[test]
    fn ticket_type_from_persisted_repr() {
        assert_eq!(TicketType::from_repr(0), Some(TicketType::General));
        assert_eq!(TicketType::from_repr(4), Some(TicketType::Complimentary));
        assert_eq!(TicketType::from_repr(5), None);
    }
}
