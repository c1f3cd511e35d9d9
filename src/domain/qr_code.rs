use super::TicketError;

///
/// QR code issued for a single ticket: the scanned string value
/// paired with the opaque rendered image payload.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QrCode {
    value: String,
    image: Vec<u8>,
}

impl QrCode {
    pub fn new(value: String, image: Vec<u8>) -> Result<Self, TicketError> {
        if value.trim().is_empty() {
            return Err(TicketError::InvalidInput("qr code value is required"));
        }
        if image.is_empty() {
            return Err(TicketError::InvalidInput("qr code image is required"));
        }

        Ok(Self { value, image })
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn image(&self) -> &[u8] {
        &self.image
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_valid() {
        let qr_code = QrCode::new("QR-1".to_string(), vec![1, 2, 3]).unwrap();

        assert_eq!(qr_code.value(), "QR-1");
        assert_eq!(qr_code.image(), [1, 2, 3]);
    }

    #[test]
    fn new_empty_value() {
        let result = QrCode::new("".to_string(), vec![1]);

        assert_eq!(result, Err(TicketError::InvalidInput("qr code value is required")));
    }

    #[test]
    fn new_blank_value() {
        let result = QrCode::new("   ".to_string(), vec![1]);

        assert_eq!(result, Err(TicketError::InvalidInput("qr code value is required")));
    }

    #[test]
    fn new_empty_image() {
        let result = QrCode::new("QR-1".to_string(), vec![]);

        assert_eq!(result, Err(TicketError::InvalidInput("qr code image is required")));
    }
}
