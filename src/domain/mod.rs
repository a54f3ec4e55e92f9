//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::SendSms;
pub use response::SendSmsResponse;
pub use validation::ValidationError;
pub use value::{
    ApiKey, Charset, KnownProviderCode, MessageText, PhoneNumber, ProviderCode, RawPhoneNumber,
    Uid,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uid_rejects_empty() {
        assert!(matches!(
            Uid::new("   "),
            Err(ValidationError::Empty { field: Uid::FIELD })
        ));
    }

    #[test]
    fn api_key_rejects_empty() {
        assert!(matches!(
            ApiKey::new(""),
            Err(ValidationError::Empty {
                field: ApiKey::FIELD
            })
        ));
    }

    #[test]
    fn phone_number_parses_with_region_and_trims() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::CN), " 13800000000 ").unwrap();
        assert_eq!(pn.raw(), "13800000000");
    }

    #[test]
    fn raw_phone_number_from_phone_number_uses_e164() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::CN), "13800000000").unwrap();
        let raw: RawPhoneNumber = pn.into();
        assert_eq!(raw.raw(), "+8613800000000");
    }

    #[test]
    fn send_sms_exposes_its_parts() {
        let to = RawPhoneNumber::new("+8613800000000").unwrap();
        let text = MessageText::new("hello");
        let request = SendSms::new(to.clone(), text.clone());
        assert_eq!(request.to(), &to);
        assert_eq!(request.text(), &text);
    }

    #[test]
    fn provider_code_known_mapping() {
        let code = ProviderCode::new(-1);
        assert_eq!(code.known(), Some(KnownProviderCode::AccountNotFound));

        let unknown = ProviderCode::new(-999_999);
        assert_eq!(unknown.known(), None);
    }
}
