use url::form_urlencoded;

use crate::domain::{
    ApiKey, MessageText, ProviderCode, RawPhoneNumber, SendSms, SendSmsResponse, Uid,
};

/// Classification of a raw Webchinese response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendSmsOutcome {
    /// Non-negative (or non-integer) body: the provider accepted the request.
    Accepted(SendSmsResponse),
    /// Negative integer body: the provider rejected the request.
    Rejected(ProviderCode),
}

/// Build the fully-qualified send URL.
///
/// Query parameter order is fixed (`Uid`, `Key`, `smsMob`, `smsText`) and
/// every value is form-urlencoded, so arbitrary message text keeps the URL
/// well-formed. Pure function of its inputs; a malformed endpoint base simply
/// yields a malformed URL.
pub fn encode_send_sms_url(endpoint: &str, uid: &Uid, key: &ApiKey, request: &SendSms) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(Uid::FIELD, uid.as_str())
        .append_pair(ApiKey::FIELD, key.as_str())
        .append_pair(RawPhoneNumber::FIELD, request.to().raw())
        .append_pair(MessageText::FIELD, request.text().as_str())
        .finish();
    format!("{endpoint}?{query}")
}

/// Classify a response body.
///
/// The body trims and parses as an `i64` strictly below zero only for
/// provider rejections. Everything else, including bodies that are not
/// integers at all, passes through unchanged as the success payload.
pub fn decode_send_sms_response(body: &str) -> SendSmsOutcome {
    match body.trim().parse::<i64>() {
        Ok(code) if code < 0 => SendSmsOutcome::Rejected(ProviderCode::new(code)),
        _ => SendSmsOutcome::Accepted(SendSmsResponse::new(body.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{KnownProviderCode, MessageText, RawPhoneNumber};

    use super::*;

    fn request(to: &str, text: &str) -> SendSms {
        SendSms::new(RawPhoneNumber::new(to).unwrap(), MessageText::new(text))
    }

    fn encode(uid: &str, key: &str, to: &str, text: &str) -> String {
        encode_send_sms_url(
            "http://utf8.api.smschinese.cn/",
            &Uid::new(uid).unwrap(),
            &ApiKey::new(key).unwrap(),
            &request(to, text),
        )
    }

    #[test]
    fn encode_canonical_url() {
        let url = encode("U1", "K1", "+8613800000000", "hello");
        assert_eq!(
            url,
            "http://utf8.api.smschinese.cn/?Uid=U1&Key=K1&smsMob=%2B8613800000000&smsText=hello"
        );
    }

    #[test]
    fn encode_each_input_changes_only_its_own_parameter() {
        let base = encode("U1", "K1", "1", "t");

        let uid = encode("U2", "K1", "1", "t");
        assert_eq!(uid, base.replace("Uid=U1", "Uid=U2"));

        let key = encode("U1", "K2", "1", "t");
        assert_eq!(key, base.replace("Key=K1", "Key=K2"));

        let mob = encode("U1", "K1", "2", "t");
        assert_eq!(mob, base.replace("smsMob=1", "smsMob=2"));

        let text = encode("U1", "K1", "1", "u");
        assert_eq!(text, base.replace("smsText=t", "smsText=u"));
    }

    #[test]
    fn encode_escapes_arbitrary_message_text() {
        let url = encode("U1", "K1", "13800000000", "您好 world & more");
        assert_eq!(
            url,
            "http://utf8.api.smschinese.cn/?Uid=U1&Key=K1&smsMob=13800000000\
             &smsText=%E6%82%A8%E5%A5%BD+world+%26+more"
        );
    }

    #[test]
    fn decode_negative_body_is_rejected_with_its_code() {
        let outcome = decode_send_sms_response("-4");
        assert_eq!(outcome, SendSmsOutcome::Rejected(ProviderCode::new(-4)));
        match outcome {
            SendSmsOutcome::Rejected(code) => {
                assert_eq!(code.known(), Some(KnownProviderCode::PhoneNumberMalformed));
                assert_eq!(code.message(), "手机号格式不正确");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn decode_negative_body_tolerates_surrounding_whitespace() {
        let outcome = decode_send_sms_response(" -1\n");
        assert_eq!(outcome, SendSmsOutcome::Rejected(ProviderCode::new(-1)));
    }

    #[test]
    fn decode_unknown_negative_body_is_still_rejected() {
        match decode_send_sms_response("-999") {
            SendSmsOutcome::Rejected(code) => {
                assert_eq!(code.as_i64(), -999);
                assert_eq!(code.message(), "未知错误");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn decode_non_negative_bodies_pass_through_unchanged() {
        for body in ["0", "1", "1234567"] {
            match decode_send_sms_response(body) {
                SendSmsOutcome::Accepted(resp) => assert_eq!(resp.as_str(), body),
                other => panic!("unexpected outcome: {other:?}"),
            }
        }
    }

    #[test]
    fn decode_non_integer_body_is_treated_as_success_payload() {
        match decode_send_sms_response("msgid:abc123") {
            SendSmsOutcome::Accepted(resp) => {
                assert_eq!(resp.as_str(), "msgid:abc123");
                assert_eq!(resp.sent_count(), None);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
