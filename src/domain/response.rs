#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// The provider's success payload, preserved byte-for-byte.
///
/// On success Webchinese answers with a non-negative integer (the number of
/// messages sent). The raw body is kept untouched so callers can apply their
/// own interpretation; [`SendSmsResponse::sent_count`] covers the documented
/// numeric case.
pub struct SendSmsResponse {
    body: String,
}

impl SendSmsResponse {
    pub(crate) fn new(body: String) -> Self {
        Self { body }
    }

    /// The response body exactly as returned by the provider.
    pub fn as_str(&self) -> &str {
        &self.body
    }

    /// Consume the response and take the raw body.
    pub fn into_string(self) -> String {
        self.body
    }

    /// The number of messages sent, when the body is the documented
    /// non-negative integer. `None` for bodies that do not parse as one.
    pub fn sent_count(&self) -> Option<u64> {
        self.body.trim().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::SendSmsResponse;

    #[test]
    fn body_is_preserved_verbatim() {
        let resp = SendSmsResponse::new(" 1234567\n".to_owned());
        assert_eq!(resp.as_str(), " 1234567\n");
        assert_eq!(resp.sent_count(), Some(1234567));
        assert_eq!(resp.into_string(), " 1234567\n");
    }

    #[test]
    fn sent_count_is_none_for_non_numeric_bodies() {
        let resp = SendSmsResponse::new("msgid:abc123".to_owned());
        assert_eq!(resp.sent_count(), None);
    }
}
