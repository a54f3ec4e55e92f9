use crate::domain::value::{MessageText, RawPhoneNumber};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// A single-recipient send request.
///
/// Webchinese takes one destination number and one message body per call; all
/// input validation lives in the value-type constructors, so building a
/// request cannot fail.
pub struct SendSms {
    to: RawPhoneNumber,
    text: MessageText,
}

impl SendSms {
    /// Build a send request for one recipient.
    pub fn new(to: RawPhoneNumber, text: MessageText) -> Self {
        Self { to, text }
    }

    /// The destination number (`smsMob`).
    pub fn to(&self) -> &RawPhoneNumber {
        &self.to
    }

    /// The message body (`smsText`).
    pub fn text(&self) -> &MessageText {
        &self.text
    }
}
