//! Transport layer: URL construction and wire-format details.

mod send_sms;

pub use send_sms::{SendSmsOutcome, decode_send_sms_response, encode_send_sms_url};
