//! Typed Rust client for the Webchinese (smschinese.cn) SMS HTTP API.
//!
//! The design is a small layered adapter: a domain layer of strong types, a
//! transport layer for the provider's URL and numeric-body wire format, and a
//! client layer orchestrating the single `send` operation.
//!
//! Webchinese answers a send request with a bare integer body: negative
//! values are rejection codes with documented meanings, anything else is the
//! success payload and is passed through unchanged.
//!
//! ```rust,no_run
//! use smschinese::{Credentials, MessageText, RawPhoneNumber, SendSms, SmsChineseClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smschinese::SmsChineseError> {
//!     let client = SmsChineseClient::new(Credentials::new("uid", "key")?);
//!     let phone = RawPhoneNumber::new("+8613800000000")?;
//!     let text = MessageText::new("hello");
//!     let response = client.send_sms(SendSms::new(phone, text)).await?;
//!     println!("sent: {:?}", response.sent_count());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Credentials, SmsChineseClient, SmsChineseClientBuilder, SmsChineseError};
pub use domain::{
    ApiKey, Charset, KnownProviderCode, MessageText, PhoneNumber, ProviderCode, RawPhoneNumber,
    SendSms, SendSmsResponse, Uid, ValidationError,
};
