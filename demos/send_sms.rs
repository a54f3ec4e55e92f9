use std::io;

use smschinese::{Charset, Credentials, MessageText, RawPhoneNumber, SendSms, SmsChineseClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let uid = std::env::var("SMSCHINESE_UID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSCHINESE_UID environment variable is required",
        )
    })?;
    let key = std::env::var("SMSCHINESE_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSCHINESE_KEY environment variable is required",
        )
    })?;
    let phone_raw = std::env::var("SMSCHINESE_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "SMSCHINESE_PHONE environment variable is required",
        )
    })?;
    let message = std::env::var("SMSCHINESE_MESSAGE")
        .unwrap_or_else(|_| "Hello from the smschinese demo.".to_owned());
    let charset = std::env::var("SMSCHINESE_CHARSET")
        .map(|value| Charset::from_config_value(&value))
        .unwrap_or_default();

    let client = SmsChineseClient::builder(Credentials::new(uid, key)?)
        .charset(charset)
        .build()?;
    let phone = RawPhoneNumber::new(phone_raw)?;
    let text = MessageText::new(message);

    let response = client.send_sms(SendSms::new(phone, text)).await?;
    println!(
        "payload: {:?}, sent_count: {:?}",
        response.as_str(),
        response.sent_count()
    );

    Ok(())
}
