//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{
    ApiKey, Charset, ProviderCode, SendSms, SendSmsResponse, Uid, ValidationError,
};
use crate::transport::{SendSmsOutcome, decode_send_sms_response, encode_send_sms_url};

const API_HOST: &str = "api.smschinese.cn";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

trait HttpTransport: Send + Sync {
    fn get<'a>(
        &'a self,
        url: &'a str,
    ) -> BoxFuture<'a, Result<String, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
    ) -> BoxFuture<'a, Result<String, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.get(url).send().await?.error_for_status()?;
            let body = response.text().await?;
            Ok(body)
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Webchinese account credentials: account id (`Uid`) plus interface key (`Key`).
pub struct Credentials {
    uid: Uid,
    key: ApiKey,
}

impl Credentials {
    /// Create validated credentials; both parts must be non-empty after trimming.
    pub fn new(uid: impl Into<String>, key: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            uid: Uid::new(uid)?,
            key: ApiKey::new(key)?,
        })
    }

    /// The account id.
    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    /// The interface key.
    pub fn key(&self) -> &ApiKey {
        &self.key
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsChineseClient`].
///
/// Exactly one of success payload or classified error is produced per send:
/// transport-level failures keep their source chain, provider rejections keep
/// the provider code and its documented message.
pub enum SmsChineseError {
    /// The request could not be completed (DNS, TLS, timeouts, non-2xx HTTP
    /// statuses). The provider gave no verdict.
    #[error("连接短信发送服务器出错。")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Webchinese rejected the request with a negative code.
    #[error("{message} (code {code})")]
    Provider {
        code: ProviderCode,
        message: &'static str,
    },

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl SmsChineseError {
    /// HTTP-style status classification: 500 for transport failures, 400 for
    /// everything the provider or the domain layer rejected.
    pub fn status(&self) -> u16 {
        match self {
            Self::Transport(_) => 500,
            Self::Provider { .. } | Self::Validation(_) => 400,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`SmsChineseClient`].
///
/// Use this when you need the GBK endpoint or want to customize the endpoint,
/// timeout, or user-agent.
pub struct SmsChineseClientBuilder {
    credentials: Credentials,
    charset: Charset,
    endpoint: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl SmsChineseClientBuilder {
    /// Create a builder with the UTF-8 endpoint and no timeout/user-agent override.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            charset: Charset::default(),
            endpoint: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Select the charset-qualified API subdomain.
    pub fn charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    /// Override the endpoint base URL entirely (the charset subdomain is not
    /// applied to an overridden endpoint).
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build an [`SmsChineseClient`].
    pub fn build(self) -> Result<SmsChineseClient, SmsChineseError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SmsChineseError::Transport(Box::new(err)))?;

        Ok(SmsChineseClient {
            credentials: self.credentials,
            endpoint: self
                .endpoint
                .unwrap_or_else(|| default_endpoint(self.charset)),
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Webchinese (smschinese.cn) client.
///
/// This type builds the charset-qualified send URL, performs the GET, and
/// classifies the numeric response body. By default it talks to
/// `http://utf8.api.smschinese.cn/`.
pub struct SmsChineseClient {
    credentials: Credentials,
    endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl SmsChineseClient {
    /// Create a client using the default UTF-8 endpoint.
    ///
    /// For more customization, use [`SmsChineseClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: default_endpoint(Charset::default()),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials) -> SmsChineseClientBuilder {
        SmsChineseClientBuilder::new(credentials)
    }

    /// Send an SMS message through Webchinese.
    ///
    /// Performs exactly one GET per call. Note that the provider's endpoint is
    /// not idempotent: repeated calls send duplicate messages.
    ///
    /// Errors:
    /// - [`SmsChineseError::Transport`] when no usable response was obtained,
    /// - [`SmsChineseError::Provider`] when Webchinese answered with a
    ///   negative code.
    pub async fn send_sms(&self, request: SendSms) -> Result<SendSmsResponse, SmsChineseError> {
        let url = encode_send_sms_url(
            &self.endpoint,
            self.credentials.uid(),
            self.credentials.key(),
            &request,
        );

        let body = self
            .http
            .get(&url)
            .await
            .map_err(SmsChineseError::Transport)?;

        match decode_send_sms_response(&body) {
            SendSmsOutcome::Rejected(code) => Err(SmsChineseError::Provider {
                code,
                message: code.message(),
            }),
            SendSmsOutcome::Accepted(response) => Ok(response),
        }
    }
}

fn default_endpoint(charset: Charset) -> String {
    format!("http://{}.{API_HOST}/", charset.subdomain())
}
