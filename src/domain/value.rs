use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Webchinese account id (`Uid`).
///
/// Invariant: non-empty after trimming.
pub struct Uid(String);

impl Uid {
    /// Query field name used by Webchinese (`Uid`).
    pub const FIELD: &'static str = "Uid";

    /// Create a validated [`Uid`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated account id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Webchinese interface key (`Key`).
///
/// Invariant: non-empty after trimming.
pub struct ApiKey(String);

impl ApiKey {
    /// Query field name used by Webchinese (`Key`).
    pub const FIELD: &'static str = "Key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS message text (`smsText`).
///
/// The value is preserved verbatim, including whitespace. No emptiness check
/// is applied on this side of the wire; Webchinese rejects empty content with
/// its own code (`-42`, see [`KnownProviderCode::MessageTextEmpty`]).
pub struct MessageText(String);

impl MessageText {
    /// Query field name used by Webchinese (`smsText`).
    pub const FIELD: &'static str = "smsText";

    /// Wrap message text as provided.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the message text as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated phone number as sent to Webchinese (`smsMob`).
///
/// Invariant: non-empty after trimming. This type does not normalize; if you
/// want E.164 normalization, parse into [`PhoneNumber`] and convert it into
/// [`RawPhoneNumber`].
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    /// Query field name used by Webchinese (`smsMob`).
    pub const FIELD: &'static str = "smsMob";

    /// Create a validated (non-empty) raw phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to Webchinese.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    /// Convert an already-parsed phone number to a normalized raw value (E.164).
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Query field name used by Webchinese (`smsMob`).
    pub const FIELD: &'static str = "smsMob";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Character set selecting the Webchinese API subdomain.
///
/// The API is served from a charset-qualified subdomain
/// (`utf8.api.smschinese.cn` or `gbk.api.smschinese.cn`).
pub enum Charset {
    /// UTF-8 endpoint (`utf8` subdomain). The default.
    #[default]
    Utf8,
    /// GBK endpoint (`gbk` subdomain).
    Gbk,
}

impl Charset {
    /// Configuration key conventionally used for this option (`charset`).
    pub const FIELD: &'static str = "charset";

    /// Resolve a charset from a configuration value.
    ///
    /// Only the exact strings `"utf8"` and `"gbk"` are recognized; anything
    /// else silently falls back to [`Charset::Utf8`].
    pub fn from_config_value(value: &str) -> Self {
        match value {
            "utf8" => Self::Utf8,
            "gbk" => Self::Gbk,
            _ => Self::Utf8,
        }
    }

    /// The API subdomain label for this charset.
    pub fn subdomain(self) -> &'static str {
        match self {
            Self::Utf8 => "utf8",
            Self::Gbk => "gbk",
        }
    }
}

/// Message used for negative provider codes absent from the documented table.
const UNKNOWN_ERROR_MESSAGE: &str = "未知错误";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Webchinese provider code.
///
/// The provider answers a send request with a bare integer body: negative
/// values are rejection codes, non-negative values mean the request was
/// accepted. This value is preserved as-is even when the code is unknown to
/// this crate.
pub struct ProviderCode(i64);

impl ProviderCode {
    /// Construct a provider code from its integer representation.
    pub fn new(code: i64) -> Self {
        Self(code)
    }

    /// Get the integer code as returned by Webchinese.
    pub fn as_i64(self) -> i64 {
        self.0
    }

    /// Map this code to a known rejection variant, if one exists.
    pub fn known(self) -> Option<KnownProviderCode> {
        KnownProviderCode::from_code(self.0)
    }

    /// The provider-documented message for this code, or the generic
    /// unknown-error message when the code is not in the documented table.
    pub fn message(self) -> &'static str {
        self.known()
            .map(KnownProviderCode::message)
            .unwrap_or(UNKNOWN_ERROR_MESSAGE)
    }

    /// Returns `true` if this code represents a credential/account problem.
    pub fn is_auth_error(self) -> bool {
        matches!(
            self.known(),
            Some(kind) if kind.is_auth_error()
        )
    }
}

impl std::fmt::Display for ProviderCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known Webchinese rejection codes.
///
/// Unknown codes are preserved as [`ProviderCode`] and return `None` from
/// [`KnownProviderCode::from_code`].
pub enum KnownProviderCode {
    /// `-1`: the account does not exist.
    AccountNotFound,
    /// `-2`: the interface key is incorrect.
    KeyIncorrect,
    /// `-21`: the MD5-signed interface key is incorrect.
    Md5KeyIncorrect,
    /// `-3`: the account has insufficient message credits.
    InsufficientCredits,
    /// `-11`: the account is disabled.
    AccountDisabled,
    /// `-14`: the message content contains disallowed characters.
    ForbiddenContent,
    /// `-4`: the phone number format is invalid.
    PhoneNumberMalformed,
    /// `-41`: the phone number is empty.
    PhoneNumberEmpty,
    /// `-42`: the message content is empty.
    MessageTextEmpty,
    /// `-51`: the signature format is invalid.
    SignatureMalformed,
    /// `-6`: the caller's IP address is restricted.
    IpRestricted,
}

impl KnownProviderCode {
    /// Convert a raw Webchinese integer code into a known variant.
    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            -1 => Self::AccountNotFound,
            -2 => Self::KeyIncorrect,
            -21 => Self::Md5KeyIncorrect,
            -3 => Self::InsufficientCredits,
            -11 => Self::AccountDisabled,
            -14 => Self::ForbiddenContent,
            -4 => Self::PhoneNumberMalformed,
            -41 => Self::PhoneNumberEmpty,
            -42 => Self::MessageTextEmpty,
            -51 => Self::SignatureMalformed,
            -6 => Self::IpRestricted,
            _ => return None,
        })
    }

    /// The integer code for this variant.
    pub fn code(self) -> i64 {
        match self {
            Self::AccountNotFound => -1,
            Self::KeyIncorrect => -2,
            Self::Md5KeyIncorrect => -21,
            Self::InsufficientCredits => -3,
            Self::AccountDisabled => -11,
            Self::ForbiddenContent => -14,
            Self::PhoneNumberMalformed => -4,
            Self::PhoneNumberEmpty => -41,
            Self::MessageTextEmpty => -42,
            Self::SignatureMalformed => -51,
            Self::IpRestricted => -6,
        }
    }

    /// The provider-documented message for this code.
    pub fn message(self) -> &'static str {
        match self {
            Self::AccountNotFound => "没有该用户账户",
            Self::KeyIncorrect => "接口密钥不正确",
            Self::Md5KeyIncorrect => "MD5接口密钥加密不正确",
            Self::InsufficientCredits => "短信数量不足",
            Self::AccountDisabled => "该用户被禁用",
            Self::ForbiddenContent => "短信内容出现非法字符",
            Self::PhoneNumberMalformed => "手机号格式不正确",
            Self::PhoneNumberEmpty => "手机号码为空",
            Self::MessageTextEmpty => "短信内容为空",
            Self::SignatureMalformed => "短信签名格式不正确",
            Self::IpRestricted => "IP限制",
        }
    }

    /// Whether this code indicates invalid/disabled credentials.
    pub fn is_auth_error(self) -> bool {
        matches!(
            self,
            Self::AccountNotFound | Self::KeyIncorrect | Self::Md5KeyIncorrect | Self::AccountDisabled
        )
    }
}
