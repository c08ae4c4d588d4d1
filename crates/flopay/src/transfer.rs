//! Mobile-money transfers: input mapping, reply decoding, and the per-call
//! request object tying the two together.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{ERR_EXCEEDED_DAILY_LIMIT, ERR_INVALID_CUSTOMER_NUM, TRANSFER_PATH};
use crate::error::{FlopayError, ProviderError};
use crate::request::{ApiRequest, Method};

/// Parameters of one transfer.
///
/// Every field carries its wire name explicitly; serializing this struct
/// yields the request body. Amounts go out as JSON numbers carrying every
/// digit of the `Decimal`. The camelCase aliases let callers load inputs
/// written against the provider's documented field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferInput {
    #[serde(
        rename = "sender_amount",
        alias = "senderAmount",
        with = "rust_decimal::serde::arbitrary_precision"
    )]
    pub sender_amount: Decimal,

    #[serde(rename = "sender_currency", alias = "senderCurrency")]
    pub sender_currency: String,

    #[serde(
        rename = "recipient_amount",
        alias = "recipientAmount",
        with = "rust_decimal::serde::arbitrary_precision"
    )]
    pub recipient_amount: Decimal,

    #[serde(rename = "recipient_currency", alias = "recipientCurrency")]
    pub recipient_currency: String,

    #[serde(rename = "recipient_no", alias = "recipientNo")]
    pub recipient_no: String,

    #[serde(rename = "country_code", alias = "countryCode")]
    pub country_code: String,

    #[serde(rename = "service_code", alias = "serviceCode")]
    pub service_code: String,

    #[serde(rename = "reference", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(
        rename = "callback_urls",
        alias = "callbackURLs",
        alias = "callbackUrls",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub callback_urls: Option<Vec<String>>,

    #[serde(
        rename = "recipient_name",
        alias = "recipientName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub recipient_name: Option<String>,

    #[serde(rename = "provider", default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    #[serde(rename = "live", default, skip_serializing_if = "Option::is_none")]
    pub live: Option<bool>,
}

impl TransferInput {
    /// Build an input from the required fields. Nothing is validated here;
    /// bad values are reported by the provider.
    pub fn new(
        sender_amount: Decimal,
        sender_currency: impl Into<String>,
        recipient_amount: Decimal,
        recipient_currency: impl Into<String>,
        recipient_no: impl Into<String>,
        country_code: impl Into<String>,
        service_code: impl Into<String>,
    ) -> Self {
        Self {
            sender_amount,
            sender_currency: sender_currency.into(),
            recipient_amount,
            recipient_currency: recipient_currency.into(),
            recipient_no: recipient_no.into(),
            country_code: country_code.into(),
            service_code: service_code.into(),
            reference: None,
            callback_urls: None,
            recipient_name: None,
            provider: None,
            live: None,
        }
    }

    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn callback_urls<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.callback_urls = Some(urls.into_iter().map(Into::into).collect());
        self
    }

    pub fn recipient_name(mut self, name: impl Into<String>) -> Self {
        self.recipient_name = Some(name.into());
        self
    }

    /// Route the transfer through a specific mobile-money operator.
    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn live(mut self, live: bool) -> Self {
        self.live = Some(live);
        self
    }
}

/// Details of an accepted transfer. The provider's fields are passed through
/// without validation: strings are kept, numbers are rendered as text, and
/// anything else (or a missing key) is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferReceipt {
    pub reference: Option<String>,
    pub provider: Option<String>,
    pub recipient: Option<String>,
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
    pub message: Option<String>,
}

impl TransferReceipt {
    fn from_reply(inner: &Value) -> Self {
        Self {
            reference: text_field(inner, "reference"),
            provider: text_field(inner, "provider"),
            recipient: text_field(inner, "recipient"),
            amount: amount_field(inner, "amount"),
            currency: text_field(inner, "currency"),
            message: text_field(inner, "message"),
        }
    }
}

/// Decoded result of a successful transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferOutput {
    pub success: bool,
    pub response: TransferReceipt,
}

/// Read `key` from a reply object as text. Non-objects, missing keys, and
/// values that are neither strings nor numbers give `None`.
fn text_field(inner: &Value, key: &str) -> Option<String> {
    match inner.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Read `key` as an exact decimal, from either a JSON number or a numeric
/// string.
fn amount_field(inner: &Value, key: &str) -> Option<Decimal> {
    let text = match inner.get(key)? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    text.parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_scientific(&text).ok())
}

/// First non-empty value of `keys`, read as text.
fn first_text(inner: &Value, keys: &[&str]) -> String {
    keys.iter()
        .filter_map(|key| text_field(inner, key))
        .find(|s| !s.is_empty())
        .unwrap_or_default()
}

/// Map the inner object of a `success: false` reply to a provider error.
/// Either spelling of each key may appear; the `message_*` one wins.
fn provider_error(inner: &Value) -> ProviderError {
    let error_type = first_text(inner, &["message_type", "error_type"]);
    let message = first_text(inner, &["message", "error_message"]);

    match error_type.as_str() {
        ERR_INVALID_CUSTOMER_NUM => ProviderError::InvalidCustomerNumber(message),
        ERR_EXCEEDED_DAILY_LIMIT => ProviderError::ExceededDailyLimit(message),
        _ => ProviderError::Unknown {
            error_type,
            message,
        },
    }
}

/// Decode a raw transfer reply. Only an explicit `success: false` counts as
/// a failure; the shape of `response` is never an error in itself.
pub fn decode_transfer_reply(raw: &Value) -> Result<TransferOutput, FlopayError> {
    let null = Value::Null;
    let inner = raw.get("response").unwrap_or(&null);

    if raw.get("success").and_then(Value::as_bool) == Some(false) {
        let err = provider_error(inner);
        tracing::debug!(error = %err, "provider rejected transfer");
        return Err(err.into());
    }

    Ok(TransferOutput {
        success: true,
        response: TransferReceipt::from_reply(inner),
    })
}

/// A single transfer call: one input, one response slot.
#[derive(Debug, Clone)]
pub struct TransferRequest {
    input: TransferInput,
    raw: Option<Value>,
    output: Option<TransferOutput>,
}

impl TransferRequest {
    pub fn new(input: TransferInput) -> Self {
        Self {
            input,
            raw: None,
            output: None,
        }
    }

    pub fn input(&self) -> &TransferInput {
        &self.input
    }

    /// Raw provider payload, once one has been assigned.
    pub fn response(&self) -> Option<&Value> {
        self.raw.as_ref()
    }

    /// Decoded output. Fails with [`FlopayError::NoResponse`] until a
    /// successful reply has been assigned.
    pub fn output(&self) -> Result<&TransferOutput, FlopayError> {
        self.output.as_ref().ok_or(FlopayError::NoResponse)
    }

    pub fn into_output(self) -> Result<TransferOutput, FlopayError> {
        self.output.ok_or(FlopayError::NoResponse)
    }
}

impl ApiRequest for TransferRequest {
    type Output = TransferOutput;

    const PATH: &'static str = TRANSFER_PATH;
    const METHOD: Method = Method::Post;

    fn body(&self) -> Result<Value, FlopayError> {
        Ok(serde_json::to_value(&self.input)?)
    }

    fn set_response(&mut self, raw: Value) -> Result<&TransferOutput, FlopayError> {
        if self.raw.is_some() {
            return Err(FlopayError::ResponseAlreadySet);
        }
        let decoded = decode_transfer_reply(&raw);
        self.raw = Some(raw);
        Ok(&*self.output.insert(decoded?))
    }
}
