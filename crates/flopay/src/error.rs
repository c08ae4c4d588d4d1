use thiserror::Error;

/// Business errors reported by Flopay in a `success: false` reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("invalid customer number: {0}")]
    InvalidCustomerNumber(String),

    #[error("exceeded daily limit: {0}")]
    ExceededDailyLimit(String),

    /// Any error type this SDK has no dedicated variant for.
    #[error("unexpected provider error `{error_type}`: {message}")]
    Unknown { error_type: String, message: String },
}

/// Errors returned by Flopay operations.
#[derive(Debug, Error)]
pub enum FlopayError {
    #[error("invalid credential: {0}")]
    InvalidCredential(String),

    #[error("not authorized: {0}")]
    NotAuthorized(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("no provider response has been decoded for this request")]
    NoResponse,

    #[error("request already holds a provider response")]
    ResponseAlreadySet,

    #[error("http error: {0}")]
    Http(String),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl FlopayError {
    /// The provider-reported business error, if that is what this is.
    pub fn provider(&self) -> Option<&ProviderError> {
        match self {
            FlopayError::Provider(e) => Some(e),
            _ => None,
        }
    }
}
