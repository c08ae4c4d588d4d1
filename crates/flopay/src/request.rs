//! The seam between typed requests and whatever sends them over the wire.

use serde_json::Value;

use crate::error::FlopayError;

/// HTTP method of an endpoint. Every Flopay endpoint takes a JSON body over
/// POST.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Post => "POST",
        }
    }
}

/// One authenticated call against a Flopay endpoint.
///
/// Implementors own their input and a single response slot. A dispatcher
/// sends [`ApiRequest::METHOD`] to `endpoint(ApiRequest::PATH)` with
/// [`ApiRequest::body`] and feeds the parsed reply to
/// [`ApiRequest::set_response`], which is the only place raw provider JSON
/// is validated.
pub trait ApiRequest {
    /// Decoded result of a successful call.
    type Output;

    /// Path relative to the versioned base URL.
    const PATH: &'static str;

    const METHOD: Method;

    /// Wire-format JSON body.
    fn body(&self) -> Result<Value, FlopayError>;

    /// Store the raw reply and decode it, or return the error it describes.
    fn set_response(&mut self, raw: Value) -> Result<&Self::Output, FlopayError>;
}
