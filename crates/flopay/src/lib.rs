//! Core types for the Flopay mobile-money API.
//!
//! This crate has no transport: it describes credentials and tokens, maps
//! transfer inputs to the provider's wire format, and decodes replies into
//! [`TransferOutput`] or a typed [`ProviderError`]. The HTTP client lives in
//! `flopay-client`.
//!
//! # Decoding a reply
//!
//! ```
//! use flopay::{ApiRequest, FlopayError, ProviderError, TransferInput, TransferRequest};
//! use rust_decimal::Decimal;
//!
//! let input = TransferInput::new(
//!     Decimal::from(10), "GHS", Decimal::from(10), "GHS", "0551234567", "GH", "MOMO",
//! );
//! let mut request = TransferRequest::new(input);
//!
//! let reply = serde_json::json!({
//!     "success": false,
//!     "response": {"message_type": "invalid_customer_num", "message": "bad number"}
//! });
//! match request.set_response(reply) {
//!     Err(FlopayError::Provider(ProviderError::InvalidCustomerNumber(msg))) => {
//!         assert_eq!(msg, "bad number")
//!     }
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

pub mod auth;
pub mod constants;
pub mod error;
pub mod request;
pub mod transfer;

pub use auth::{AccessToken, AuthResponse, Credential};
pub use constants::*;
pub use error::{FlopayError, ProviderError};
pub use request::{ApiRequest, Method};
pub use transfer::{
    decode_transfer_reply, TransferInput, TransferOutput, TransferReceipt, TransferRequest,
};
