//! Flopay client SDK for mobile-money transfers.
//!
//! Authenticate with client credentials, then send transfers. Provider
//! rejections come back as typed [`ProviderError`]s.
//!
//! # Quick Example
//!
//! ```no_run
//! use flopay_client::{FlopayClient, FlopayError, ProviderError, TransferInput};
//! use rust_decimal::Decimal;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), FlopayError> {
//! let mut client = FlopayClient::new("client-id", "client-secret");
//! client.authorize().await?;
//!
//! let input = TransferInput::new(
//!     Decimal::from(10), "GHS", Decimal::from(10), "GHS", "0551234567", "GH", "MOMO",
//! )
//! .provider("MTN");
//!
//! match client.transfer(input).await {
//!     Ok(out) => println!("sent: {:?}", out.response.reference),
//!     Err(FlopayError::Provider(ProviderError::InvalidCustomerNumber(msg))) => {
//!         eprintln!("check the number: {msg}")
//!     }
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

mod client;
pub mod config;

pub use client::FlopayClient;
pub use config::{credential_from_env, FlopayConfig};

// Re-export commonly needed types from core
pub use flopay::{
    AccessToken, ApiRequest, Credential, FlopayError, Method, ProviderError, TransferInput,
    TransferOutput, TransferReceipt, TransferRequest, API_VERSION, BASE_URL,
};
