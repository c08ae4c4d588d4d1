use chrono::Utc;
use flopay::{
    endpoint_url, AccessToken, ApiRequest, AuthResponse, Credential, FlopayError, Method,
    TransferInput, TransferOutput, TransferRequest, AUTH_PATH, BASE_URL,
};
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use crate::config::{self, FlopayConfig};

/// HTTP client for the Flopay API.
///
/// Holds one [`Credential`] and at most one [`AccessToken`]. Tokens are not
/// refreshed automatically: once [`FlopayClient::is_authorized`] turns false,
/// call [`FlopayClient::authorize`] again.
pub struct FlopayClient {
    http: reqwest::Client,
    credential: Credential,
    base_url: String,
    token: Option<AccessToken>,
}

impl FlopayClient {
    /// Create a client from an explicit client id and secret. Makes no
    /// network call.
    pub fn new(id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self::from_credential(Credential::new(id, secret))
    }

    pub fn from_credential(credential: Credential) -> Self {
        Self::try_from_credential(credential).expect("failed to build HTTP client")
    }

    /// Like [`FlopayClient::from_credential`], returning the HTTP client
    /// build failure instead of panicking.
    pub fn try_from_credential(credential: Credential) -> Result<Self, FlopayError> {
        Ok(Self::with_http_client(credential, default_http_client()?))
    }

    /// Create a client with a custom reqwest::Client.
    pub fn with_http_client(credential: Credential, http: reqwest::Client) -> Self {
        Self {
            http,
            credential,
            base_url: BASE_URL.to_string(),
            token: None,
        }
    }

    /// Credentials from `FLOPAY_CLIENT_ID` / `FLOPAY_CLIENT_SECRET`.
    pub fn from_env() -> Result<Self, FlopayError> {
        Self::try_from_credential(config::credential_from_env()?)
    }

    pub fn from_config(config: FlopayConfig) -> Result<Self, FlopayError> {
        Ok(Self::try_from_credential(config.credential)?.with_base_url(config.base_url))
    }

    /// Point the client at another host, e.g. a sandbox or a local mock.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `<base_url>/v1/<path>`.
    pub fn endpoint(&self, path: &str) -> String {
        endpoint_url(&self.base_url, path)
    }

    pub fn access_token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }

    /// Whether a token is held and has not yet expired.
    pub fn is_authorized(&self) -> bool {
        self.token.as_ref().is_some_and(|t| !t.is_expired())
    }

    /// Exchange the credentials for an access token, replacing any token
    /// already held.
    pub async fn authorize(&mut self) -> Result<&AccessToken, FlopayError> {
        let url = self.endpoint(AUTH_PATH);
        tracing::debug!(%url, client_id = self.credential.id(), "requesting access token");

        let resp = self
            .http
            .post(&url)
            .json(&self.credential)
            .send()
            .await
            .map_err(|e| FlopayError::Http(format!("auth request failed: {e}")))?;

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| FlopayError::Http(format!("failed to read auth response: {e}")))?;
        let reply: AuthResponse = serde_json::from_slice(&bytes)?;

        let token = AccessToken::issue(reply, Utc::now());
        tracing::info!(expires_at = %token.expires_at(), "obtained flopay access token");
        Ok(&*self.token.insert(token))
    }

    /// Send `request` with the held token and decode the reply into it.
    pub async fn send<'r, R: ApiRequest>(
        &self,
        request: &'r mut R,
    ) -> Result<&'r R::Output, FlopayError> {
        let token = match self.token.as_ref() {
            Some(t) if !t.is_expired() => t,
            Some(_) => {
                return Err(FlopayError::NotAuthorized(
                    "access token expired, call authorize() again".to_string(),
                ))
            }
            None => {
                return Err(FlopayError::NotAuthorized(
                    "call authorize() before sending requests".to_string(),
                ))
            }
        };

        let url = self.endpoint(R::PATH);
        let req = self
            .http
            .request(http_method(R::METHOD), &url)
            .header(AUTHORIZATION, token.bearer())
            .json(&request.body()?);

        tracing::debug!(%url, method = R::METHOD.as_str(), "sending flopay request");
        let resp = req
            .send()
            .await
            .map_err(|e| FlopayError::Http(format!("request failed: {e}")))?;

        let status = resp.status();
        let bytes = resp
            .bytes()
            .await
            .map_err(|e| FlopayError::Http(format!("failed to read response: {e}")))?;
        let raw: Value = serde_json::from_slice(&bytes)?;
        tracing::debug!(%url, %status, "flopay replied");

        request.set_response(raw)
    }

    /// Send one transfer and return its decoded output.
    pub async fn transfer(&self, input: TransferInput) -> Result<TransferOutput, FlopayError> {
        let mut request = TransferRequest::new(input);
        self.send(&mut request).await?;
        request.into_output()
    }
}

/// 30s timeout, no redirects.
fn default_http_client() -> Result<reqwest::Client, FlopayError> {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(|e| FlopayError::Http(format!("failed to build HTTP client: {e}")))
}

fn http_method(method: Method) -> reqwest::Method {
    match method {
        Method::Post => reqwest::Method::POST,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> FlopayClient {
        FlopayClient::new("id-1", "secret-1")
    }

    #[test]
    fn test_endpoint_uses_base_and_version() {
        let c = client();
        assert_eq!(c.endpoint("transfer.json"), "https://api.flopay.io/v1/transfer.json");
        assert_eq!(c.endpoint("auth.json"), "https://api.flopay.io/v1/auth.json");
        assert_eq!(c.endpoint("a/b"), "https://api.flopay.io/v1/a/b");
    }

    #[test]
    fn test_endpoint_independent_of_credentials() {
        let other = FlopayClient::from_credential(Credential::new("x", "y"));
        assert_eq!(client().endpoint("p"), other.endpoint("p"));
    }

    #[test]
    fn test_new_client_is_not_authorized() {
        let c = client();
        assert!(!c.is_authorized());
        assert!(c.access_token().is_none());
        assert_eq!(c.credential(), &Credential::new("id-1", "secret-1"));
    }

    #[test]
    fn test_default_http_client_builds() {
        assert!(default_http_client().is_ok());
        let c = FlopayClient::try_from_credential(Credential::new("id-1", "secret-1")).unwrap();
        assert_eq!(c.base_url(), "https://api.flopay.io");
    }

    #[test]
    fn test_from_config_applies_base_url() {
        let c = FlopayClient::from_config(FlopayConfig {
            credential: Credential::new("id-1", "secret-1"),
            base_url: "http://localhost:9000".to_string(),
        })
        .unwrap();
        assert_eq!(c.base_url(), "http://localhost:9000");
        assert_eq!(c.endpoint("auth.json"), "http://localhost:9000/v1/auth.json");
    }

    #[test]
    fn test_http_method_mapping() {
        assert_eq!(http_method(Method::Post), reqwest::Method::POST);
    }
}
