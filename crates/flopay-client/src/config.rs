use flopay::{Credential, FlopayError, BASE_URL, ENV_BASE_URL, ENV_CLIENT_ID, ENV_CLIENT_SECRET};

const MISSING_CREDENTIAL: &str = "FLOPAY_CLIENT_ID and FLOPAY_CLIENT_SECRET must be set, \
     or build the client explicitly with FlopayClient::new(id, secret)";

/// Settings resolved from the process environment.
#[derive(Debug, Clone)]
pub struct FlopayConfig {
    pub credential: Credential,
    pub base_url: String,
}

impl FlopayConfig {
    pub fn from_env() -> Result<Self, FlopayError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve settings through `lookup`, which maps a variable name to its
    /// value. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, FlopayError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credential = credential_from_lookup(&lookup)?;
        let base_url = lookup(ENV_BASE_URL)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| BASE_URL.to_string());

        Ok(Self {
            credential,
            base_url,
        })
    }
}

/// Read the client id and secret from `FLOPAY_CLIENT_ID` / `FLOPAY_CLIENT_SECRET`.
pub fn credential_from_env() -> Result<Credential, FlopayError> {
    credential_from_lookup(|name| std::env::var(name).ok())
}

pub fn credential_from_lookup<F>(lookup: F) -> Result<Credential, FlopayError>
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |name: &str| lookup(name).filter(|s| !s.is_empty());

    match (non_empty(ENV_CLIENT_ID), non_empty(ENV_CLIENT_SECRET)) {
        (Some(id), Some(secret)) => Ok(Credential::new(id, secret)),
        _ => Err(FlopayError::InvalidCredential(MISSING_CREDENTIAL.to_string())),
    }
}
