/// Production API host.
pub const BASE_URL: &str = "https://api.flopay.io";

/// Versioned path segment placed between the host and every endpoint path.
pub const API_VERSION: &str = "v1";

/// Relative path of the token endpoint.
pub const AUTH_PATH: &str = "auth.json";

/// Relative path of the mobile-money transfer endpoint.
pub const TRANSFER_PATH: &str = "transfer.json";

/// Lifetime of an access token when the provider does not state one.
pub const TOKEN_LIFETIME_SECS: u64 = 3600;

/// Environment variable holding the client id.
pub const ENV_CLIENT_ID: &str = "FLOPAY_CLIENT_ID";

/// Environment variable holding the client secret.
pub const ENV_CLIENT_SECRET: &str = "FLOPAY_CLIENT_SECRET";

/// Optional environment variable overriding [`BASE_URL`].
pub const ENV_BASE_URL: &str = "FLOPAY_BASE_URL";

/// Provider error type for a recipient number the operator does not recognise.
pub const ERR_INVALID_CUSTOMER_NUM: &str = "invalid_customer_num";

/// Provider error type for a sender over their daily transfer allowance.
pub const ERR_EXCEEDED_DAILY_LIMIT: &str = "exceeded_daily_limit";

/// Build `<base_url>/<version>/<path>`.
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        API_VERSION,
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_joins_segments() {
        assert_eq!(
            endpoint_url(BASE_URL, TRANSFER_PATH),
            "https://api.flopay.io/v1/transfer.json"
        );
        assert_eq!(
            endpoint_url(BASE_URL, "auth.json"),
            "https://api.flopay.io/v1/auth.json"
        );
    }

    #[test]
    fn test_endpoint_url_no_double_slashes() {
        assert_eq!(
            endpoint_url("http://127.0.0.1:1234/", "/transfer.json"),
            "http://127.0.0.1:1234/v1/transfer.json"
        );
    }
}
