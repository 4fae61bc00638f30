//! Store connection settings for the Shopify Admin API.

use std::fmt;

/// Admin API version used when none is configured.
pub const DEFAULT_API_VERSION: &str = "2024-01";

/// Admin API access token. Never printed by `Debug` or `Display`.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Expose the raw token for the request header.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***REDACTED***)")
    }
}

impl fmt::Display for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***REDACTED***")
    }
}

/// Where and how to reach one store's Admin API.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct StoreConfig {
    /// Scheme and host, without a trailing slash, e.g.
    /// `https://example.myshopify.com`.
    pub base_url: String,

    /// Admin API version path segment.
    pub api_version: String,

    pub access_token: AccessToken,
}

impl StoreConfig {
    /// Settings for `https://{store_domain}` on the default API version.
    #[must_use]
    pub fn new(store_domain: &str, access_token: AccessToken) -> Self {
        Self {
            base_url: format!("https://{}", store_domain.trim_end_matches('/')),
            api_version: DEFAULT_API_VERSION.to_owned(),
            access_token,
        }
    }

    #[must_use]
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Point the client at a different origin (used against mock servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    /// Full URL for an Admin API resource path such as `orders.json`.
    #[must_use]
    pub fn admin_url(&self, resource: &str) -> String {
        format!("{}/admin/api/{}/{resource}", self.base_url, self.api_version)
    }
}
