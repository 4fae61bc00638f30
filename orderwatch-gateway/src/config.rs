//! Process configuration, read once from the environment at startup.

use std::net::{Ipv4Addr, SocketAddr};

use orderwatch_shopify::{AccessToken, StoreConfig};

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 4000;

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("required environment variable {var} is not set")]
    Missing { var: &'static str },

    /// `PORT` is not a valid TCP port.
    #[error("invalid PORT '{value}': expected an integer in 0..=65535")]
    InvalidPort { value: String },
}

/// Everything the gateway needs to start.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct GatewayConfig {
    pub listen_addr: SocketAddr,
    pub store: StoreConfig,
}

impl GatewayConfig {
    /// Read configuration from the process environment.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `SHOPIFY_STORE_DOMAIN` | required |
    /// | `SHOPIFY_ADMIN_API_TOKEN` | required |
    /// | `SHOPIFY_API_VERSION` | `2024-01` |
    /// | `PORT` | `4000` |
    ///
    /// # Errors
    /// Returns [`ConfigError`] if a required variable is missing or `PORT`
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    /// See [`GatewayConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let required = |var: &'static str| get(var).ok_or(ConfigError::Missing { var });

        let domain = required("SHOPIFY_STORE_DOMAIN")?;
        let token = required("SHOPIFY_ADMIN_API_TOKEN")?;

        let mut store = StoreConfig::new(domain.trim(), AccessToken::new(token));
        if let Some(version) = get("SHOPIFY_API_VERSION") {
            store = store.with_api_version(version.trim());
        }

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { value: raw })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
            store,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<GatewayConfig, ConfigError> {
        let map: HashMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        GatewayConfig::from_lookup(|var| map.get(var).cloned())
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let cfg = match load(&[
            ("SHOPIFY_STORE_DOMAIN", "shop.myshopify.com"),
            ("SHOPIFY_ADMIN_API_TOKEN", "shpat_x"),
        ]) {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(cfg.listen_addr.port(), DEFAULT_PORT);
        assert!(cfg.listen_addr.ip().is_unspecified());
        assert_eq!(
            cfg.store.admin_url("orders.json"),
            "https://shop.myshopify.com/admin/api/2024-01/orders.json"
        );
        assert_eq!(cfg.store.access_token.expose(), "shpat_x");
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = match load(&[
            ("SHOPIFY_STORE_DOMAIN", "shop.myshopify.com"),
            ("SHOPIFY_ADMIN_API_TOKEN", "shpat_x"),
            ("SHOPIFY_API_VERSION", "2024-10"),
            ("PORT", "8080"),
        ]) {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(cfg.listen_addr.port(), 8080);
        assert_eq!(cfg.store.api_version, "2024-10");
    }

    #[test]
    fn missing_required_vars_rejected() {
        let err = load(&[("SHOPIFY_ADMIN_API_TOKEN", "shpat_x")]).err();
        assert!(matches!(err, Some(ConfigError::Missing { var: "SHOPIFY_STORE_DOMAIN" })));

        let err = load(&[("SHOPIFY_STORE_DOMAIN", "shop"), ("SHOPIFY_ADMIN_API_TOKEN", "  ")]).err();
        assert!(matches!(err, Some(ConfigError::Missing { var: "SHOPIFY_ADMIN_API_TOKEN" })));
    }

    #[test]
    fn invalid_port_rejected() {
        let err = load(&[
            ("SHOPIFY_STORE_DOMAIN", "shop"),
            ("SHOPIFY_ADMIN_API_TOKEN", "shpat_x"),
            ("PORT", "70000"),
        ])
        .err();
        assert!(matches!(err, Some(ConfigError::InvalidPort { .. })));
    }
}
