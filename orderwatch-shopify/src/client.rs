//! `reqwest` client for the Shopify Admin REST API.

use async_trait::async_trait;
use orderwatch_core::{MetafieldList, OrderList, OrderName, UpstreamOrder};
use serde::de::DeserializeOwned;

use crate::{OrderSource, StoreConfig, UpstreamError};

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Live order source backed by one store's Admin API.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ShopifyClient {
    http: reqwest::Client,
    config: StoreConfig,
}

impl ShopifyClient {
    /// Build a client for the given store.
    ///
    /// # Errors
    /// Returns [`UpstreamError::Transport`] if the TLS backend cannot be
    /// initialised.
    pub fn new(config: StoreConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("orderwatch/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, UpstreamError> {
        let resp = request
            .header(ACCESS_TOKEN_HEADER, self.config.access_token.expose())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::debug!(endpoint, status = status.as_u16(), "shopify returned non-success");
            return Err(UpstreamError::Status { status: status.as_u16() });
        }

        let body = resp.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| UpstreamError::Decode {
            endpoint,
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl OrderSource for ShopifyClient {
    async fn find_orders(&self, name: &OrderName) -> Result<Vec<UpstreamOrder>, UpstreamError> {
        let request = self
            .http
            .get(self.config.admin_url("orders.json"))
            .query(&[("name", name.as_str()), ("status", "any")]);
        let list: OrderList = self.get_json("orders.json", request).await?;
        tracing::debug!(order_name = %name, matches = list.orders.len(), "order search complete");
        Ok(list.orders)
    }

    async fn order_metafields(&self, order_id: u64) -> Result<MetafieldList, UpstreamError> {
        let request = self
            .http
            .get(self.config.admin_url(&format!("orders/{order_id}/metafields.json")));
        self.get_json("metafields.json", request).await
    }
}
