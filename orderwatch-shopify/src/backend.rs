//! Order source abstraction trait.
//!
//! Lets the lookup pipeline run against the live Admin API or an in-memory
//! fake without changing the handler.

use async_trait::async_trait;
use orderwatch_core::{MetafieldList, OrderName, UpstreamOrder};

use crate::UpstreamError;

/// Read-only access to a store's orders.
///
/// Implementations must be `Send + Sync` to be shared across requests.
#[async_trait]
pub trait OrderSource: Send + Sync {
    /// Search orders in any status by order name.
    ///
    /// # Errors
    /// Returns [`UpstreamError::Transport`] if no response arrives,
    /// [`UpstreamError::Status`] for a non-success status, or
    /// [`UpstreamError::Decode`] for an unexpected body.
    async fn find_orders(&self, name: &OrderName) -> Result<Vec<UpstreamOrder>, UpstreamError>;

    /// List the metafields attached to an order.
    ///
    /// # Errors
    /// Same failure modes as [`OrderSource::find_orders`].
    async fn order_metafields(&self, order_id: u64) -> Result<MetafieldList, UpstreamError>;
}
