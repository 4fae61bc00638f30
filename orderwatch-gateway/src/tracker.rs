//! The order lookup pipeline: fetch, authorize, enrich, compose.

use orderwatch_core::{LookupRequest, LookupResponse};
use orderwatch_shopify::{OrderSource, UpstreamError};

use crate::error::GatewayError;

/// Outcome of the best-effort metafield lookup.
///
/// A failed fetch is carried as [`Enrichment::Skipped`] so the caller decides,
/// visibly, to drop it.
#[derive(Debug)]
pub enum Enrichment {
    /// `custom.shipping_status` is set on the order.
    Found(String),
    /// The metafields were fetched but carry no custom status.
    Absent,
    /// The metafield fetch failed; the lookup proceeds without it.
    Skipped(UpstreamError),
}

impl Enrichment {
    /// Fetch the custom shipping status for an order. Never fails.
    pub async fn fetch(source: &dyn OrderSource, order_id: u64) -> Self {
        match source.order_metafields(order_id).await {
            Ok(list) => list
                .custom_shipping_status()
                .map_or(Enrichment::Absent, Enrichment::Found),
            Err(e) => Enrichment::Skipped(e),
        }
    }

    /// The custom status, if any. A skipped fetch is logged and discarded.
    #[must_use]
    pub fn into_status(self) -> Option<String> {
        match self {
            Enrichment::Found(status) => Some(status),
            Enrichment::Absent => None,
            Enrichment::Skipped(e) => {
                tracing::warn!(error = %e, "metafield fetch skipped");
                None
            }
        }
    }
}

/// Look up one order on behalf of a customer.
///
/// The two upstream calls run in sequence; the metafield fetch is only
/// attempted once the caller's email has been matched.
///
/// # Errors
/// - [`GatewayError::UpstreamUnavailable`] if the order search fails.
/// - [`GatewayError::Internal`] if the search body cannot be decoded.
/// - [`GatewayError::OrderNotFound`] if no order has that name.
/// - [`GatewayError::EmailMismatch`] if the first order's email differs.
pub async fn track(
    source: &dyn OrderSource,
    request: &LookupRequest,
) -> Result<LookupResponse, GatewayError> {
    let orders = source.find_orders(&request.order_name).await?;

    let order = orders.into_iter().next().ok_or(GatewayError::OrderNotFound)?;

    if !request.email_matches(order.email.as_deref()) {
        return Err(GatewayError::EmailMismatch);
    }

    let custom_status = Enrichment::fetch(source, order.id).await.into_status();

    let response = LookupResponse::compose(order, custom_status);
    tracing::info!(
        order_id = response.order_id,
        shipping_status = %response.shipping_status,
        "lookup complete"
    );
    Ok(response)
}
