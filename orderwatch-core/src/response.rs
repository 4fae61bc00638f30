//! The normalized lookup response and the shipping-status fallback.

use serde::Serialize;

use crate::order::{Fulfillment, UpstreamOrder};

/// Status reported for an order with a fulfillment but no shipment status.
pub const STATUS_SHIPPED: &str = "Shipped";
/// Status reported for an order that has not been fulfilled at all.
pub const STATUS_ORDER_PLACED: &str = "Order Placed";

/// Payload returned by `POST /api/track-order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct LookupResponse {
    pub order_id: u64,
    pub customer_first_name: Option<String>,
    pub order_name: String,
    pub financial_status: Option<String>,
    pub fulfillment_status: Option<String>,
    pub shipping_status: String,
    pub tracking_number: Option<String>,
    pub tracking_url: Option<String>,
}

impl LookupResponse {
    /// Compose the response for an authorized order.
    ///
    /// Tracking fields come from the first fulfillment only.
    #[must_use]
    pub fn compose(order: UpstreamOrder, custom_shipping_status: Option<String>) -> Self {
        let fulfillment = order.first_fulfillment();
        let shipping_status = resolve_shipping_status(custom_shipping_status, fulfillment);
        let tracking_number = fulfillment.and_then(|f| non_empty(f.tracking_number.as_deref()));
        let tracking_url = fulfillment.and_then(|f| non_empty(f.tracking_url.as_deref()));
        let customer_first_name = order.customer_first_name().map(str::to_owned);

        Self {
            order_id: order.id,
            customer_first_name,
            order_name: order.name,
            financial_status: order.financial_status,
            fulfillment_status: order.fulfillment_status,
            shipping_status,
            tracking_number,
            tracking_url,
        }
    }
}

/// Three-tier fallback: custom annotation, then the platform's shipment
/// status, then "Shipped" if any fulfillment exists, else "Order Placed".
///
/// Empty strings count as unset at every tier.
#[must_use]
pub fn resolve_shipping_status(custom: Option<String>, fulfillment: Option<&Fulfillment>) -> String {
    if let Some(custom) = custom.filter(|s| !s.is_empty()) {
        return custom;
    }
    match fulfillment {
        Some(f) => non_empty(f.shipment_status.as_deref()).unwrap_or_else(|| STATUS_SHIPPED.to_owned()),
        None => STATUS_ORDER_PLACED.to_owned(),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.is_empty()).map(str::to_owned)
}
