//! Typed snapshots of upstream order data.
//!
//! Field names follow the Shopify Admin REST API. Absent and `null` fields
//! both decode to `None`, and absent collections decode to empty.

use serde::Deserialize;

/// Namespace of the metafield carrying a staff-supplied shipping status.
pub const SHIPPING_STATUS_NAMESPACE: &str = "custom";
/// Key of the metafield carrying a staff-supplied shipping status.
pub const SHIPPING_STATUS_KEY: &str = "shipping_status";

/// Body of `GET /orders.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub orders: Vec<UpstreamOrder>,
}

/// One order as reported by the commerce platform.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpstreamOrder {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub financial_status: Option<String>,
    #[serde(default)]
    pub fulfillment_status: Option<String>,
    #[serde(default)]
    pub customer: Option<Customer>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub fulfillments: Vec<Fulfillment>,
}

impl UpstreamOrder {
    /// The first fulfillment, if any shipment has been recorded.
    #[must_use]
    pub fn first_fulfillment(&self) -> Option<&Fulfillment> {
        self.fulfillments.first()
    }

    #[must_use]
    pub fn customer_first_name(&self) -> Option<&str> {
        self.customer.as_ref().and_then(|c| c.first_name.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Customer {
    #[serde(default, alias = "firstName")]
    pub first_name: Option<String>,
}

/// A shipment record attached to an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Fulfillment {
    #[serde(default)]
    pub shipment_status: Option<String>,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub tracking_url: Option<String>,
}

/// Body of `GET /orders/{id}/metafields.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetafieldList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub metafields: Vec<Metafield>,
}

/// A namespaced key/value annotation on an order.
///
/// Entries other than `custom.shipping_status` are never inspected, so every
/// field decodes leniently.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Metafield {
    #[serde(default)]
    pub namespace: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub value: Option<MetafieldValue>,
}

/// Metafield payload. Objects and arrays land in `Other`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MetafieldValue {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
    Other(serde_json::Value),
}

impl MetafieldValue {
    /// Render the value as display text. Empty text, `false`, and structured
    /// values yield `None`.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Text(s) if s.is_empty() => None,
            Self::Text(s) => Some(s.clone()),
            Self::Number(n) => Some(n.to_string()),
            Self::Bool(true) => Some("true".to_owned()),
            Self::Bool(false) | Self::Other(_) => None,
        }
    }
}

impl MetafieldList {
    /// The staff-supplied shipping status, if the `custom.shipping_status`
    /// metafield exists and carries a non-empty value.
    #[must_use]
    pub fn custom_shipping_status(&self) -> Option<String> {
        self.metafields
            .iter()
            .find(|m| {
                m.namespace.as_deref() == Some(SHIPPING_STATUS_NAMESPACE)
                    && m.key.as_deref() == Some(SHIPPING_STATUS_KEY)
            })
            .and_then(|m| m.value.as_ref())
            .and_then(MetafieldValue::as_text)
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
