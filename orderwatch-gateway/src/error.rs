//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use orderwatch_core::CoreError;
use orderwatch_shopify::UpstreamError;
use serde_json::json;

/// Errors that can end an order lookup.
///
/// `Display` is the message shown to the caller; the underlying cause is only
/// logged.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// Order number or email missing, empty, or not a string.
    #[error("Order number and email required")]
    InvalidInput(String),

    /// The order search failed in transport or returned a non-success status.
    #[error("Failed to fetch order from Shopify")]
    UpstreamUnavailable(#[source] UpstreamError),

    /// The order search returned no orders.
    #[error("Order not found")]
    OrderNotFound,

    /// The supplied email does not match the one on the order.
    #[error("Email does not match order")]
    EmailMismatch,

    /// Anything unanticipated.
    #[error("Internal server error")]
    Internal(String),
}

impl From<CoreError> for GatewayError {
    fn from(e: CoreError) -> Self {
        GatewayError::InvalidInput(e.to_string())
    }
}

impl From<UpstreamError> for GatewayError {
    fn from(e: UpstreamError) -> Self {
        match e {
            UpstreamError::Decode { .. } => GatewayError::Internal(e.to_string()),
            other => GatewayError::UpstreamUnavailable(other),
        }
    }
}

impl GatewayError {
    /// HTTP status for this error.
    ///
    /// An upstream error status is forwarded verbatim; a failure without one
    /// maps to 502.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            GatewayError::UpstreamUnavailable(e) => e
                .status()
                .and_then(|s| StatusCode::from_u16(s).ok())
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            GatewayError::OrderNotFound => StatusCode::NOT_FOUND,
            GatewayError::EmailMismatch => StatusCode::FORBIDDEN,
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            GatewayError::InvalidInput(reason) => tracing::info!(%reason, "rejected lookup"),
            GatewayError::UpstreamUnavailable(e) => {
                tracing::warn!(error = %e, status = status.as_u16(), "order fetch failed");
            }
            GatewayError::OrderNotFound | GatewayError::EmailMismatch => {
                tracing::info!(outcome = %self, "lookup refused");
            }
            GatewayError::Internal(detail) => tracing::error!(%detail, "internal error"),
        }
        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}
