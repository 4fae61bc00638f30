//! Axum route handlers for the order tracking API.

use std::{any::Any, sync::Arc};

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use orderwatch_core::{LookupRequest, LookupResponse};
use orderwatch_shopify::OrderSource;
use serde::Deserialize;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::Instrument;
use uuid::Uuid;

use crate::{error::GatewayError, tracker};

// ── Shared state ─────────────────────────────────────────────────────────────

type Source = Arc<dyn OrderSource>;

// ── Request types ────────────────────────────────────────────────────────────

/// Wire body of `POST /api/track-order`. Both fields may be absent or `null`.
#[derive(Debug, Default, Deserialize)]
pub struct TrackOrderBody {
    #[serde(default, rename = "orderNumber")]
    pub order_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl TrackOrderBody {
    /// Decode a raw request body. An empty body decodes as no fields.
    ///
    /// # Errors
    /// Returns [`GatewayError::InvalidInput`] if the body is not a JSON object
    /// whose known fields are strings.
    pub fn decode(bytes: &[u8]) -> Result<Self, GatewayError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
            .map_err(|e| GatewayError::InvalidInput(format!("malformed body: {e}")))
    }
}

// ── Router ───────────────────────────────────────────────────────────────────

/// Build the application router over the given order source.
pub fn create_router(source: Source) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .route("/api/track-order", post(track_order))
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .with_state(source)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// `GET /ping` — liveness probe.
pub async fn ping() -> &'static str {
    "API alive"
}

/// `POST /api/track-order` — look up an order's shipping status.
///
/// # Errors
/// Returns the [`GatewayError`] that ended the lookup; see
/// [`tracker::track`].
pub async fn track_order(
    State(source): State<Source>,
    body: Bytes,
) -> Result<Json<LookupResponse>, GatewayError> {
    let body = TrackOrderBody::decode(&body)?;
    let request = LookupRequest::new(body.order_number.as_deref(), body.email.as_deref())?;

    let span = tracing::info_span!(
        "track_order",
        lookup_id = %Uuid::new_v4(),
        order_name = %request.order_name,
    );
    span.in_scope(|| tracing::info!("incoming lookup"));

    let response = tracker::track(source.as_ref(), &request)
        .instrument(span)
        .await?;
    Ok(Json(response))
}

/// Any unknown path or method.
pub async fn route_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Route not found")
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_owned()
    } else {
        "unknown panic payload".to_owned()
    };
    GatewayError::Internal(format!("handler panicked: {detail}")).into_response()
}
