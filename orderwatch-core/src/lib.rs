//! Core types for the orderwatch order tracking service.
//!
//! Defines the lookup request and its normalization, typed snapshots of
//! upstream order data, and the composed lookup response.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod lookup;
pub mod order;
pub mod response;

pub use error::CoreError;
pub use lookup::{LookupRequest, OrderName};
pub use order::{Customer, Fulfillment, Metafield, MetafieldList, MetafieldValue, OrderList, UpstreamOrder};
pub use response::{resolve_shipping_status, LookupResponse};
