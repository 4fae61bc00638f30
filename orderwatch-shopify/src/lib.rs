//! Shopify Admin API access for the orderwatch service.
//!
//! Provides the [`OrderSource`] seam and its live implementation,
//! [`ShopifyClient`], which searches orders by name and lists order
//! metafields.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod backend;
pub mod client;
pub mod config;
pub mod error;

pub use backend::OrderSource;
pub use client::ShopifyClient;
pub use config::{AccessToken, StoreConfig, DEFAULT_API_VERSION};
pub use error::UpstreamError;
