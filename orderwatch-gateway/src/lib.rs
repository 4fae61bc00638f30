//! HTTP API gateway for the orderwatch order tracking service.
//!
//! Exposes `POST /api/track-order`, which looks up an order by number,
//! authorizes the caller by the email on file, and reports its shipping
//! status. `GET /ping` is a liveness probe.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
pub mod tracker;

#[cfg(test)]
mod fake;
