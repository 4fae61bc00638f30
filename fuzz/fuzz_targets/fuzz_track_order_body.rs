//! Fuzz target: decoding and validating a `POST /api/track-order` body.
//!
//! Arbitrary bytes must either produce a lookup request or an invalid-input
//! error, never a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use orderwatch_core::LookupRequest;
use orderwatch_gateway::routes::TrackOrderBody;

fuzz_target!(|data: &[u8]| {
    if let Ok(body) = TrackOrderBody::decode(data) {
        let _ = LookupRequest::new(body.order_number.as_deref(), body.email.as_deref());
    }
});
