//! Fuzz target: decoding upstream order and metafield payloads.

#![no_main]

use libfuzzer_sys::fuzz_target;
use orderwatch_core::{LookupResponse, MetafieldList, OrderList};

fuzz_target!(|data: &[u8]| {
    if let Ok(list) = serde_json::from_slice::<OrderList>(data) {
        for order in list.orders {
            let resp = LookupResponse::compose(order, None);
            assert!(!resp.shipping_status.is_empty());
        }
    }
    if let Ok(list) = serde_json::from_slice::<MetafieldList>(data) {
        let _ = list.custom_shipping_status();
    }
});
