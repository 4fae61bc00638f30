//! Fuzz target: order-number normalization.
//!
//! A normalized name never contains `#`, never has outer whitespace, and is
//! never empty.

#![no_main]

use libfuzzer_sys::fuzz_target;
use orderwatch_core::OrderName;

fuzz_target!(|data: &str| {
    if let Ok(name) = OrderName::parse(data) {
        let s = name.as_str();
        assert!(!s.contains('#'));
        assert_eq!(s, s.trim());
        assert!(!s.is_empty());
    }
});
