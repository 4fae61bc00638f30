//! Lookup input: order-number normalization and the validated request.

use std::fmt;

use serde::Serialize;

use crate::CoreError;

/// Normalized order name used as the upstream search key.
///
/// Every `#` is removed and surrounding whitespace trimmed, so `"#1001"`,
/// `" 1001 "` and `"1001"` all map to `"1001"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OrderName(String);

impl OrderName {
    /// Normalize a raw order number as typed by a customer.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyOrderName`] if nothing is left after
    /// stripping `#` and whitespace.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let stripped: String = raw.chars().filter(|c| *c != '#').collect();
        let trimmed = stripped.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyOrderName { raw: raw.to_owned() });
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated order lookup: normalized order name plus the email the
/// caller claims is on file.
#[derive(Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct LookupRequest {
    pub order_name: OrderName,
    pub email: String,
}

impl LookupRequest {
    /// Validate raw wire fields into a lookup request.
    ///
    /// Both fields must be present and non-empty. The email is kept as
    /// supplied; comparison against the stored address happens later and is
    /// case-insensitive.
    ///
    /// # Errors
    /// Returns [`CoreError::MissingField`] for an absent or empty field, or
    /// [`CoreError::EmptyOrderName`] if the order number normalizes to nothing.
    pub fn new(order_number: Option<&str>, email: Option<&str>) -> Result<Self, CoreError> {
        let order_number = order_number
            .filter(|s| !s.is_empty())
            .ok_or(CoreError::MissingField { field: "orderNumber" })?;
        let email = email
            .filter(|s| !s.is_empty())
            .ok_or(CoreError::MissingField { field: "email" })?;

        Ok(Self {
            order_name: OrderName::parse(order_number)?,
            email: email.to_owned(),
        })
    }

    /// Case-insensitive comparison against the email stored on an order.
    ///
    /// An order without a stored email never matches.
    #[must_use]
    pub fn email_matches(&self, stored: Option<&str>) -> bool {
        stored.is_some_and(|stored| stored.to_lowercase() == self.email.to_lowercase())
    }
}

// The email is PII; keep it out of logs.
impl fmt::Debug for LookupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupRequest")
            .field("order_name", &self.order_name)
            .field("email", &"<redacted>")
            .finish()
    }
}
