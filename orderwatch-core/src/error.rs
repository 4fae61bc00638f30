/// Errors produced by the `orderwatch-core` crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A required lookup field was absent, `null`, or empty.
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    /// The order number contained nothing but `#` characters and whitespace.
    #[error("order number '{raw}' is empty after normalization")]
    EmptyOrderName { raw: String },
}
