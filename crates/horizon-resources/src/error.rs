//! Error types for resource decoding.

/// Errors that can occur when decoding a Horizon resource.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The payload is not valid JSON or does not match the variant schema.
    #[error("malformed resource: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The discriminator value has no registered variant.
    #[error("unknown resource variant: {code}")]
    UnknownVariant {
        /// The unregistered discriminator value.
        code: i64,
    },
}
