//! Error types for streaming.

/// Errors surfaced through a stream's event channel.
///
/// Neither variant terminates the stream: decode errors are per-frame,
/// and transport errors trigger reconnection with the last cursor.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    /// One frame's payload failed to decode; later frames still flow.
    #[error("frame decode error: {0}")]
    Decode(#[from] horizon_resources::DecodeError),

    /// The connection failed or dropped; the stream reconnects.
    #[error("transport error: {0}")]
    Transport(String),
}
