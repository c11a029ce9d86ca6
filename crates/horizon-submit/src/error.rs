//! Error types for submission.

use horizon_client::HorizonError;

use crate::types::EnvelopeError;

/// Errors that reject a submission attempt.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The envelope could not be encoded; nothing was sent.
    #[error("envelope error: {0}")]
    Envelope(#[from] EnvelopeError),

    /// The Horizon call failed (transport, decode, or classified HTTP
    /// status).
    #[error("horizon error: {0}")]
    Horizon(#[from] HorizonError),
}
