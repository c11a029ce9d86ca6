//! Error types for Horizon API calls.

use serde::{Deserialize, Serialize};

use horizon_resources::DecodeError;

/// Errors that can occur when talking to a Horizon server.
#[derive(Debug, thiserror::Error)]
pub enum HorizonError {
    /// The HTTP request itself failed (network, TLS, timeout). Never
    /// retried at this layer.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response body failed to decode into its resource type.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The server answered with a non-success status.
    #[error("horizon returned {status} ({kind:?})")]
    Http {
        /// Domain classification of the status.
        kind: HttpErrorKind,
        /// The raw HTTP status code.
        status: u16,
        /// The decoded problem body, when one was present.
        problem: Option<Problem>,
    },

    /// A page navigation was requested but the page has no such link.
    #[error("no such page")]
    NoSuchPage,
}

impl HorizonError {
    /// Classify a non-success response into an [`HorizonError::Http`],
    /// decoding the problem body when one is present.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let problem = serde_json::from_slice::<Problem>(body).ok();
        let kind = HttpErrorKind::classify(status, problem.as_ref());
        HorizonError::Http {
            kind,
            status,
            problem,
        }
    }

    /// Whether this error is a not-found response.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            HorizonError::Http {
                kind: HttpErrorKind::NotFound,
                ..
            }
        )
    }
}

/// Domain classification of a non-success HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpErrorKind {
    /// The requested resource does not exist.
    NotFound,
    /// The request was malformed or rejected on validation.
    BadRequest,
    /// The server is rate limiting this client.
    RateLimited,
    /// The server's history window does not cover the request.
    StaleHistory,
    /// The submission duplicates one the server already has.
    Duplicate,
    /// Any other server-side failure.
    Internal,
}

impl HttpErrorKind {
    /// Map a status code (and problem body, when present) onto a kind.
    pub fn classify(status: u16, problem: Option<&Problem>) -> Self {
        match status {
            404 => HttpErrorKind::NotFound,
            400 | 406 => HttpErrorKind::BadRequest,
            409 => HttpErrorKind::Duplicate,
            429 => HttpErrorKind::RateLimited,
            503 if problem.is_some_and(|p| p.type_uri.ends_with("stale_history")) => {
                HttpErrorKind::StaleHistory
            }
            _ => HttpErrorKind::Internal,
        }
    }
}

/// The `application/problem+json` body Horizon attaches to failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    /// URI identifying the error class.
    #[serde(rename = "type")]
    pub type_uri: String,
    /// Short human-readable title.
    #[serde(default)]
    pub title: Option<String>,
    /// HTTP status the server intended.
    #[serde(default)]
    pub status: Option<u16>,
    /// Longer human-readable description.
    #[serde(default)]
    pub detail: Option<String>,
    /// Endpoint-specific extra data; failed submissions carry
    /// `result_codes` and the result XDR here.
    #[serde(default)]
    pub extras: Option<serde_json::Value>,
}
