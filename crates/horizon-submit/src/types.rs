//! Submission data types: the signed-transaction boundary, submission
//! options, and response models.

use serde::{Deserialize, Serialize};

/// Failure to produce the wire form of a signed envelope.
#[derive(Debug, Clone, thiserror::Error)]
#[error("envelope encoding failed: {reason}")]
pub struct EnvelopeError {
    /// Why the envelope could not be encoded.
    pub reason: String,
}

impl EnvelopeError {
    /// An encoding failure with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Transaction memo, as visible at the submission boundary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Memo {
    /// No memo attached.
    #[default]
    None,
    /// Up to 28 bytes of text.
    Text(String),
    /// A 64-bit id.
    Id(u64),
    /// A 32-byte hash, hex-encoded.
    Hash(String),
    /// A 32-byte return hash, hex-encoded.
    Return(String),
}

impl Memo {
    /// Whether a memo is actually attached.
    pub fn is_present(&self) -> bool {
        !matches!(self, Memo::None)
    }
}

/// Coarse operation classification at the submission boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntentKind {
    /// A direct payment.
    Payment,
    /// A path payment fixing the received amount.
    PathPaymentStrictReceive,
    /// A path payment fixing the sent amount.
    PathPaymentStrictSend,
    /// An account merge.
    AccountMerge,
    /// Any operation that does not pay into a destination account.
    Other,
}

impl IntentKind {
    /// Whether this kind pays into a destination account and is subject
    /// to the memo-required precheck.
    pub fn is_payment_like(self) -> bool {
        !matches!(self, IntentKind::Other)
    }
}

/// One operation as visible to the submission pipeline: its kind and,
/// for payment-like kinds, the destination account.
#[derive(Debug, Clone)]
pub struct OperationIntent {
    /// The operation's coarse kind.
    pub kind: IntentKind,
    /// Destination account, for operations that pay into one.
    pub destination: Option<String>,
}

impl OperationIntent {
    /// An intent of the given kind paying into `destination`.
    pub fn new(kind: IntentKind, destination: impl Into<String>) -> Self {
        Self {
            kind,
            destination: Some(destination.into()),
        }
    }

    /// An intent that pays into no account.
    pub fn other() -> Self {
        Self {
            kind: IntentKind::Other,
            destination: None,
        }
    }
}

/// The opaque signed-transaction boundary: exactly the surface the
/// submission pipeline needs, nothing about the wire format.
pub trait SignedTransaction {
    /// The base64 XDR envelope to submit.
    fn envelope_xdr(&self) -> Result<String, EnvelopeError>;

    /// The transaction memo.
    fn memo(&self) -> &Memo;

    /// The operations, in order.
    fn operations(&self) -> &[OperationIntent];
}

/// A pre-signed transaction envelope.
#[derive(Debug, Clone)]
pub struct Envelope {
    envelope_xdr: String,
    memo: Memo,
    operations: Vec<OperationIntent>,
}

impl Envelope {
    /// Wrap an already-encoded envelope with its memo and operations.
    pub fn new(
        envelope_xdr: impl Into<String>,
        memo: Memo,
        operations: Vec<OperationIntent>,
    ) -> Self {
        Self {
            envelope_xdr: envelope_xdr.into(),
            memo,
            operations,
        }
    }
}

impl SignedTransaction for Envelope {
    fn envelope_xdr(&self) -> Result<String, EnvelopeError> {
        Ok(self.envelope_xdr.clone())
    }

    fn memo(&self) -> &Memo {
        &self.memo
    }

    fn operations(&self) -> &[OperationIntent] {
        &self.operations
    }
}

/// A fee-bump envelope wrapping an inner transaction.
///
/// Fee-bumps carry no memo or operation set of their own, so they
/// bypass the precheck entirely.
#[derive(Debug, Clone)]
pub struct FeeBumpEnvelope {
    envelope_xdr: String,
}

impl FeeBumpEnvelope {
    /// Wrap an already-encoded fee-bump envelope.
    pub fn new(envelope_xdr: impl Into<String>) -> Self {
        Self {
            envelope_xdr: envelope_xdr.into(),
        }
    }

    /// The base64 XDR envelope to submit.
    pub fn envelope_xdr(&self) -> &str {
        &self.envelope_xdr
    }
}

/// Options for one submission attempt.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmitOptions {
    /// Skip the memo-required precheck even for memo-less transactions.
    pub skip_memo_check: bool,
}

/// Status of an asynchronously submitted transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AsyncTxStatus {
    /// Validated and queued for inclusion.
    Pending,
    /// The server already has this envelope.
    Duplicate,
    /// The server is shedding load; resubmit later.
    TryAgainLater,
    /// Validation failed.
    Error,
}

/// Body of an asynchronous submission response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AsyncSubmission {
    /// Validation/queueing status.
    pub tx_status: AsyncTxStatus,
    /// Hash of the submitted transaction.
    pub hash: String,
    /// Result XDR, present when validation failed.
    #[serde(default)]
    pub error_result_xdr: Option<String>,
}

/// Successful terminal result of one submission attempt.
///
/// The rejected case is the `Err` side of the submission call;
/// memo-required is deliberately *not* an error, it is the precheck
/// stopping a submission the destination would bounce.
#[derive(Debug)]
pub enum SubmissionOutcome<R> {
    /// The server accepted the envelope.
    Accepted(R),
    /// The precheck found a destination that requires a memo while the
    /// transaction carries none. Produced only by the precheck, never
    /// from a server response.
    MemoRequired {
        /// The account whose flag stopped the scan.
        destination: String,
    },
}

impl<R> SubmissionOutcome<R> {
    /// Whether the envelope was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted(_))
    }

    /// The accepted response, when there is one.
    pub fn accepted(self) -> Option<R> {
        match self {
            SubmissionOutcome::Accepted(response) => Some(response),
            SubmissionOutcome::MemoRequired { .. } => None,
        }
    }
}
