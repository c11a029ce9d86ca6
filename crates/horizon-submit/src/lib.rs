#![deny(missing_docs)]

//! # horizon-submit
//!
//! Transaction submission pipeline for Horizon: the memo-required
//! precheck, synchronous and asynchronous posting, and classification
//! of every outcome into a typed result.
//!
//! Transactions cross into this crate as opaque values behind the
//! [`SignedTransaction`] trait - an encoded envelope, a memo, and the
//! ordered operation intents. Nothing here knows the wire format.
//!
//! # Example
//!
//! ```no_run
//! use horizon_client::{HorizonClient, HorizonConfig};
//! use horizon_submit::{
//!     Envelope, IntentKind, Memo, OperationIntent, SubmissionOutcome, Submitter,
//! };
//!
//! # async fn example() -> Result<(), horizon_submit::SubmitError> {
//! let submitter = Submitter::new(HorizonClient::new(HorizonConfig::default()));
//!
//! let tx = Envelope::new(
//!     "AAAAAgAAAAB...",
//!     Memo::None,
//!     vec![OperationIntent::new(
//!         IntentKind::Payment,
//!         "GBVFTZL5HIPT4PFQVTZVIWR77V7LWYCXU4CLYWWHHOEXB64XPG5LDMTU",
//!     )],
//! );
//!
//! match submitter.submit(&tx).await? {
//!     SubmissionOutcome::Accepted(resp) => println!("in ledger {}", resp.ledger),
//!     SubmissionOutcome::MemoRequired { destination } => {
//!         println!("{destination} requires a memo; attach one and re-sign")
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;

mod precheck;

pub use client::Submitter;
pub use error::SubmitError;
pub use types::{
    AsyncSubmission, AsyncTxStatus, Envelope, EnvelopeError, FeeBumpEnvelope, IntentKind, Memo,
    OperationIntent, SignedTransaction, SubmissionOutcome, SubmitOptions,
};
