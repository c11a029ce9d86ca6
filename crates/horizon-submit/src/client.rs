//! The transaction submission pipeline.

use tracing::debug;

use horizon_client::{HorizonClient, HorizonError, HttpErrorKind};
use horizon_resources::{DecodeError, Transaction};

use crate::error::SubmitError;
use crate::precheck;
use crate::types::{
    AsyncSubmission, FeeBumpEnvelope, SignedTransaction, SubmissionOutcome, SubmitOptions,
};

/// Submits signed transaction envelopes to a Horizon server.
///
/// One attempt per call, no internal retries; retry policy belongs to
/// the caller.
#[derive(Debug, Clone)]
pub struct Submitter {
    client: HorizonClient,
}

impl Submitter {
    /// A submitter posting through the given client.
    pub fn new(client: HorizonClient) -> Self {
        Self { client }
    }

    /// Submit synchronously: the server waits for ledger inclusion and
    /// the accepted response is the full transaction resource.
    pub async fn submit<T: SignedTransaction>(
        &self,
        tx: &T,
    ) -> Result<SubmissionOutcome<Transaction>, SubmitError> {
        self.submit_with_options(tx, SubmitOptions::default()).await
    }

    /// [`Submitter::submit`] with explicit options.
    pub async fn submit_with_options<T: SignedTransaction>(
        &self,
        tx: &T,
        options: SubmitOptions,
    ) -> Result<SubmissionOutcome<Transaction>, SubmitError> {
        // Resolve the envelope first: an unencodable envelope fails
        // before any network traffic, the precheck included.
        let envelope = tx.envelope_xdr()?;
        if let Some(destination) = self.run_precheck(tx, options).await? {
            return Ok(SubmissionOutcome::MemoRequired { destination });
        }
        let response = self.post_sync(&envelope).await?;
        Ok(SubmissionOutcome::Accepted(response))
    }

    /// Submit asynchronously: the server validates and queues without
    /// waiting for inclusion.
    pub async fn submit_async<T: SignedTransaction>(
        &self,
        tx: &T,
    ) -> Result<SubmissionOutcome<AsyncSubmission>, SubmitError> {
        self.submit_async_with_options(tx, SubmitOptions::default())
            .await
    }

    /// [`Submitter::submit_async`] with explicit options.
    pub async fn submit_async_with_options<T: SignedTransaction>(
        &self,
        tx: &T,
        options: SubmitOptions,
    ) -> Result<SubmissionOutcome<AsyncSubmission>, SubmitError> {
        let envelope = tx.envelope_xdr()?;
        if let Some(destination) = self.run_precheck(tx, options).await? {
            return Ok(SubmissionOutcome::MemoRequired { destination });
        }
        let response = self.post_async(&envelope).await?;
        Ok(SubmissionOutcome::Accepted(response))
    }

    /// Submit a fee-bump envelope synchronously.
    ///
    /// The accepted transaction resource re-wraps the inner
    /// transaction's result. No precheck runs: a fee-bump carries no
    /// memo or operation set of its own.
    pub async fn submit_fee_bump(
        &self,
        fee_bump: &FeeBumpEnvelope,
    ) -> Result<Transaction, SubmitError> {
        self.post_sync(fee_bump.envelope_xdr()).await
    }

    /// Submit a fee-bump envelope asynchronously.
    pub async fn submit_fee_bump_async(
        &self,
        fee_bump: &FeeBumpEnvelope,
    ) -> Result<AsyncSubmission, SubmitError> {
        self.post_async(fee_bump.envelope_xdr()).await
    }

    async fn run_precheck<T: SignedTransaction>(
        &self,
        tx: &T,
        options: SubmitOptions,
    ) -> Result<Option<String>, SubmitError> {
        if options.skip_memo_check || tx.memo().is_present() {
            return Ok(None);
        }
        precheck::first_memo_required_destination(&self.client, tx.operations())
            .await
            .map_err(SubmitError::from)
    }

    async fn post_sync(&self, envelope: &str) -> Result<Transaction, SubmitError> {
        let url = self.client.endpoint("transactions");
        let (status, body) = self.client.post_form_raw(&url, &[("tx", envelope)]).await?;
        if !is_success(status) {
            return Err(SubmitError::Horizon(HorizonError::from_status(
                status, &body,
            )));
        }
        decode_body(&body)
    }

    async fn post_async(&self, envelope: &str) -> Result<AsyncSubmission, SubmitError> {
        let url = self.client.endpoint("transactions_async");
        let (status, body) = self.client.post_form_raw(&url, &[("tx", envelope)]).await?;
        if is_success(status) {
            return decode_body(&body);
        }

        let err = HorizonError::from_status(status, &body);
        // Duplicate, bad-request, and stale-history responses still
        // carry a full structured async-result body. When that body
        // decodes, the submission is reported as accepted: resubmitting
        // an envelope the server already has does not fail the caller's
        // intent.
        if let HorizonError::Http {
            kind: HttpErrorKind::Duplicate | HttpErrorKind::BadRequest | HttpErrorKind::StaleHistory,
            ..
        } = &err
        {
            if let Ok(submission) = serde_json::from_slice::<AsyncSubmission>(&body) {
                debug!(status, hash = %submission.hash, "async rejection carried a structured result");
                return Ok(submission);
            }
        }
        Err(SubmitError::Horizon(err))
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn decode_body<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T, SubmitError> {
    serde_json::from_slice(body)
        .map_err(|e| SubmitError::Horizon(HorizonError::Decode(DecodeError::Malformed(e))))
}
