//! The memo-required precheck (SEP-29).
//!
//! Before a memo-less transaction is posted, every distinct destination
//! of its payment-like operations is resolved; an account carrying the
//! `config.memo_required` data entry stops the submission.

use std::collections::HashSet;

use tracing::debug;

use horizon_client::{HorizonClient, HorizonError};

use crate::types::OperationIntent;

/// Destinations of payment-like operations, in first-occurrence order,
/// deduplicated. Muxed (`M...`) destinations embed their own id and are
/// exempt from the check.
pub(crate) fn payment_destinations(operations: &[OperationIntent]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut destinations = Vec::new();
    for op in operations {
        if !op.kind.is_payment_like() {
            continue;
        }
        let Some(dest) = op.destination.as_deref() else {
            continue;
        };
        if dest.starts_with('M') {
            continue;
        }
        if seen.insert(dest) {
            destinations.push(dest);
        }
    }
    destinations
}

/// Scan the destinations for the memo-required flag.
///
/// Returns the first flagged account, or `None` when every destination
/// is clear. A destination that does not exist is clear by definition;
/// any other lookup failure aborts the scan.
pub(crate) async fn first_memo_required_destination(
    client: &HorizonClient,
    operations: &[OperationIntent],
) -> Result<Option<String>, HorizonError> {
    for destination in payment_destinations(operations) {
        match client.account(destination).await {
            Ok(account) if account.requires_memo() => {
                debug!(destination, "destination requires a memo");
                return Ok(Some(destination.to_string()));
            }
            Ok(_) => {}
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e),
        }
    }
    Ok(None)
}
