//! Stage orchestration for one document-processing invocation.

use tracing::info;

use crate::persist::{GatewayError, RowStore};
use crate::plan::OperationPlan;
use crate::types::DocId;

use super::applier::{apply_updates, mark_processed};
use super::mutation::{compute_updates, fetch_candidates};
use super::selector::select_next_document;

/// Failure surfaced from one invocation.
#[derive(Debug)]
pub enum ProcessError {
    /// The storage gateway failed.
    Gateway(GatewayError),
    /// A selected document carried an undecodable payload.
    Payload {
        /// Offending document.
        doc_id: DocId,
        /// Decode failure.
        source: serde_json::Error,
    },
    /// A fetched row did not match the statement's shape.
    Row(String),
}

impl From<GatewayError> for ProcessError {
    fn from(value: GatewayError) -> Self {
        Self::Gateway(value)
    }
}

/// Result of one invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A document was selected, applied, and stamped.
    Processed {
        /// The processed document.
        doc_id: DocId,
        /// Rows rewritten across all column updates.
        rows_updated: usize,
    },
    /// The queue holds no unprocessed transfer document.
    NoDocument,
}

/// Processes the next queued transfer document end to end.
///
/// Each stage's output feeds the next explicitly; an unmet precondition
/// (empty plan, empty root list, no matching candidates) short-circuits the
/// remaining mutation stages but still stamps the document, so the queue
/// always drains. A found document yields `Processed` even when zero rows
/// matched; `NoDocument` means the queue is empty. Errors propagate to the
/// caller, leaving the document unstamped.
pub fn process_next(store: &dyn RowStore) -> Result<Outcome, ProcessError> {
    let Some(document) = select_next_document(store)? else {
        info!("no unprocessed transfer document in the queue");
        return Ok(Outcome::NoDocument);
    };

    let plan = OperationPlan::from_payload(&document.payload);
    let rows_updated = if plan.is_empty() {
        info!(doc_id = %document.id, "document requests no valid change");
        0
    } else if document.payload.objects.is_empty() {
        info!(doc_id = %document.id, "document names no root objects");
        0
    } else {
        let candidates = fetch_candidates(store, &document.payload.objects, &plan)?;
        if candidates.is_empty() {
            info!(doc_id = %document.id, "no candidate objects to update");
            0
        } else {
            let updates = compute_updates(&candidates, &plan);
            apply_updates(store, &updates, &plan)?
        }
    };

    mark_processed(store, &document.id)?;
    info!(doc_id = %document.id, rows_updated, "transfer document processed");
    Ok(Outcome::Processed {
        doc_id: document.id,
        rows_updated,
    })
}
