//! Selection of the next unprocessed transfer document.

use tracing::info;

use crate::document::{Document, Payload};
use crate::persist::RowStore;
use crate::types::Scalar;

use super::pipeline::ProcessError;

/// Document type recognized by the selector.
pub const TRANSFER_DOCUMENT_TYPE: &str = "transfer_document";

const SELECT_NEXT: &str = "\
SELECT doc_id, document_data FROM documents \
WHERE document_type = ? AND processed_at IS NULL \
ORDER BY received_at ASC LIMIT 1";

/// Fetches the oldest unprocessed transfer document, if any.
///
/// Read-only; the row is stamped only after the applier has run. Ties on
/// `received_at` are broken arbitrarily by the backend. Returns `Ok(None)`
/// when the queue holds no eligible document.
pub fn select_next_document(store: &dyn RowStore) -> Result<Option<Document>, ProcessError> {
    let params = [Scalar::Text(TRANSFER_DOCUMENT_TYPE.to_string())];
    let Some(row) = store.fetch_one(SELECT_NEXT, &params)? else {
        return Ok(None);
    };

    let id = match row.first() {
        Some(Some(Scalar::Text(id))) => id.clone(),
        _ => {
            return Err(ProcessError::Row(
                "documents row carries no doc_id".to_string(),
            ));
        }
    };
    let raw = match row.get(1) {
        Some(Some(Scalar::Text(raw))) => raw.clone(),
        _ => {
            return Err(ProcessError::Row(
                "documents row carries no document_data".to_string(),
            ));
        }
    };

    let payload: Payload = serde_json::from_str(&raw).map_err(|source| ProcessError::Payload {
        doc_id: id.clone(),
        source,
    })?;
    info!(doc_id = %id, "selected transfer document");
    Ok(Some(Document { id, payload }))
}
