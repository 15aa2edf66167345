//! Update application and the processed stamp.

use tracing::info;

use crate::filter::placeholders;
use crate::persist::{GatewayResult, RowStore};
use crate::plan::OperationPlan;
use crate::types::{DocId, Scalar};

use super::mutation::MutationSet;

/// Applies every non-empty column update set with one statement per column.
///
/// Columns are independent; their order carries no meaning. Returns the
/// number of rows the backend reports as rewritten.
pub fn apply_updates(
    store: &dyn RowStore,
    updates: &MutationSet,
    plan: &OperationPlan,
) -> GatewayResult<usize> {
    let mut rewritten = 0;
    for (column, objects) in updates.iter() {
        let Some(entry) = plan.get(column) else {
            continue;
        };
        if objects.is_empty() {
            continue;
        }
        let sql = format!(
            "UPDATE data SET {column} = ? WHERE object IN ({})",
            placeholders(objects.len()),
        );
        let mut params = Vec::with_capacity(objects.len() + 1);
        params.push(entry.new.clone());
        params.extend(objects.iter().map(|id| Scalar::Text(id.clone())));
        let count = store.execute(&sql, &params)?;
        info!(column, rows = count, "applied column update");
        rewritten += count;
    }
    Ok(rewritten)
}

const MARK_PROCESSED: &str =
    "UPDATE documents SET processed_at = datetime('now') WHERE doc_id = ?";

/// Stamps the document processed.
///
/// Once the stamp is written the document is permanently ineligible for
/// re-selection; this is the pipeline's idempotency boundary.
pub fn mark_processed(store: &dyn RowStore, doc_id: &DocId) -> GatewayResult<()> {
    store.execute(MARK_PROCESSED, &[Scalar::Text(doc_id.clone())])?;
    info!(doc_id = %doc_id, "stamped document processed");
    Ok(())
}
