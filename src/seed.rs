//! Demo schema and fixture seeding.
//!
//! Mirrors the upstream producer closely enough to exercise the pipeline:
//! root objects own children that inherit their owner, documents request
//! owner handovers and occasional status changes, and one non-transfer
//! document sits in the queue to prove the type filter. Deterministic so
//! runs can be compared.

use serde_json::json;
use tracing::info;

use crate::persist::{GatewayResult, RowStore};
use crate::types::Scalar;

/// Owner pool used by the demo fixtures.
pub const OWNERS: [&str; 4] = ["owner_1", "owner_2", "owner_3", "owner_4"];
/// Status pool used by the demo fixtures.
pub const STATUSES: [i64; 6] = [1, 2, 3, 4, 10, 13];

/// Row counts written by [`seed_demo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    /// Root objects inserted.
    pub roots: usize,
    /// Child objects inserted.
    pub children: usize,
    /// Queue documents inserted.
    pub documents: usize,
}

/// Clears both tables and fills them with deterministic demo fixtures.
///
/// Roots cycle through the owner and status pools; children inherit their
/// root's owner. Every owner gets one transfer document handing its objects
/// to the next owner in the pool, every second document also requests a
/// status change, and one non-transfer document is queued last.
pub fn seed_demo(
    store: &dyn RowStore,
    roots: usize,
    children_per_root: usize,
) -> GatewayResult<SeedSummary> {
    store.execute("DELETE FROM data", &[])?;
    store.execute("DELETE FROM documents", &[])?;

    let mut children = 0;
    for r in 0..roots {
        let root_id = format!("p_{r}");
        let owner = OWNERS[r % OWNERS.len()];
        insert_object(store, &root_id, None, 1, owner, STATUSES[r % STATUSES.len()])?;
        for c in 0..children_per_root {
            let child_id = format!("ch_{r}_{c}");
            insert_object(
                store,
                &child_id,
                Some(&root_id),
                0,
                owner,
                STATUSES[(r + c) % STATUSES.len()],
            )?;
            children += 1;
        }
    }

    let mut documents = 0;
    for (d, owner) in OWNERS.iter().enumerate() {
        let objects: Vec<String> = (0..roots)
            .filter(|r| OWNERS[r % OWNERS.len()] == *owner)
            .map(|r| format!("p_{r}"))
            .collect();
        let next_owner = OWNERS[(d + 1) % OWNERS.len()];
        let mut details = json!({
            "owner": { "old": owner, "new": next_owner }
        });
        if d % 2 == 0 {
            details["status"] = json!({
                "old": STATUSES[d % STATUSES.len()],
                "new": STATUSES[(d + 1) % STATUSES.len()],
            });
        }
        let payload = json!({ "objects": objects, "operation_details": details });
        insert_document(
            store,
            &format!("doc_{d}"),
            d,
            "transfer_document",
            &payload.to_string(),
        )?;
        documents += 1;
    }

    // The selector must never pick this one up.
    let decoy = json!({ "objects": [], "operation_details": {} });
    insert_document(
        store,
        "doc_decoy",
        documents,
        "not_transfer_document",
        &decoy.to_string(),
    )?;
    documents += 1;

    info!(roots, children, documents, "seeded demo fixtures");
    Ok(SeedSummary {
        roots,
        children,
        documents,
    })
}

fn insert_object(
    store: &dyn RowStore,
    object: &str,
    parent: Option<&str>,
    level: i64,
    owner: &str,
    status: i64,
) -> GatewayResult<()> {
    match parent {
        Some(parent) => store.execute(
            "INSERT INTO data (object, parent, level, owner, status) VALUES (?, ?, ?, ?, ?)",
            &[
                Scalar::from(object),
                Scalar::from(parent),
                Scalar::Int(level),
                Scalar::from(owner),
                Scalar::Int(status),
            ],
        )?,
        None => store.execute(
            "INSERT INTO data (object, parent, level, owner, status) VALUES (?, NULL, ?, ?, ?)",
            &[
                Scalar::from(object),
                Scalar::Int(level),
                Scalar::from(owner),
                Scalar::Int(status),
            ],
        )?,
    };
    Ok(())
}

fn insert_document(
    store: &dyn RowStore,
    doc_id: &str,
    order: usize,
    document_type: &str,
    document_data: &str,
) -> GatewayResult<()> {
    let received_at = format!(
        "2026-01-01T{:02}:{:02}:{:02}Z",
        order / 3600,
        (order / 60) % 60,
        order % 60
    );
    store.execute(
        "INSERT INTO documents (doc_id, received_at, document_type, document_data, processed_at) \
         VALUES (?, ?, ?, ?, NULL)",
        &[
            Scalar::from(doc_id),
            Scalar::Text(received_at),
            Scalar::from(document_type),
            Scalar::from(document_data),
        ],
    )?;
    Ok(())
}
