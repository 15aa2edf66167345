//! Candidate expansion and per-column mutation partitioning.

use std::collections::BTreeMap;

use hashbrown::HashSet;
use tracing::{info, warn};

use crate::filter::{self, ColumnFilter};
use crate::persist::{GatewayResult, RowStore};
use crate::plan::OperationPlan;
use crate::types::{ObjectId, Scalar};

/// One candidate object with the current value of every plan column.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRow {
    /// Object identifier.
    pub object: ObjectId,
    /// Current value per plan column, `None` for NULL.
    pub values: BTreeMap<String, Option<Scalar>>,
}

/// Update sets produced by the mutation computer, keyed by column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MutationSet {
    per_column: BTreeMap<String, Vec<ObjectId>>,
}

impl MutationSet {
    /// True when no object qualified for any column.
    pub fn is_empty(&self) -> bool {
        self.per_column.is_empty()
    }

    /// Iterates columns and their qualifying objects in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ObjectId])> {
        self.per_column
            .iter()
            .map(|(column, ids)| (column.as_str(), ids.as_slice()))
    }

    /// Objects qualifying for `column`.
    pub fn objects_for(&self, column: &str) -> &[ObjectId] {
        self.per_column.get(column).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Fetches every candidate row the plan's filter could apply to.
///
/// Expansion and pre-filtering are fused into one statement: a row is a
/// candidate when its identifier or its parent is among `roots`, and the OR
/// across plan columns keeps only rows matching at least one declared old
/// value. The OR is coarse and may over-select; [`compute_updates`] is the
/// exact per-column gate. `roots` and the plan must be non-empty; the
/// pipeline short-circuits before this point otherwise, so no unbounded or
/// empty IN-list is ever issued.
pub fn fetch_candidates(
    store: &dyn RowStore,
    roots: &[ObjectId],
    plan: &OperationPlan,
) -> GatewayResult<Vec<CandidateRow>> {
    let mut seen = HashSet::new();
    let roots: Vec<&ObjectId> = roots.iter().filter(|id| seen.insert(id.as_str())).collect();

    let filters = ColumnFilter::from_plan(plan);
    let filter = filter::compile_disjunction(&filters);
    let columns: Vec<&str> = plan.columns().collect();
    let scope = filter::placeholders(roots.len());

    let sql = format!(
        "SELECT object, {cols} FROM data \
         WHERE (object IN ({scope}) OR parent IN ({scope})) AND ({filter})",
        cols = columns.join(", "),
        scope = scope,
        filter = filter.sql,
    );

    let mut params: Vec<Scalar> = Vec::with_capacity(roots.len() * 2 + filter.params.len());
    for _ in 0..2 {
        params.extend(roots.iter().map(|id| Scalar::Text((*id).clone())));
    }
    params.extend(filter.params);

    let rows = store.fetch_all(&sql, &params)?;
    let mut candidates = Vec::with_capacity(rows.len());
    for row in rows {
        let mut fields = row.into_iter();
        let object = match fields.next() {
            Some(Some(Scalar::Text(id))) => id,
            _ => {
                warn!("skipping data row with non-text object identifier");
                continue;
            }
        };
        let values = columns.iter().map(|c| c.to_string()).zip(fields).collect();
        candidates.push(CandidateRow { object, values });
    }
    Ok(candidates)
}

/// Partitions candidate objects by the column change that applies to them.
///
/// The SQL pre-filter may over-select a row that matched a different
/// column's old value; the per-column check here is the exact gate. An
/// object may qualify for several independent column changes in the same
/// invocation and then appears in each of their sets. NULL current values
/// never match.
pub fn compute_updates(candidates: &[CandidateRow], plan: &OperationPlan) -> MutationSet {
    let mut per_column: BTreeMap<String, Vec<ObjectId>> = BTreeMap::new();
    for candidate in candidates {
        for (column, entry) in plan.iter() {
            let Some(Some(current)) = candidate.values.get(column) else {
                continue;
            };
            if entry.old.matches(current) {
                per_column
                    .entry(column.clone())
                    .or_default()
                    .push(candidate.object.clone());
            }
        }
    }
    if per_column.is_empty() {
        info!("no candidate object matched a requested change");
    }
    MutationSet { per_column }
}
