//! Operation plan validation.

use std::collections::BTreeMap;
use std::collections::btree_map;

use tracing::warn;

use crate::document::Payload;
use crate::types::{OldValue, Scalar};

/// One validated field change: rewrite `old` matches to `new`.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanEntry {
    /// Prior value(s) an object must currently hold.
    pub old: OldValue,
    /// Value written in their place.
    pub new: Scalar,
}

/// Validated mapping of data-table column to requested change.
///
/// Derived from a payload's `operation_details`, scoped to one invocation,
/// never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperationPlan {
    entries: BTreeMap<String, PlanEntry>,
}

impl OperationPlan {
    /// Builds a plan from a payload, dropping malformed entries.
    ///
    /// An entry survives only when `old` and `new` are both present and
    /// non-empty and the column key is a plain identifier usable in a
    /// statement. Dropped entries are logged, never an error; an empty plan
    /// means "no change requested" and downstream stages treat it as a
    /// no-op.
    pub fn from_payload(payload: &Payload) -> Self {
        let mut entries = BTreeMap::new();
        for (column, detail) in &payload.operation_details {
            if !is_plain_identifier(column) {
                warn!(%column, "dropping change with unusable column name");
                continue;
            }
            let old = match &detail.old {
                Some(old) if !old.is_empty() => old.clone(),
                _ => {
                    warn!(%column, "dropping change with missing or empty old value");
                    continue;
                }
            };
            let new = match &detail.new {
                Some(new) if !new.is_blank() => new.clone(),
                _ => {
                    warn!(%column, "dropping change with missing or empty new value");
                    continue;
                }
            };
            entries.insert(column.clone(), PlanEntry { old, new });
        }
        Self { entries }
    }

    /// Returns true when no valid change was requested.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of validated column changes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Looks up the change requested for `column`.
    pub fn get(&self, column: &str) -> Option<&PlanEntry> {
        self.entries.get(column)
    }

    /// Column names in deterministic order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates column/change pairs in deterministic order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, PlanEntry> {
        self.entries.iter()
    }
}

/// Returns true when `name` can be spliced into a statement as a column
/// identifier. Values are always bound as parameters; identifiers cannot
/// be, so anything else is rejected during validation.
pub fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
