//! Queue document and payload wire types.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::types::{DocId, ObjectId, OldValue, Scalar};

/// One raw `operation_details` entry before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DetailEntry {
    /// Prior value(s) that make an object eligible for the change.
    #[serde(default)]
    pub old: Option<OldValue>,
    /// Replacement value written to eligible objects.
    #[serde(default)]
    pub new: Option<Scalar>,
}

/// Decoded `document_data` payload of a queue document.
///
/// Producers embed additional bookkeeping keys alongside these two; anything
/// not named here is ignored on decode. Both keys default to empty when
/// absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Payload {
    /// Root object identifiers the document applies to.
    #[serde(default)]
    pub objects: Vec<ObjectId>,
    /// Requested field changes, keyed by data-table column.
    #[serde(default)]
    pub operation_details: BTreeMap<String, DetailEntry>,
}

/// A transfer document selected from the queue.
#[derive(Debug, Clone)]
pub struct Document {
    /// Queue row identifier.
    pub id: DocId,
    /// Decoded payload.
    pub payload: Payload,
}
