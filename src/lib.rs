//! Queued transfer-document processing against a hierarchical object table.
//!
//! A transfer document names root objects and per-column field changes; the
//! pipeline expands the roots to their children, decides per column which
//! rows still hold the declared old value, rewrites them to the new value,
//! and stamps the document processed.
//!
//! # Examples
//!
//! Validating a payload into an operation plan:
//! ```
//! use transferq::{document::Payload, plan::OperationPlan};
//!
//! let payload: Payload = serde_json::from_str(r#"{
//!     "objects": ["p_0"],
//!     "operation_details": {
//!         "owner":  { "old": "owner_3", "new": "owner_4" },
//!         "status": { "old": [1, 2],    "new": 3 },
//!         "broken": { "old": "" }
//!     }
//! }"#).expect("payload");
//!
//! let plan = OperationPlan::from_payload(&payload);
//! assert_eq!(plan.len(), 2);
//! assert!(plan.get("broken").is_none());
//! ```
//!
//! Draining the queue through a SQLite-backed gateway:
//! ```no_run
//! use transferq::{
//!     core::pipeline::{Outcome, process_next},
//!     persist::sqlite::SqliteGateway,
//! };
//!
//! let gateway = SqliteGateway::open("transferq.db");
//! gateway.ensure_schema().expect("schema");
//! while let Ok(Outcome::Processed { doc_id, rows_updated }) = process_next(&gateway) {
//!     println!("{doc_id}: {rows_updated} rows");
//! }
//! ```
#![deny(missing_docs)]

/// Binary-side configuration loading.
pub mod config;
/// Document selection, mutation computation, and application stages.
pub mod core;
/// Queue document and payload wire types.
pub mod document;
/// Typed filter expressions compiled to parameterized SQL.
pub mod filter;
/// Storage gateway contract and SQLite implementation.
pub mod persist;
/// Operation plan validation.
pub mod plan;
/// Demo schema and fixture seeding.
pub mod seed;
/// Shared identifiers and the scalar value domain.
pub mod types;
