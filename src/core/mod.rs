//! Document-to-mutation translation pipeline.

/// Update application and the processed stamp.
pub mod applier;
/// Candidate expansion and per-column mutation partitioning.
pub mod mutation;
/// Stage orchestration and outcome reporting.
pub mod pipeline;
/// Oldest-unprocessed document selection.
pub mod selector;
