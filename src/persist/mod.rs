//! Storage gateway contract and SQLite implementation.

pub mod sqlite;

use crate::types::Scalar;

/// One result row: selected expressions in statement order, NULL as `None`.
pub type Row = Vec<Option<Scalar>>;

/// Gateway failure classes.
///
/// `Connect` is deliberately distinct from an empty result so callers can
/// tell an unreachable store apart from a legitimately empty one.
#[derive(Debug)]
pub enum GatewayError {
    /// A database session could not be opened.
    Connect(rusqlite::Error),
    /// A statement failed to prepare or execute.
    Query(rusqlite::Error),
    /// A fetched value could not be represented as a [`Scalar`] row.
    Decode(String),
}

/// Result alias for gateway calls.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Parameterized read/write access to the relational backend.
///
/// Every call owns its connection for the duration of one statement; no
/// connection is held across calls.
pub trait RowStore {
    /// Runs `sql` and returns at most one row.
    fn fetch_one(&self, sql: &str, params: &[Scalar]) -> GatewayResult<Option<Row>>;

    /// Runs `sql` and returns all matching rows.
    fn fetch_all(&self, sql: &str, params: &[Scalar]) -> GatewayResult<Vec<Row>>;

    /// Runs a write statement and returns the affected row count.
    fn execute(&self, sql: &str, params: &[Scalar]) -> GatewayResult<usize>;
}
