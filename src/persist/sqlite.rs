//! Connection-per-call SQLite gateway.

use std::path::{Path, PathBuf};

use rusqlite::types::Value;
use rusqlite::{Connection, params_from_iter};
use tracing::error;

use crate::types::Scalar;

use super::{GatewayError, GatewayResult, Row, RowStore};

/// SQLite implementation of [`RowStore`].
///
/// Holds only the database path; each call opens a session, runs one
/// statement, and releases the session again.
#[derive(Debug, Clone)]
pub struct SqliteGateway {
    path: PathBuf,
}

impl SqliteGateway {
    /// Creates a gateway for the database at `path`.
    ///
    /// Nothing is opened here; the first statement opens the first session.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Applies the bundled schema, creating missing tables and indexes.
    pub fn ensure_schema(&self) -> GatewayResult<()> {
        let conn = self.connect()?;
        conn.execute_batch(include_str!("schema.sql"))
            .map_err(GatewayError::Query)
    }

    fn connect(&self) -> GatewayResult<Connection> {
        Connection::open(&self.path).map_err(|err| {
            error!(path = %self.path.display(), %err, "could not open database session");
            GatewayError::Connect(err)
        })
    }
}

impl RowStore for SqliteGateway {
    fn fetch_one(&self, sql: &str, params: &[Scalar]) -> GatewayResult<Option<Row>> {
        let conn = self.connect()?;
        let mut rows = run_fetch(&conn, sql, params)?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.remove(0))
        })
    }

    fn fetch_all(&self, sql: &str, params: &[Scalar]) -> GatewayResult<Vec<Row>> {
        let conn = self.connect()?;
        run_fetch(&conn, sql, params)
    }

    fn execute(&self, sql: &str, params: &[Scalar]) -> GatewayResult<usize> {
        let conn = self.connect()?;
        conn.execute(sql, params_from_iter(params.iter()))
            .map_err(GatewayError::Query)
    }
}

fn run_fetch(conn: &Connection, sql: &str, params: &[Scalar]) -> GatewayResult<Vec<Row>> {
    let mut stmt = conn.prepare(sql).map_err(GatewayError::Query)?;
    let column_count = stmt.column_count();
    let mut rows = stmt
        .query(params_from_iter(params.iter()))
        .map_err(GatewayError::Query)?;

    let mut out = Vec::new();
    while let Some(row) = rows.next().map_err(GatewayError::Query)? {
        let mut decoded = Vec::with_capacity(column_count);
        for i in 0..column_count {
            let value: Value = row.get(i).map_err(GatewayError::Query)?;
            decoded.push(decode_value(value)?);
        }
        out.push(decoded);
    }
    Ok(out)
}

fn decode_value(value: Value) -> GatewayResult<Option<Scalar>> {
    Ok(match value {
        Value::Null => None,
        Value::Integer(i) => Some(Scalar::Int(i)),
        Value::Real(r) => Some(Scalar::Float(r)),
        Value::Text(s) => Some(Scalar::Text(s)),
        Value::Blob(_) => {
            return Err(GatewayError::Decode(
                "blob columns are outside the row contract".to_string(),
            ));
        }
    })
}
