//! Typed filter expressions compiled to parameterized SQL.

use crate::plan::OperationPlan;
use crate::types::{OldValue, Scalar};

/// Comparison applied to a single column.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOp {
    /// Column equals the value.
    Eq(Scalar),
    /// Column is any of the listed values.
    In(Vec<Scalar>),
}

/// One column comparison inside the candidate filter.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFilter {
    /// Data-table column the comparison reads.
    pub column: String,
    /// Comparison operator and operand(s).
    pub op: FilterOp,
}

impl ColumnFilter {
    /// Derives the per-column prior-value comparisons from a plan.
    pub fn from_plan(plan: &OperationPlan) -> Vec<Self> {
        plan.iter()
            .map(|(column, entry)| {
                let op = match &entry.old {
                    OldValue::One(value) => FilterOp::Eq(value.clone()),
                    OldValue::Many(set) => FilterOp::In(set.clone()),
                };
                Self {
                    column: column.clone(),
                    op,
                }
            })
            .collect()
    }
}

/// A SQL fragment plus the parameters it binds, in placeholder order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    /// Fragment text with `?` placeholders.
    pub sql: String,
    /// Values bound to the placeholders, in order.
    pub params: Vec<Scalar>,
}

/// Renders `n` comma-separated placeholders.
pub fn placeholders(n: usize) -> String {
    let mut out = String::with_capacity(n * 3);
    for i in 0..n {
        if i > 0 {
            out.push_str(", ");
        }
        out.push('?');
    }
    out
}

/// Compiles an OR across the given column comparisons.
///
/// Values travel as bound parameters; only validated column identifiers are
/// spliced into the text. Callers must not pass an empty filter list or an
/// empty `In` set, both of which would render a clause the backend cannot
/// parse; plan validation rules them out upstream.
pub fn compile_disjunction(filters: &[ColumnFilter]) -> Fragment {
    let mut sql = String::new();
    let mut params = Vec::new();
    for (i, filter) in filters.iter().enumerate() {
        if i > 0 {
            sql.push_str(" OR ");
        }
        match &filter.op {
            FilterOp::Eq(value) => {
                sql.push_str(&filter.column);
                sql.push_str(" = ?");
                params.push(value.clone());
            }
            FilterOp::In(set) => {
                sql.push_str(&filter.column);
                sql.push_str(" IN (");
                sql.push_str(&placeholders(set.len()));
                sql.push(')');
                params.extend(set.iter().cloned());
            }
        }
    }
    Fragment { sql, params }
}
