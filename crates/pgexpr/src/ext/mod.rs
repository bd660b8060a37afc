//! Helpers for PostgreSQL extensions: `cube`, PostGIS, `pgcrypto` (nanoid),
//! `fuzzystrmatch` and `pg_trgm`.

pub mod cube;
pub mod fuzzystrmatch;
pub mod pgcrypto;
pub mod pgtrgm;
pub mod postgis;

use crate::sql::{IntoExpr, Sql};

/// `left op right`
pub(crate) fn binary_op(left: impl IntoExpr, op: &str, right: impl IntoExpr) -> Sql {
    let mut out = left.into_expr();
    out.push(" ").push(op).push(" ").push_expr(right);
    out
}
