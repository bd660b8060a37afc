//! Parameter-safe SQL fragments.
//!
//! Every helper in this crate returns a [`Sql`] fragment: SQL text pieces plus the
//! values bound into it. Fragments compose without tracking placeholder indices;
//! `$1, $2, ...` are assigned only when the outermost fragment is rendered.
//!
//! # Example
//!
//! ```ignore
//! use pgexpr::{sql, expr};
//!
//! let mut q = sql("SELECT ");
//! q.push_sql(expr::coalesce([sql("nickname"), sql("username")]))
//!     .push(" FROM users WHERE id = ")
//!     .push_bind(42_i64);
//!
//! assert_eq!(q.to_sql(), "SELECT coalesce(nickname, username) FROM users WHERE id = $1");
//! ```

mod builder;
mod into_expr;
mod parts;

#[cfg(test)]
mod tests;

pub use builder::Sql;
pub use into_expr::IntoExpr;

use tokio_postgres::types::ToSql;

/// Start building a SQL fragment from raw text.
pub fn sql(initial_sql: impl Into<String>) -> Sql {
    Sql::new(initial_sql)
}

/// A fragment holding a single bound parameter.
pub fn bind<T>(value: T) -> Sql
where
    T: ToSql + Sync + Send + 'static,
{
    let mut s = Sql::empty();
    s.push_bind(value);
    s
}

/// Quote a string as a SQL literal (`'it''s'`).
///
/// Assumes `standard_conforming_strings = on` (the PostgreSQL default), so
/// backslashes are not escape characters.
pub fn quote_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        if ch == '\'' {
            out.push('\'');
        }
        out.push(ch);
    }
    out.push('\'');
    out
}
