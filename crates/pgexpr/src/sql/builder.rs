use super::into_expr::IntoExpr;
use super::parts::SqlPart;
use crate::dialect::Dialect;
use crate::error::{ExprError, ExprResult};
use crate::ident::{Ident, IntoIdent};
use std::sync::Arc;
use tokio_postgres::types::ToSql;

/// A parameter-safe SQL fragment.
///
/// `Sql` stores SQL pieces and parameters separately and generates placeholders
/// only in [`Sql::to_sql`], so fragments can be nested freely. Cloning is cheap:
/// parameters are shared behind `Arc`.
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct Sql {
    parts: Vec<SqlPart>,
    params: Vec<Arc<dyn ToSql + Sync + Send>>,
}

impl Sql {
    /// Create a new fragment from raw SQL text.
    pub fn new(initial_sql: impl Into<String>) -> Self {
        let initial_sql = initial_sql.into();
        let parts = if initial_sql.is_empty() {
            Vec::new()
        } else {
            vec![SqlPart::Raw(initial_sql)]
        };
        Self {
            parts,
            params: Vec::new(),
        }
    }

    /// Create an empty fragment.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` if the fragment has neither text nor parameters.
    pub fn is_empty(&self) -> bool {
        self.parts.iter().all(|p| match p {
            SqlPart::Raw(s) => s.is_empty(),
            SqlPart::Param => false,
        })
    }

    /// Number of bound parameters.
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Append raw SQL (no parameters).
    pub fn push(&mut self, sql: &str) -> &mut Self {
        if sql.is_empty() {
            return self;
        }

        match self.parts.last_mut() {
            Some(SqlPart::Raw(last)) => last.push_str(sql),
            _ => self.parts.push(SqlPart::Raw(sql.to_string())),
        }
        self
    }

    /// Append a parameter placeholder and bind its value.
    pub fn push_bind<T>(&mut self, value: T) -> &mut Self
    where
        T: ToSql + Sync + Send + 'static,
    {
        self.parts.push(SqlPart::Param);
        self.params.push(Arc::new(value));
        self
    }

    /// Append a comma-separated list of placeholders and bind all values.
    ///
    /// An empty list appends `NULL`.
    pub fn push_bind_list<T>(&mut self, values: impl IntoIterator<Item = T>) -> &mut Self
    where
        T: ToSql + Sync + Send + 'static,
    {
        let mut iter = values.into_iter();
        let Some(first) = iter.next() else {
            return self.push("NULL");
        };

        self.push_bind(first);
        for v in iter {
            self.push(", ");
            self.push_bind(v);
        }
        self
    }

    /// Append another fragment, consuming it.
    pub fn push_sql(&mut self, other: Sql) -> &mut Self {
        let Sql { parts, mut params } = other;
        for part in parts {
            match part {
                SqlPart::Raw(s) => {
                    self.push(&s);
                }
                SqlPart::Param => self.parts.push(SqlPart::Param),
            }
        }
        self.params.append(&mut params);
        self
    }

    /// Append anything convertible into an expression: fragments are embedded,
    /// plain values are bound.
    pub fn push_expr(&mut self, expr: impl IntoExpr) -> &mut Self {
        self.push_sql(expr.into_expr())
    }

    /// Append a string as a quoted SQL literal.
    pub fn push_literal(&mut self, value: &str) -> &mut Self {
        self.push(&super::quote_literal(value))
    }

    /// Append a SQL identifier (schema/table/column) safely.
    ///
    /// Identifiers cannot be parameterized, so the input is parsed and validated
    /// via [`Ident`] instead.
    pub fn push_ident<I>(&mut self, ident: I) -> ExprResult<&mut Self>
    where
        I: IntoIdent,
    {
        let ident = ident.into_ident()?;
        Ok(self.push_ident_ref(&ident))
    }

    /// Append a pre-validated [`Ident`].
    pub fn push_ident_ref(&mut self, ident: &Ident) -> &mut Self {
        match self.parts.last_mut() {
            Some(SqlPart::Raw(last)) => ident.write_sql(last),
            _ => {
                let mut s = String::new();
                ident.write_sql(&mut s);
                self.parts.push(SqlPart::Raw(s));
            }
        }
        self
    }

    /// Join fragments with a raw separator.
    pub fn join<E>(items: impl IntoIterator<Item = E>, separator: &str) -> Sql
    where
        E: IntoExpr,
    {
        let mut out = Sql::empty();
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                out.push(separator);
            }
            out.push_expr(item);
        }
        out
    }

    /// Wrap this fragment: `{prefix}{self}{suffix}`.
    pub fn wrap(self, prefix: &str, suffix: &str) -> Sql {
        let mut out = Sql::new(prefix);
        out.push_sql(self).push(suffix);
        out
    }

    /// Append `::type` to this fragment.
    pub fn cast(mut self, ty: &str) -> Sql {
        self.push("::").push(ty);
        self
    }

    /// Render SQL with PostgreSQL `$1, $2, ...` placeholders.
    pub fn to_sql(&self) -> String {
        self.to_sql_for(Dialect::Postgres)
    }

    /// Render SQL with the placeholder syntax of `dialect`.
    pub fn to_sql_for(&self, dialect: Dialect) -> String {
        // Pre-size: raw text plus a few bytes per placeholder.
        let cap: usize = self
            .parts
            .iter()
            .map(|part| match part {
                SqlPart::Raw(s) => s.len(),
                SqlPart::Param => 4,
            })
            .sum();

        let mut out = String::with_capacity(cap);
        let mut idx = 0;
        for part in &self.parts {
            match part {
                SqlPart::Raw(s) => out.push_str(s),
                SqlPart::Param => {
                    idx += 1;
                    dialect.write_placeholder(&mut out, idx);
                }
            }
        }
        out
    }

    /// Parameter refs compatible with `tokio-postgres`.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.params
            .iter()
            .map(|p| p.as_ref() as &(dyn ToSql + Sync))
            .collect()
    }

    /// Check that every placeholder has exactly one bound value.
    pub fn validate(&self) -> ExprResult<()> {
        let placeholder_count = self
            .parts
            .iter()
            .filter(|p| matches!(p, SqlPart::Param))
            .count();

        if placeholder_count != self.params.len() {
            let params_len = self.params.len();
            return Err(ExprError::Validation(format!(
                "Sql: placeholders({placeholder_count}) != params({params_len})"
            )));
        }
        Ok(())
    }

    /// Append `LIMIT $n` with a bound parameter.
    pub fn limit(&mut self, n: i64) -> &mut Self {
        self.push(" LIMIT ").push_bind(n)
    }

    /// Append `OFFSET $n` with a bound parameter.
    pub fn offset(&mut self, n: i64) -> &mut Self {
        self.push(" OFFSET ").push_bind(n)
    }

    /// Append `LIMIT $n OFFSET $m` with bound parameters.
    pub fn limit_offset(&mut self, limit: i64, offset: i64) -> &mut Self {
        self.push(" LIMIT ")
            .push_bind(limit)
            .push(" OFFSET ")
            .push_bind(offset)
    }

    /// Bind a parameter and return `self` (consuming version of [`Sql::push_bind`]).
    pub fn bind<T>(mut self, value: T) -> Self
    where
        T: ToSql + Sync + Send + 'static,
    {
        self.push_bind(value);
        self
    }

    /// Append raw SQL and return `self` (consuming version of [`Sql::push`]).
    pub fn raw(mut self, sql: &str) -> Self {
        self.push(sql);
        self
    }
}
