//! `CASE WHEN ... END` expressions.

use crate::sql::{IntoExpr, Sql};

/// Build `CASE WHEN c1 THEN r1 ... [ELSE fallback] END`.
///
/// `None` entries are skipped, so branches can be toggled inline. Branch order
/// is kept: the first matching condition wins.
///
/// With no branches the fallback alone is returned, and with no fallback
/// either the result is `None`: there is no expression to emit, and callers
/// should leave it out rather than substitute `NULL`.
///
/// ```ignore
/// use pgexpr::{expr::cases, sql};
///
/// let grade = cases(
///     [
///         Some((sql("score >= 90"), "A")),
///         None,
///         Some((sql("score >= 80"), "B")),
///     ],
///     Some("C"),
/// );
/// // CASE WHEN score >= 90 THEN $1::text WHEN score >= 80 THEN $2::text ELSE $3::text END
/// ```
pub fn cases<C, R, F>(conditionals: impl IntoIterator<Item = Option<(C, R)>>, fallback: Option<F>) -> Option<Sql>
where
    C: IntoExpr,
    R: IntoExpr,
    F: IntoExpr,
{
    let mut case = Case::new();
    for (condition, result) in conditionals.into_iter().flatten() {
        case = case.when(condition, result);
    }
    if let Some(fallback) = fallback {
        case = case.otherwise(fallback);
    }
    case.build()
}

/// Fluent builder for `CASE` expressions.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct Case {
    branches: Vec<(Sql, Sql)>,
    fallback: Option<Sql>,
}

impl Case {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `WHEN condition THEN result` branch.
    pub fn when(mut self, condition: impl IntoExpr, result: impl IntoExpr) -> Self {
        self.branches.push((condition.into_expr(), result.into_expr()));
        self
    }

    /// Set the `ELSE` value.
    pub fn otherwise(mut self, fallback: impl IntoExpr) -> Self {
        self.fallback = Some(fallback.into_expr());
        self
    }

    /// Returns `true` if no branch has been added.
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    /// Render the expression. See [`cases`] for the empty cases.
    pub fn build(self) -> Option<Sql> {
        if self.branches.is_empty() {
            return self.fallback;
        }

        let mut out = Sql::new("CASE");
        for (condition, result) in self.branches {
            out.push(" WHEN ").push_sql(condition).push(" THEN ").push_sql(result);
        }
        if let Some(fallback) = self.fallback {
            out.push(" ELSE ").push_sql(fallback);
        }
        out.push(" END");
        Some(out)
    }
}
