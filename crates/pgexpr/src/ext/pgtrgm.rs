//! `pg_trgm` similarity operators.

use super::binary_op;
use crate::expr::call;
use crate::sql::{IntoExpr, Sql};

/// `a % b`: similarity above `pg_trgm.similarity_threshold`.
pub fn similar(a: impl IntoExpr, b: impl IntoExpr) -> Sql {
    binary_op(a, "%", b)
}

/// `a <% b`: word similarity above `pg_trgm.word_similarity_threshold`.
pub fn word_similar(a: impl IntoExpr, b: impl IntoExpr) -> Sql {
    binary_op(a, "<%", b)
}

/// `a <<% b`: strict word similarity above
/// `pg_trgm.strict_word_similarity_threshold`.
pub fn strict_word_similar(a: impl IntoExpr, b: impl IntoExpr) -> Sql {
    binary_op(a, "<<%", b)
}

/// `a <-> b`: one minus `similarity(a, b)`.
pub fn trigram_distance(a: impl IntoExpr, b: impl IntoExpr) -> Sql {
    binary_op(a, "<->", b)
}

/// `similarity(a, b)`
pub fn similarity(a: impl IntoExpr, b: impl IntoExpr) -> Sql {
    call("similarity", [a.into_expr(), b.into_expr()])
}
