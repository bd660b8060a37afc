//! Parenthesized arithmetic over expressions.

use crate::sql::{IntoExpr, Sql};

fn chain<E: IntoExpr>(values: impl IntoIterator<Item = E>, op: &str) -> Sql {
    Sql::join(values, op).wrap("(", ")")
}

/// `(a + b + ...)`
pub fn add<E: IntoExpr>(values: impl IntoIterator<Item = E>) -> Sql {
    chain(values, " + ")
}

/// `(a - b - ...)`
pub fn subtract<E: IntoExpr>(values: impl IntoIterator<Item = E>) -> Sql {
    chain(values, " - ")
}

/// `(a * b * ...)`
pub fn multiply<E: IntoExpr>(values: impl IntoIterator<Item = E>) -> Sql {
    chain(values, " * ")
}

/// `(a / b / ...)`
pub fn divide<E: IntoExpr>(values: impl IntoIterator<Item = E>) -> Sql {
    chain(values, " / ")
}
