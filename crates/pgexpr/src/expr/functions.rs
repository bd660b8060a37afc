//! General-purpose SQL functions.

use crate::dialect::Dialect;
use crate::error::ExprResult;
use crate::ident::IntoIdent;
use crate::sql::{IntoExpr, Sql, bind};
use crate::types::{RangeBounds, RangeElement, RangeValue, encode_range};

/// `name(arg1, arg2, ...)`
pub fn call<E: IntoExpr>(name: &str, args: impl IntoIterator<Item = E>) -> Sql {
    let mut out = Sql::new(name);
    out.push("(").push_sql(Sql::join(args, ", ")).push(")");
    out
}

/// `coalesce(v1, v2, ...)`: the first non-null value.
pub fn coalesce<E: IntoExpr>(values: impl IntoIterator<Item = E>) -> Sql {
    call("coalesce", values)
}

/// `nullif(value, other)`: `NULL` when both are equal, otherwise `value`.
pub fn null_if(value: impl IntoExpr, other: impl IntoExpr) -> Sql {
    call("nullif", [value.into_expr(), other.into_expr()])
}

/// `greatest(v1, v2, ...)`
pub fn greatest<E: IntoExpr>(values: impl IntoIterator<Item = E>) -> Sql {
    call("greatest", values)
}

/// `least(v1, v2, ...)`
pub fn least<E: IntoExpr>(values: impl IntoIterator<Item = E>) -> Sql {
    call("least", values)
}

/// `distinct expr`
pub fn distinct(expr: impl IntoExpr) -> Sql {
    expr.into_expr().wrap("distinct ", "")
}

/// A random number in `[0, 1)`, spelled for the target dialect.
pub fn random(dialect: Dialect) -> Sql {
    Sql::new(format!("{}()", dialect.random_fn()))
}

/// `now()`
pub fn now() -> Sql {
    Sql::new("now()")
}

/// `bool_and(expr, ...)`: true if all inputs are true.
pub fn bool_and<E: IntoExpr>(exprs: impl IntoIterator<Item = E>) -> Sql {
    call("bool_and", exprs)
}

/// `bool_or(expr, ...)`: true if any input is true.
pub fn bool_or<E: IntoExpr>(exprs: impl IntoIterator<Item = E>) -> Sql {
    call("bool_or", exprs)
}

/// `age(origin, target)`: symbolic difference between two timestamps.
pub fn age(origin: impl IntoExpr, target: impl IntoExpr) -> Sql {
    call("age", [origin.into_expr(), target.into_expr()])
}

/// A bound `interval` value: `$1::text::interval`.
///
/// `text` uses PostgreSQL interval input syntax (`'1 day 2 hours'`, `'P1D'`).
pub fn interval(text: impl Into<String>) -> Sql {
    bind(text.into()).cast("text").cast("interval")
}

/// A bound range literal: `$1::text::<range type>`, with the range type taken
/// from the element (`int4range` for `i32`, `tstzrange` for `DateTime<Utc>`).
///
/// `String` elements have no natural range type, so the result stays
/// `$1::text`; cast it to the target range type.
pub fn range<T: RangeElement>(value: &RangeValue<T>, bounds: RangeBounds) -> ExprResult<Sql> {
    let param = bind(encode_range(value, bounds)?).cast("text");
    Ok(match T::RANGE_TYPE {
        Some(range_type) => param.cast(range_type),
        None => param,
    })
}

/// `excluded.column` references for the `DO UPDATE SET` part of an upsert,
/// in input order.
pub fn excluded<I: IntoIdent>(columns: impl IntoIterator<Item = I>) -> ExprResult<Vec<Sql>> {
    columns
        .into_iter()
        .map(|column| {
            let ident = column.into_ident()?;
            let mut out = Sql::new("excluded.");
            out.push_ident_ref(&ident.unqualified());
            Ok(out)
        })
        .collect()
}
