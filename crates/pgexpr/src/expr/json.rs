//! Aggregate and JSON builders.

use super::functions::call;
use crate::sql::{IntoExpr, Sql};

/// `array_agg(expr)`
pub fn array_agg(expr: impl IntoExpr) -> Sql {
    call("array_agg", [expr.into_expr()])
}

/// `json_agg(expr) FILTER (WHERE expr IS NOT NULL)`.
///
/// Nulls are filtered out so that aggregating the right side of an outer
/// join yields `[]`-like output instead of `[null]`. Use
/// [`json_agg_with_nulls`] to keep them.
pub fn json_agg(expr: impl IntoExpr) -> Sql {
    let expr = expr.into_expr();
    let mut out = call("json_agg", [expr.clone()]);
    out.push(" FILTER (WHERE ")
        .push_sql(expr)
        .push(" IS NOT NULL)");
    out
}

/// `json_agg(expr)` without the null filter.
pub fn json_agg_with_nulls(expr: impl IntoExpr) -> Sql {
    call("json_agg", [expr.into_expr()])
}

fn object_pairs<K, E>(shape: impl IntoIterator<Item = (K, E)>) -> Sql
where
    K: AsRef<str>,
    E: IntoExpr,
{
    let mut out = Sql::empty();
    for (i, (key, value)) in shape.into_iter().enumerate() {
        if i > 0 {
            out.push(", ");
        }
        out.push_literal(key.as_ref()).push(", ").push_expr(value);
    }
    out
}

/// `json_build_object('k1', v1, 'k2', v2, ...)`, keys in input order.
///
/// Keys are emitted as quoted literals; values are embedded or bound.
pub fn json_build_object<K, E>(shape: impl IntoIterator<Item = (K, E)>) -> Sql
where
    K: AsRef<str>,
    E: IntoExpr,
{
    object_pairs(shape).wrap("json_build_object(", ")")
}

/// `coalesce(json_agg(distinct json_build_object(...)), '[]')`: aggregate
/// rows into a JSON array of objects, `[]` when there are none.
pub fn json_agg_build_object<K, E>(shape: impl IntoIterator<Item = (K, E)>) -> Sql
where
    K: AsRef<str>,
    E: IntoExpr,
{
    object_pairs(shape).wrap(
        "coalesce(json_agg(distinct json_build_object(",
        ")), '[]')",
    )
}

/// `json_object_agg(key, value)`
pub fn json_object_agg(key: impl IntoExpr, value: impl IntoExpr) -> Sql {
    call("json_object_agg", [key.into_expr(), value.into_expr()])
}

/// `jsonb_object_agg(key, value)`
pub fn jsonb_object_agg(key: impl IntoExpr, value: impl IntoExpr) -> Sql {
    call("jsonb_object_agg", [key.into_expr(), value.into_expr()])
}

/// `json_strip_nulls(json)`
pub fn json_strip_nulls(json: impl IntoExpr) -> Sql {
    call("json_strip_nulls", [json.into_expr()])
}

/// `to_json(anyelement)`
pub fn to_json(expr: impl IntoExpr) -> Sql {
    call("to_json", [expr.into_expr()])
}

/// `to_jsonb(anyelement)`
pub fn to_jsonb(expr: impl IntoExpr) -> Sql {
    call("to_jsonb", [expr.into_expr()])
}

/// `row_to_json(row)`; pass a table or subquery alias.
pub fn row_to_json(row: impl IntoExpr) -> Sql {
    call("row_to_json", [row.into_expr()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::sql;

    #[test]
    fn json_agg_filters_nulls_by_default() {
        assert_eq!(
            json_agg(sql("tags.name")).to_sql(),
            "json_agg(tags.name) FILTER (WHERE tags.name IS NOT NULL)"
        );
        assert_eq!(json_agg_with_nulls(sql("t")).to_sql(), "json_agg(t)");
    }

    #[test]
    fn json_build_object_quotes_keys() {
        let q = json_build_object([("id", sql("p.id")), ("it's", sql("p.name"))]);
        assert_eq!(
            q.to_sql(),
            "json_build_object('id', p.id, 'it''s', p.name)"
        );
    }

    #[test]
    fn json_build_object_binds_values() {
        let q = json_build_object([("kind", "place")]);
        assert_eq!(q.to_sql(), "json_build_object('kind', $1::text)");
    }

    #[test]
    fn json_agg_build_object_wraps_in_coalesce() {
        let q = json_agg_build_object([("id", sql("t.id"))]);
        assert_eq!(
            q.to_sql(),
            "coalesce(json_agg(distinct json_build_object('id', t.id)), '[]')"
        );
    }

    #[test]
    fn object_aggs() {
        assert_eq!(
            json_object_agg(sql("k"), sql("v")).to_sql(),
            "json_object_agg(k, v)"
        );
        assert_eq!(
            jsonb_object_agg(sql("k"), sql("v")).to_sql(),
            "jsonb_object_agg(k, v)"
        );
    }

    #[test]
    fn json_agg_param_is_bound_twice() {
        let q = json_agg(5_i32);
        assert_eq!(
            q.to_sql(),
            "json_agg($1::int4) FILTER (WHERE $2::int4 IS NOT NULL)"
        );
        assert_eq!(q.param_count(), 2);
    }
}
