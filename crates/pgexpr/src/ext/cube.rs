//! `cube` functions and operators.

use super::binary_op;
use crate::expr::call;
use crate::sql::{IntoExpr, Sql};
use serde::Deserialize;

/// Metric used by [`distance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceType {
    /// `<->`
    #[default]
    Euclidean,
    /// `<#>` (L1 metric)
    Taxicab,
    /// `<=>` (L-inf metric)
    Chebyshev,
}

impl DistanceType {
    pub fn operator(self) -> &'static str {
        match self {
            DistanceType::Euclidean => "<->",
            DistanceType::Taxicab => "<#>",
            DistanceType::Chebyshev => "<=>",
        }
    }
}

/// `cube(a, b, ...)`: build a cube from coordinates, or extend a cube with a
/// new dimension when the first argument is a cube.
pub fn make_cube<E: IntoExpr>(args: impl IntoIterator<Item = E>) -> Sql {
    call("cube", args)
}

/// `cube_dim(cube)`
pub fn cube_dim(cube: impl IntoExpr) -> Sql {
    call("cube_dim", [cube.into_expr()])
}

/// `cube_ll_coord(cube, n)`: n-th coordinate of the lower left corner.
pub fn cube_ll_coord(cube: impl IntoExpr, n: i32) -> Sql {
    call("cube_ll_coord", [cube.into_expr(), n.into_expr()])
}

/// `cube_ur_coord(cube, n)`: n-th coordinate of the upper right corner.
pub fn cube_ur_coord(cube: impl IntoExpr, n: i32) -> Sql {
    call("cube_ur_coord", [cube.into_expr(), n.into_expr()])
}

/// `cube_is_point(cube)`
pub fn cube_is_point(cube: impl IntoExpr) -> Sql {
    call("cube_is_point", [cube.into_expr()])
}

/// `cube_distance(a, b)`
pub fn cube_distance(a: impl IntoExpr, b: impl IntoExpr) -> Sql {
    call("cube_distance", [a.into_expr(), b.into_expr()])
}

/// `cube_subset(cube, $n)`: keep (or reorder) the listed 1-based dimensions.
pub fn cube_subset(cube: impl IntoExpr, dimensions: impl IntoIterator<Item = i32>) -> Sql {
    let mut out = Sql::new("cube_subset(");
    out.push_expr(cube)
        .push(", ")
        .push_bind(dimensions.into_iter().collect::<Vec<_>>())
        .push(")");
    out
}

/// `cube_union(a, b)`: smallest cube enclosing both.
pub fn cube_union(a: impl IntoExpr, b: impl IntoExpr) -> Sql {
    call("cube_union", [a.into_expr(), b.into_expr()])
}

/// `cube_inter(a, b)`: intersection.
pub fn cube_inter(a: impl IntoExpr, b: impl IntoExpr) -> Sql {
    call("cube_inter", [a.into_expr(), b.into_expr()])
}

/// `cube_enlarge(cube, r, n)`: grow by radius `r` in at least `n` dimensions.
pub fn cube_enlarge(cube: impl IntoExpr, radius: f64, dimensions: i32) -> Sql {
    call(
        "cube_enlarge",
        [cube.into_expr(), radius.into_expr(), dimensions.into_expr()],
    )
}

/// `left && right`
pub fn overlaps(left: impl IntoExpr, right: impl IntoExpr) -> Sql {
    binary_op(left, "&&", right)
}

/// `left @> right`
pub fn contains(left: impl IntoExpr, right: impl IntoExpr) -> Sql {
    binary_op(left, "@>", right)
}

/// `left <@ right`
pub fn contained(left: impl IntoExpr, right: impl IntoExpr) -> Sql {
    binary_op(left, "<@", right)
}

/// `cube -> n`: n-th coordinate.
pub fn extract(cube: impl IntoExpr, n: i32) -> Sql {
    binary_op(cube, "->", n)
}

/// `left <-> right` (or `<#>` / `<=>`), usable in `ORDER BY` for KNN search.
pub fn distance(left: impl IntoExpr, right: impl IntoExpr, kind: DistanceType) -> Sql {
    binary_op(left, kind.operator(), right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::sql;

    #[test]
    fn functions() {
        assert_eq!(make_cube([1.0, 2.0]).to_sql(), "cube($1::float8, $2::float8)");
        assert_eq!(cube_dim(sql("c")).to_sql(), "cube_dim(c)");
        assert_eq!(cube_ll_coord(sql("c"), 1).to_sql(), "cube_ll_coord(c, $1::int4)");
        assert_eq!(cube_subset(sql("c"), [1, 3]).to_sql(), "cube_subset(c, $1)");
        assert_eq!(
            cube_enlarge(sql("c"), 0.5, 2).to_sql(),
            "cube_enlarge(c, $1::float8, $2::int4)"
        );
    }

    #[test]
    fn operators() {
        assert_eq!(overlaps(sql("a"), sql("b")).to_sql(), "a && b");
        assert_eq!(contains(sql("a"), sql("b")).to_sql(), "a @> b");
        assert_eq!(contained(sql("a"), sql("b")).to_sql(), "a <@ b");
        assert_eq!(extract(sql("a"), 2).to_sql(), "a -> $1::int4");
    }

    #[test]
    fn distance_operators() {
        let d = |kind| distance(sql("a"), sql("b"), kind).to_sql();
        assert_eq!(d(DistanceType::default()), "a <-> b");
        assert_eq!(d(DistanceType::Taxicab), "a <#> b");
        assert_eq!(d(DistanceType::Chebyshev), "a <=> b");
    }
}
