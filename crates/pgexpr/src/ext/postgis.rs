//! PostGIS functions.

use crate::expr::call;
use crate::sql::{IntoExpr, Sql};

/// `st_astext(geo)`: WKT output.
pub fn st_astext(geo: impl IntoExpr) -> Sql {
    call("st_astext", [geo.into_expr()])
}

/// `st_asgeojson(geo)`
pub fn st_as_geojson(geo: impl IntoExpr) -> Sql {
    call("st_asgeojson", [geo.into_expr()])
}

/// `st_geomfromgeojson(geojson)`. A `serde_json::Value` is bound as a `json`
/// parameter.
pub fn st_geom_from_geojson(geojson: impl IntoExpr) -> Sql {
    call("st_geomfromgeojson", [geojson.into_expr()])
}

/// `st_point(longitude, latitude)`
pub fn st_point(longitude: impl IntoExpr, latitude: impl IntoExpr) -> Sql {
    call("st_point", [longitude.into_expr(), latitude.into_expr()])
}

/// `st_distance(a, b)`
pub fn st_distance(a: impl IntoExpr, b: impl IntoExpr) -> Sql {
    call("st_distance", [a.into_expr(), b.into_expr()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::sql;

    #[test]
    fn distance_between_points() {
        let q = st_distance(sql("p.location"), st_point(2.35, 48.85));
        assert_eq!(q.to_sql(), "st_distance(p.location, st_point($1::float8, $2::float8))");
    }

    #[test]
    fn geojson_value_is_bound() {
        let q = st_geom_from_geojson(serde_json::json!({"type": "Point", "coordinates": [1, 2]}));
        assert_eq!(q.to_sql(), "st_geomfromgeojson($1::json)");
        assert_eq!(st_as_geojson(sql("g")).to_sql(), "st_asgeojson(g)");
        assert_eq!(st_astext(sql("g")).to_sql(), "st_astext(g)");
    }
}
