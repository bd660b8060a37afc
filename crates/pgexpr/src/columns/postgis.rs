//! PostGIS column types.

use super::{Column, CustomType, qualified_type, schema_ident};
use crate::error::{ExprError, ExprResult};
use crate::ident::{Ident, IntoIdent};
use crate::sql::Sql;
use crate::types::{Coordinate, Dimensions, GeometryType, Srid, decode_point};
use serde::Deserialize;

/// Planar `geometry` or spheroidal `geography`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpatialKind {
    #[default]
    Geometry,
    Geography,
}

impl SpatialKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SpatialKind::Geometry => "geometry",
            SpatialKind::Geography => "geography",
        }
    }

    fn generic_subtype(self) -> &'static str {
        match self {
            SpatialKind::Geometry => "Geometry",
            SpatialKind::Geography => "Geography",
        }
    }
}

fn qualified_fn(schema: Option<&Ident>, name: &str, arg: &Ident) -> Sql {
    let mut out = Sql::new(qualified_type(schema, name));
    out.push("(").push_ident_ref(arg).push(")");
    out
}

// ─── Point ──────────────────────────────────────────────────────────────────

/// Configuration for [`point`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PointConfig {
    /// Schema PostGIS is installed in.
    pub schema_name: Option<String>,
    pub srid: Srid,
    pub z: bool,
    pub m: bool,
    pub kind: SpatialKind,
}

impl PointConfig {
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema_name = Some(schema.into());
        self
    }

    pub fn with_srid(mut self, srid: impl Into<Srid>) -> Self {
        self.srid = srid.into();
        self
    }

    pub fn with_z(mut self) -> Self {
        self.z = true;
        self
    }

    pub fn with_m(mut self) -> Self {
        self.m = true;
        self
    }

    pub fn geography(mut self) -> Self {
        self.kind = SpatialKind::Geography;
        self
    }
}

/// Point column, exchanged as EWKT on the way in and WKT on the way out.
#[derive(Debug, Clone, PartialEq)]
pub struct PostgisPoint {
    schema: Option<Ident>,
    srid: Srid,
    dims: Dimensions,
    kind: SpatialKind,
}

impl PostgisPoint {
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn srid(&self) -> Srid {
        self.srid
    }
}

impl CustomType for PostgisPoint {
    type Data = Coordinate;
    type Driver = String;

    fn data_type(&self) -> String {
        let base = qualified_type(self.schema.as_ref(), self.kind.as_str());
        format!("{base}(Point{},{})", self.dims.suffix(), self.srid)
    }

    fn to_driver(&self, value: &Coordinate) -> ExprResult<String> {
        Ok(format!("SRID={};{}", self.srid, value.to_wkt(self.dims)?))
    }

    fn from_driver(&self, value: String) -> ExprResult<Coordinate> {
        decode_point(&value, self.dims)
    }

    fn select_expr(&self, column: &Ident) -> Sql {
        qualified_fn(self.schema.as_ref(), "st_astext", column)
    }
}

/// PostGIS point column (`geometry(Point[Z][M],srid)` or the geography equivalent).
pub fn point(name: impl IntoIdent, config: PointConfig) -> ExprResult<Column<PostgisPoint>> {
    let schema = schema_ident(config.schema_name.as_deref())?;
    Column::new(
        name,
        PostgisPoint {
            schema,
            srid: config.srid,
            dims: Dimensions::new(config.z, config.m),
            kind: config.kind,
        },
    )
}

// ─── GeoJSON geometry / geography ───────────────────────────────────────────

/// Configuration for [`geometry`] and [`geography`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeoJsonConfig {
    /// Restrict the column (and accepted values) to one geometry type.
    pub geometry_type: Option<GeometryType>,
    pub z: bool,
    pub m: bool,
    pub srid: Option<Srid>,
    /// Schema PostGIS is installed in.
    pub schema_name: Option<String>,
}

impl GeoJsonConfig {
    pub fn with_type(mut self, geometry_type: GeometryType) -> Self {
        self.geometry_type = Some(geometry_type);
        self
    }

    pub fn with_srid(mut self, srid: impl Into<Srid>) -> Self {
        self.srid = Some(srid.into());
        self
    }

    pub fn with_z(mut self) -> Self {
        self.z = true;
        self
    }

    pub fn with_m(mut self) -> Self {
        self.m = true;
        self
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema_name = Some(schema.into());
        self
    }
}

/// Geometry or geography column exchanged as GeoJSON.
///
/// Values are bound through `st_geomfromgeojson` and selected through
/// `st_asgeojson`, so the application side only ever sees GeoJSON objects.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoJson {
    kind: SpatialKind,
    geometry_type: Option<GeometryType>,
    dims: Dimensions,
    srid: Option<Srid>,
    schema: Option<Ident>,
}

impl GeoJson {
    fn check_type(&self, value: &serde_json::Value) -> Result<(), String> {
        let Some(expected) = self.geometry_type else {
            return Ok(());
        };
        match value.get("type").and_then(serde_json::Value::as_str) {
            Some(found) if found == expected.as_str() => Ok(()),
            Some(found) => Err(format!("expected {} {expected}, got {found}", self.kind.as_str())),
            None => Err("GeoJSON object has no `type` member".to_string()),
        }
    }
}

impl CustomType for GeoJson {
    type Data = serde_json::Value;
    type Driver = String;

    fn data_type(&self) -> String {
        let base = qualified_type(self.schema.as_ref(), self.kind.as_str());
        let subtype = match self.geometry_type {
            Some(t) => t.as_str(),
            None if self.dims.z || self.dims.m || self.srid.is_some() => {
                self.kind.generic_subtype()
            }
            None => return base,
        };
        match self.srid {
            Some(srid) => format!("{base}({subtype}{},{srid})", self.dims.suffix()),
            None => format!("{base}({subtype}{})", self.dims.suffix()),
        }
    }

    fn cast_type(&self) -> String {
        qualified_type(self.schema.as_ref(), self.kind.as_str())
    }

    fn to_driver(&self, value: &serde_json::Value) -> ExprResult<String> {
        self.check_type(value).map_err(ExprError::format)?;
        serde_json::to_string(value).map_err(|e| ExprError::format(e.to_string()))
    }

    fn from_driver(&self, value: String) -> ExprResult<serde_json::Value> {
        let parsed: serde_json::Value =
            serde_json::from_str(&value).map_err(|e| ExprError::parse(&value, e.to_string()))?;
        self.check_type(&parsed)
            .map_err(|message| ExprError::parse(&value, message))?;
        Ok(parsed)
    }

    fn bind_expr(&self, param: Sql) -> Sql {
        let schema = self.schema.as_ref();
        let mut geom = Sql::new(qualified_type(schema, "st_geomfromgeojson"));
        geom.push("(").push_sql(param.cast("text")).push(")");
        if let Some(srid) = self.srid {
            let mut with_srid = Sql::new(qualified_type(schema, "st_setsrid"));
            with_srid
                .push("(")
                .push_sql(geom)
                .push(&format!(", {srid})"));
            geom = with_srid;
        }
        geom.cast(&self.cast_type())
    }

    fn select_expr(&self, column: &Ident) -> Sql {
        qualified_fn(self.schema.as_ref(), "st_asgeojson", column)
    }
}

fn geojson_column(
    name: impl IntoIdent,
    kind: SpatialKind,
    config: GeoJsonConfig,
) -> ExprResult<Column<GeoJson>> {
    let schema = schema_ident(config.schema_name.as_deref())?;
    Column::new(
        name,
        GeoJson {
            kind,
            geometry_type: config.geometry_type,
            dims: Dimensions::new(config.z, config.m),
            srid: config.srid,
            schema,
        },
    )
}

/// GeoJSON-backed `geometry` column.
pub fn geometry(name: impl IntoIdent, config: GeoJsonConfig) -> ExprResult<Column<GeoJson>> {
    geojson_column(name, SpatialKind::Geometry, config)
}

/// GeoJSON-backed `geography` column.
pub fn geography(name: impl IntoIdent, config: GeoJsonConfig) -> ExprResult<Column<GeoJson>> {
    geojson_column(name, SpatialKind::Geography, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn point_data_type() {
        let c = point("location", PointConfig::default()).unwrap();
        assert_eq!(c.definition(), "location geometry(Point,4326)");

        let c = point(
            "location",
            PointConfig::default()
                .with_schema("extensions")
                .with_z()
                .with_srid(Srid::WebMercator),
        )
        .unwrap();
        assert_eq!(c.data_type(), "extensions.geometry(PointZ,3857)");

        let c = point("location", PointConfig::default().geography().with_m()).unwrap();
        assert_eq!(c.data_type(), "geography(PointM,4326)");
    }

    #[test]
    fn point_bind_and_select() {
        let c = point("location", PointConfig::default()).unwrap();
        let q = c.bind(&Coordinate::xy(2.35, 48.85)).unwrap();
        assert_eq!(q.to_sql(), "$1::text::geometry(Point,4326)");
        assert_eq!(
            format!("{:?}", q.params_ref()),
            r#"["SRID=4326;POINT(2.35 48.85)"]"#
        );
        assert_eq!(c.select_expr().to_sql(), "st_astext(location)");
        assert_eq!(
            c.decode("POINT(2.35 48.85)".to_string()).unwrap(),
            Coordinate::xy(2.35, 48.85)
        );
    }

    #[test]
    fn point_rejects_missing_z() {
        let c = point("location", PointConfig::default().with_z()).unwrap();
        let err = c.decode("POINT(1 2)".to_string()).unwrap_err();
        assert!(err.is_dimension_mismatch());
        assert!(c.encode(&Coordinate::xy(1.0, 2.0)).unwrap_err().is_format());
    }

    #[test]
    fn geojson_data_types() {
        assert_eq!(
            geometry("shape", GeoJsonConfig::default()).unwrap().data_type(),
            "geometry"
        );
        assert_eq!(
            geometry("shape", GeoJsonConfig::default().with_type(GeometryType::Polygon))
                .unwrap()
                .data_type(),
            "geometry(Polygon)"
        );
        assert_eq!(
            geography("area", GeoJsonConfig::default().with_z().with_srid(4326))
                .unwrap()
                .data_type(),
            "geography(GeographyZ,4326)"
        );
    }

    #[test]
    fn geojson_bind_and_select() {
        let c = geometry("shape", GeoJsonConfig::default().with_srid(4326)).unwrap();
        let q = c
            .bind(&json!({"type": "Point", "coordinates": [1.0, 2.0]}))
            .unwrap();
        assert_eq!(
            q.to_sql(),
            "st_setsrid(st_geomfromgeojson($1::text), 4326)::geometry"
        );
        assert_eq!(c.select_expr().to_sql(), "st_asgeojson(shape)");
    }

    #[test]
    fn geojson_type_checked() {
        let c = geometry("shape", GeoJsonConfig::default().with_type(GeometryType::Point)).unwrap();
        let polygon = json!({"type": "Polygon", "coordinates": []});
        assert!(c.encode(&polygon).unwrap_err().is_format());
        let err = c.decode(polygon.to_string()).unwrap_err();
        assert!(err.is_parse());
        assert!(c.decode("not json".to_string()).unwrap_err().is_parse());
    }
}
