//! Spatial reference identifiers and PostGIS geometry type names.

use serde::Deserialize;
use std::fmt;

/// Spatial reference system identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "i32")]
pub enum Srid {
    /// WGS 84, EPSG:4326 (GPS latitude/longitude).
    #[default]
    Wgs84,
    /// Web Mercator, EPSG:3857.
    WebMercator,
    Other(i32),
}

impl Srid {
    pub const WGS84: i32 = 4326;
    pub const WEB_MERCATOR: i32 = 3857;

    pub fn code(self) -> i32 {
        match self {
            Srid::Wgs84 => Self::WGS84,
            Srid::WebMercator => Self::WEB_MERCATOR,
            Srid::Other(code) => code,
        }
    }
}

impl From<i32> for Srid {
    fn from(code: i32) -> Self {
        match code {
            Self::WGS84 => Srid::Wgs84,
            Self::WEB_MERCATOR => Srid::WebMercator,
            other => Srid::Other(other),
        }
    }
}

impl fmt::Display for Srid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// GeoJSON / PostGIS geometry type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum GeometryType {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryType {
    /// The GeoJSON `type` member / PostGIS type modifier name.
    pub fn as_str(self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srid_codes() {
        assert_eq!(Srid::default().code(), 4326);
        assert_eq!(Srid::from(3857), Srid::WebMercator);
        assert_eq!(Srid::from(2154).code(), 2154);
    }
}
