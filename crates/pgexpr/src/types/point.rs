//! Point well-known-text codec.
//!
//! The codec's own text form is `Point[Z][M](x,y[,z][,m])`. Decoding also
//! accepts standard WKT (`POINT Z (1 2 3)`), which is what PostGIS returns from
//! `st_astext`.

use crate::error::{ExprError, ExprResult};
use std::fmt;
use std::sync::OnceLock;

/// Optional dimensions declared for a point column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimensions {
    /// Has an altitude component.
    pub z: bool,
    /// Has a measure component.
    pub m: bool,
}

impl Dimensions {
    pub fn new(z: bool, m: bool) -> Self {
        Self { z, m }
    }

    /// Total number of components (2 to 4).
    pub fn count(self) -> usize {
        2 + usize::from(self.z) + usize::from(self.m)
    }

    /// The `Z`/`M` suffix (`""`, `"Z"`, `"M"`, `"ZM"`).
    pub fn suffix(self) -> &'static str {
        match (self.z, self.m) {
            (false, false) => "",
            (true, false) => "Z",
            (false, true) => "M",
            (true, true) => "ZM",
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "POINT{}", self.suffix())
    }
}

/// A 2D to 4D coordinate: longitude, latitude, optional altitude and measure.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
    pub m: Option<f64>,
}

impl Coordinate {
    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
        }
    }

    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self {
            z: Some(z),
            ..Self::xy(x, y)
        }
    }

    pub fn xym(x: f64, y: f64, m: f64) -> Self {
        Self {
            m: Some(m),
            ..Self::xy(x, y)
        }
    }

    pub fn xyzm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self {
            z: Some(z),
            m: Some(m),
            ..Self::xy(x, y)
        }
    }

    /// Build a coordinate from components in `x, y[, z][, m]` order.
    pub fn from_components(components: &[f64], dims: Dimensions) -> ExprResult<Self> {
        if components.len() != dims.count() {
            return Err(ExprError::dimension_mismatch(
                format!("{dims} ({} components)", dims.count()),
                format!("{} components", components.len()),
            ));
        }
        let mut rest = components[2..].iter().copied();
        Ok(Self {
            x: components[0],
            y: components[1],
            z: if dims.z { rest.next() } else { None },
            m: if dims.m { rest.next() } else { None },
        })
    }

    /// Components in `x, y[, z][, m]` order.
    pub fn components(&self) -> Vec<f64> {
        let mut out = vec![self.x, self.y];
        out.extend(self.z);
        out.extend(self.m);
        out
    }

    /// The dimensions this coordinate actually carries.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.z.is_some(), self.m.is_some())
    }

    /// Standard WKT with space-separated components: `POINT Z (1 2 3)`.
    pub fn to_wkt(&self, dims: Dimensions) -> ExprResult<String> {
        check_dimensions(self, dims)?;
        let body = self
            .components()
            .iter()
            .map(f64::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        Ok(match dims.suffix() {
            "" => format!("POINT({body})"),
            suffix => format!("POINT {suffix} ({body})"),
        })
    }
}

fn check_dimensions(coordinate: &Coordinate, dims: Dimensions) -> ExprResult<()> {
    let actual = coordinate.dimensions();
    if actual != dims {
        return Err(ExprError::format(format!(
            "coordinate is {actual} but the column declares {dims}"
        )));
    }
    Ok(())
}

/// Encode a coordinate as `Point[Z][M](x,y[,z][,m])`.
pub fn encode_point(coordinate: &Coordinate, dims: Dimensions) -> ExprResult<String> {
    check_dimensions(coordinate, dims)?;
    let body = coordinate
        .components()
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(",");
    Ok(format!("Point{}({body})", dims.suffix()))
}

fn point_regex() -> &'static regex::Regex {
    static POINT_RE: OnceLock<regex::Regex> = OnceLock::new();
    POINT_RE.get_or_init(|| {
        regex::Regex::new(r"(?i)^\s*POINT\s*(Z?)(M?)\s*\((.*)\)\s*$")
            .expect("invalid built-in point regex")
    })
}

/// Decode `POINT[Z][M](...)` text into a coordinate.
pub fn decode_point(text: &str, dims: Dimensions) -> ExprResult<Coordinate> {
    let result = decode_point_text(text, dims);
    if let Err(e) = &result {
        tracing::debug!(target: "pgexpr.codec", input = text, error = %e, "point decode failed");
    }
    result
}

fn decode_point_text(text: &str, dims: Dimensions) -> ExprResult<Coordinate> {
    let caps = point_regex()
        .captures(text)
        .ok_or_else(|| ExprError::parse(text, "expected POINT[Z][M](...)"))?;

    let found = Dimensions::new(!caps[1].is_empty(), !caps[2].is_empty());
    if found != dims {
        return Err(ExprError::dimension_mismatch(dims, found));
    }

    let components = caps[3]
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .map_err(|_| ExprError::format(format!("non-numeric point component {s:?}")))
        })
        .collect::<ExprResult<Vec<_>>>()?;

    Coordinate::from_components(&components, dims)
}

#[cfg(feature = "geo_types")]
impl From<geo_types::Point<f64>> for Coordinate {
    fn from(p: geo_types::Point<f64>) -> Self {
        Coordinate::xy(p.x(), p.y())
    }
}

/// `geo_types::Point` is 2D only, so a coordinate with `z` or `m` is rejected
/// rather than flattened.
#[cfg(feature = "geo_types")]
impl TryFrom<Coordinate> for geo_types::Point<f64> {
    type Error = ExprError;

    fn try_from(c: Coordinate) -> ExprResult<Self> {
        let dims = c.dimensions();
        if dims != Dimensions::default() {
            return Err(ExprError::dimension_mismatch(Dimensions::default(), dims));
        }
        Ok(geo_types::Point::new(c.x, c.y))
    }
}
