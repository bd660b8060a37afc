//! Text codec for the `cube` extension type.

use crate::error::{ExprError, ExprResult};

/// A cube value: an n-dimensional point or a box given by two opposite corners.
#[derive(Debug, Clone, PartialEq)]
pub enum CubeValue {
    Point(Vec<f64>),
    Box {
        lower_left: Vec<f64>,
        upper_right: Vec<f64>,
    },
}

impl CubeValue {
    /// Number of dimensions.
    pub fn dimensions(&self) -> usize {
        match self {
            CubeValue::Point(p) => p.len(),
            CubeValue::Box { lower_left, .. } => lower_left.len(),
        }
    }

    pub fn is_point(&self) -> bool {
        matches!(self, CubeValue::Point(_))
    }
}

fn write_corner(out: &mut String, corner: &[f64]) {
    out.push('(');
    for (i, v) in corner.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&v.to_string());
    }
    out.push(')');
}

/// Encode a cube: `(1, 2, 3)` for points, `(1, 2),(3, 4)` for boxes.
pub fn encode_cube(value: &CubeValue) -> ExprResult<String> {
    let mut out = String::new();
    match value {
        CubeValue::Point(p) => {
            if p.is_empty() {
                return Err(ExprError::format("cube point needs at least one dimension"));
            }
            write_corner(&mut out, p);
        }
        CubeValue::Box {
            lower_left,
            upper_right,
        } => {
            if lower_left.len() != upper_right.len() {
                return Err(ExprError::dimension_mismatch(
                    format!("{} dimensions", lower_left.len()),
                    format!("{} dimensions", upper_right.len()),
                ));
            }
            if lower_left.is_empty() {
                return Err(ExprError::format("cube box needs at least one dimension"));
            }
            write_corner(&mut out, lower_left);
            out.push(',');
            write_corner(&mut out, upper_right);
        }
    }
    Ok(out)
}

fn parse_corner(text: &str, input: &str) -> ExprResult<Vec<f64>> {
    let inner = text
        .trim()
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| ExprError::parse(input, "expected a parenthesized coordinate list"))?;
    inner
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<f64>()
                .map_err(|_| ExprError::parse(input, format!("invalid cube coordinate {:?}", s.trim())))
        })
        .collect()
}

/// Decode cube text as returned by PostgreSQL.
///
/// A box whose corners coincide is returned by the server in point form, so
/// that is what this decodes to as well.
pub fn decode_cube(text: &str) -> ExprResult<CubeValue> {
    let result = decode_cube_text(text);
    if let Err(e) = &result {
        tracing::debug!(target: "pgexpr.codec", input = text, error = %e, "cube decode failed");
    }
    result
}

fn decode_cube_text(text: &str) -> ExprResult<CubeValue> {
    let trimmed = text.trim();
    match trimmed.find("),") {
        Some(split) => {
            let lower_left = parse_corner(&trimmed[..=split], text)?;
            let upper_right = parse_corner(&trimmed[split + 2..], text)?;
            if lower_left.len() != upper_right.len() {
                return Err(ExprError::dimension_mismatch(
                    format!("{} dimensions", lower_left.len()),
                    format!("{} dimensions", upper_right.len()),
                ));
            }
            Ok(CubeValue::Box {
                lower_left,
                upper_right,
            })
        }
        None => Ok(CubeValue::Point(parse_corner(trimmed, text)?)),
    }
}
