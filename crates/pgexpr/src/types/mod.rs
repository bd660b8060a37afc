//! Value types and their PostgreSQL text codecs.

pub mod bound;
pub mod cube;
pub mod point;
pub mod range;
pub mod regconfig;
pub mod srid;

pub use bound::{BoundType, RangeBounds};
pub use cube::{CubeValue, decode_cube, encode_cube};
pub use point::{Coordinate, Dimensions, decode_point, encode_point};
pub use range::{
    ParsedRange, RangeElement, RangeValue, decode_range, decode_range_with, encode_range,
    encode_range_with, parse_range,
};
pub use regconfig::Regconfig;
pub use srid::{GeometryType, Srid};
