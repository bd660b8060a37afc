//! Convenient imports for typical `pgexpr` usage.
//!
//! ```ignore
//! use pgexpr::prelude::*;
//! ```

pub use crate::{
    Column, CustomType, Dialect, ExprError, ExprResult, Ident, IntoExpr, IntoIdent, Pagination,
    RangeBounds, RangeValue, Sql, bind, paginate, sql,
};
pub use crate::types::{BoundType, Coordinate, Dimensions, Regconfig, Srid};
