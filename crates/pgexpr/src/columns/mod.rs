//! Custom column types.
//!
//! A [`CustomType`] knows its database type name and how to convert between
//! the application value and the value handed to (or returned by) the
//! driver. [`Column`] pairs a type with a validated column name and produces
//! the SQL fragments a query builder needs: the DDL definition, bound values
//! and the select expression.
//!
//! ```ignore
//! use pgexpr::columns::{intrange, IntRangeConfig};
//! use pgexpr::types::RangeValue;
//!
//! let seats = intrange("seats", IntRangeConfig::default())?;
//! assert_eq!(seats.definition(), "seats int4range");
//!
//! let value = seats.bind(&RangeValue::between(1, 10))?;
//! assert_eq!(value.to_sql(), "$1::text::int4range");
//! assert_eq!(seats.select_expr().to_sql(), "seats::text");
//! # Ok::<(), pgexpr::ExprError>(())
//! ```

pub mod cube;
pub mod postgis;
pub mod range;
pub mod text;

pub use cube::{Cube, CubeConfig, cube};
pub use postgis::{
    GeoJson, GeoJsonConfig, PostgisPoint, PointConfig, SpatialKind, geography, geometry, point,
};
pub use range::{
    DateRange, DateRangeConfig, IntRange, IntRangeConfig, IntRangeSize, NumRange, NumRangeConfig,
    TsRange, TsRangeConfig, daterange, intrange, numrange, tsrange,
};
pub use text::{
    Citext, GeneratedTsvector, GeneratedTsvectorConfig, RegconfigType, Tsvector, citext,
    generated_tsvector, regconfig, tsvector,
};

use crate::error::ExprResult;
use crate::ident::{Ident, IntoIdent};
use crate::sql::{IntoExpr, Sql, bind};
use tokio_postgres::types::ToSql;

/// A database column type with application-side conversions.
pub trait CustomType {
    /// Application-side value.
    type Data;
    /// Value exchanged with the driver.
    type Driver: ToSql + Sync + Send + 'static;

    /// Type as written in a column definition.
    fn data_type(&self) -> String;

    /// Convert an application value for binding.
    fn to_driver(&self, value: &Self::Data) -> ExprResult<Self::Driver>;

    /// Convert a driver value back to the application type.
    fn from_driver(&self, value: Self::Driver) -> ExprResult<Self::Data>;

    /// Type used to cast bound parameters. Defaults to [`data_type`](Self::data_type).
    fn cast_type(&self) -> String {
        self.data_type()
    }

    /// Wrap a bound parameter. Defaults to `$n::text::cast_type`: the driver
    /// value goes over the wire as `text` and the server converts it.
    fn bind_expr(&self, param: Sql) -> Sql {
        param.cast("text").cast(&self.cast_type())
    }

    /// Expression selecting this column. Defaults to `column::text`, the
    /// form [`from_driver`](Self::from_driver) reads back.
    fn select_expr(&self, column: &Ident) -> Sql {
        column.into_expr().cast("text")
    }
}

/// A named column of a [`CustomType`].
#[derive(Debug, Clone, PartialEq)]
pub struct Column<T> {
    name: Ident,
    ty: T,
}

impl<T: CustomType> Column<T> {
    /// Create a column, validating its name.
    pub fn new(name: impl IntoIdent, ty: T) -> ExprResult<Self> {
        Ok(Self {
            name: name.into_ident()?,
            ty,
        })
    }

    pub fn name(&self) -> &Ident {
        &self.name
    }

    pub fn ty(&self) -> &T {
        &self.ty
    }

    pub fn data_type(&self) -> String {
        self.ty.data_type()
    }

    /// Column definition for DDL: `name type`.
    pub fn definition(&self) -> String {
        format!("{} {}", self.name, self.ty.data_type())
    }

    /// Convert an application value to its driver form.
    pub fn encode(&self, value: &T::Data) -> ExprResult<T::Driver> {
        self.ty.to_driver(value)
    }

    /// Convert a driver value to its application form.
    pub fn decode(&self, value: T::Driver) -> ExprResult<T::Data> {
        self.ty.from_driver(value)
    }

    /// Encode `value` and bind it as a typed parameter.
    pub fn bind(&self, value: &T::Data) -> ExprResult<Sql> {
        let driver = self.ty.to_driver(value)?;
        tracing::trace!(
            target: "pgexpr.column",
            column = %self.name,
            data_type = %self.ty.cast_type(),
            "binding column value"
        );
        Ok(self.ty.bind_expr(bind(driver)))
    }

    /// Reference to the column.
    pub fn expr(&self) -> Sql {
        (&self.name).into_expr()
    }

    /// Expression to select the column so that [`decode`](Self::decode) can
    /// read it back.
    pub fn select_expr(&self) -> Sql {
        self.ty.select_expr(&self.name)
    }
}

impl<T> IntoExpr for &Column<T> {
    fn into_expr(self) -> Sql {
        (&self.name).into_expr()
    }
}

/// Parse an optional schema name.
fn schema_ident(schema: Option<&str>) -> ExprResult<Option<Ident>> {
    schema.map(Ident::parse).transpose()
}

/// `[schema.]name`
fn qualified_type(schema: Option<&Ident>, name: &str) -> String {
    match schema {
        Some(schema) => format!("{schema}.{name}"),
        None => name.to_string(),
    }
}
