//! Range column types.
//!
//! Values cross the driver boundary as range literal text and are cast to the
//! range type on bind. The element type parameter picks the scalar codec:
//! `String` elements are passed through untouched ("string mode").

use super::{Column, CustomType};
use crate::error::{ExprError, ExprResult};
use crate::ident::IntoIdent;
use crate::types::{RangeBounds, RangeElement, RangeValue, decode_range, encode_range};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::marker::PhantomData;

fn encode_ordered<T>(value: &RangeValue<T>, bounds: RangeBounds) -> ExprResult<String>
where
    T: RangeElement + PartialOrd,
{
    value.check_order()?;
    encode_range(value, bounds)
}

macro_rules! impl_bounds_accessor {
    ($ty:ident) => {
        impl<T> $ty<T>
        where
            T: RangeElement + PartialOrd,
        {
            pub fn bounds(&self) -> RangeBounds {
                self.config.bounds
            }
        }
    };
}

// ─── tsrange / tstzrange ────────────────────────────────────────────────────

/// Configuration for [`tsrange`].
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct TsRangeConfig {
    /// Use `tstzrange` instead of `tsrange`.
    pub with_timezone: bool,
    pub bounds: RangeBounds,
}

impl TsRangeConfig {
    pub fn with_timezone(mut self) -> Self {
        self.with_timezone = true;
        self
    }

    pub fn with_bounds(mut self, bounds: RangeBounds) -> Self {
        self.bounds = bounds;
        self
    }
}

/// `tsrange` / `tstzrange` column over `T` (`NaiveDateTime`, `DateTime<Utc>`,
/// `DateTime<FixedOffset>` or `String`).
#[derive(Debug, Clone, Copy)]
pub struct TsRange<T = NaiveDateTime> {
    config: TsRangeConfig,
    _element: PhantomData<fn() -> T>,
}

impl_bounds_accessor!(TsRange);

impl<T> CustomType for TsRange<T>
where
    T: RangeElement + PartialOrd,
{
    type Data = RangeValue<T>;
    type Driver = String;

    fn data_type(&self) -> String {
        if self.config.with_timezone {
            "tstzrange".to_string()
        } else {
            "tsrange".to_string()
        }
    }

    fn to_driver(&self, value: &RangeValue<T>) -> ExprResult<String> {
        encode_ordered(value, self.config.bounds)
    }

    fn from_driver(&self, value: String) -> ExprResult<RangeValue<T>> {
        decode_range(&value)
    }
}

/// Timestamp range column.
pub fn tsrange<T>(name: impl IntoIdent, config: TsRangeConfig) -> ExprResult<Column<TsRange<T>>>
where
    T: RangeElement + PartialOrd,
{
    Column::new(
        name,
        TsRange {
            config,
            _element: PhantomData,
        },
    )
}

// ─── daterange ──────────────────────────────────────────────────────────────

/// Configuration for [`daterange`].
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct DateRangeConfig {
    pub bounds: RangeBounds,
}

impl DateRangeConfig {
    pub fn with_bounds(mut self, bounds: RangeBounds) -> Self {
        self.bounds = bounds;
        self
    }
}

/// `daterange` column over `T` (`NaiveDate` or `String`).
#[derive(Debug, Clone, Copy)]
pub struct DateRange<T = NaiveDate> {
    config: DateRangeConfig,
    _element: PhantomData<fn() -> T>,
}

impl_bounds_accessor!(DateRange);

impl<T> CustomType for DateRange<T>
where
    T: RangeElement + PartialOrd,
{
    type Data = RangeValue<T>;
    type Driver = String;

    fn data_type(&self) -> String {
        "daterange".to_string()
    }

    fn to_driver(&self, value: &RangeValue<T>) -> ExprResult<String> {
        encode_ordered(value, self.config.bounds)
    }

    fn from_driver(&self, value: String) -> ExprResult<RangeValue<T>> {
        decode_range(&value)
    }
}

/// Date range column.
pub fn daterange<T>(name: impl IntoIdent, config: DateRangeConfig) -> ExprResult<Column<DateRange<T>>>
where
    T: RangeElement + PartialOrd,
{
    Column::new(
        name,
        DateRange {
            config,
            _element: PhantomData,
        },
    )
}

// ─── int4range / int8range ──────────────────────────────────────────────────

/// Integer width of an [`intrange`] column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "u8")]
pub enum IntRangeSize {
    /// `int4range`
    #[default]
    Int4,
    /// `int8range`
    Int8,
}

impl TryFrom<u8> for IntRangeSize {
    type Error = ExprError;

    fn try_from(size: u8) -> ExprResult<Self> {
        match size {
            4 => Ok(IntRangeSize::Int4),
            8 => Ok(IntRangeSize::Int8),
            other => Err(ExprError::validation(format!(
                "intrange size must be 4 or 8, got {other}"
            ))),
        }
    }
}

/// Configuration for [`intrange`].
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct IntRangeConfig {
    pub size: IntRangeSize,
    pub bounds: RangeBounds,
}

impl IntRangeConfig {
    pub fn with_size(mut self, size: IntRangeSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_bounds(mut self, bounds: RangeBounds) -> Self {
        self.bounds = bounds;
        self
    }
}

/// `int4range` / `int8range` column. Values are `i64` either way; `int4`
/// columns reject bounds outside the `i32` range.
#[derive(Debug, Clone, Copy)]
pub struct IntRange {
    config: IntRangeConfig,
}

impl IntRange {
    pub fn bounds(&self) -> RangeBounds {
        self.config.bounds
    }

    fn check_width(&self, value: &RangeValue<i64>) -> ExprResult<()> {
        if self.config.size == IntRangeSize::Int8 {
            return Ok(());
        }
        for bound in value.lower.iter().chain(value.upper.iter()) {
            if i32::try_from(*bound).is_err() {
                return Err(ExprError::format(format!(
                    "bound {bound} does not fit in int4range"
                )));
            }
        }
        Ok(())
    }
}

impl CustomType for IntRange {
    type Data = RangeValue<i64>;
    type Driver = String;

    fn data_type(&self) -> String {
        match self.config.size {
            IntRangeSize::Int4 => "int4range".to_string(),
            IntRangeSize::Int8 => "int8range".to_string(),
        }
    }

    fn to_driver(&self, value: &RangeValue<i64>) -> ExprResult<String> {
        self.check_width(value)?;
        encode_ordered(value, self.config.bounds)
    }

    fn from_driver(&self, value: String) -> ExprResult<RangeValue<i64>> {
        decode_range(&value)
    }
}

/// Integer range column.
pub fn intrange(name: impl IntoIdent, config: IntRangeConfig) -> ExprResult<Column<IntRange>> {
    Column::new(name, IntRange { config })
}

// ─── numrange ───────────────────────────────────────────────────────────────

/// Configuration for [`numrange`].
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct NumRangeConfig {
    pub bounds: RangeBounds,
}

impl NumRangeConfig {
    pub fn with_bounds(mut self, bounds: RangeBounds) -> Self {
        self.bounds = bounds;
        self
    }
}

/// `numrange` column over `T` (`f64`, or `rust_decimal::Decimal` with the
/// `rust_decimal` feature).
#[derive(Debug, Clone, Copy)]
pub struct NumRange<T = f64> {
    config: NumRangeConfig,
    _element: PhantomData<fn() -> T>,
}

impl_bounds_accessor!(NumRange);

impl<T> CustomType for NumRange<T>
where
    T: RangeElement + PartialOrd,
{
    type Data = RangeValue<T>;
    type Driver = String;

    fn data_type(&self) -> String {
        "numrange".to_string()
    }

    fn to_driver(&self, value: &RangeValue<T>) -> ExprResult<String> {
        encode_ordered(value, self.config.bounds)
    }

    fn from_driver(&self, value: String) -> ExprResult<RangeValue<T>> {
        decode_range(&value)
    }
}

/// Numeric range column.
pub fn numrange<T>(name: impl IntoIdent, config: NumRangeConfig) -> ExprResult<Column<NumRange<T>>>
where
    T: RangeElement + PartialOrd,
{
    Column::new(
        name,
        NumRange {
            config,
            _element: PhantomData,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BoundType;

    #[test]
    fn data_types() {
        let c = tsrange::<NaiveDateTime>("during", TsRangeConfig::default()).unwrap();
        assert_eq!(c.data_type(), "tsrange");
        let c = tsrange::<chrono::DateTime<chrono::Utc>>("during", TsRangeConfig::default().with_timezone())
            .unwrap();
        assert_eq!(c.data_type(), "tstzrange");
        let c = intrange("seats", IntRangeConfig::default().with_size(IntRangeSize::Int8)).unwrap();
        assert_eq!(c.definition(), "seats int8range");
    }

    #[test]
    fn intrange_binds_with_cast() {
        let c = intrange("seats", IntRangeConfig::default()).unwrap();
        let q = c.bind(&RangeValue::between(1, 10)).unwrap();
        assert_eq!(q.to_sql(), "$1::text::int4range");
        assert_eq!(format!("{:?}", q.params_ref()), r#"["[1,10)"]"#);
        assert_eq!(c.select_expr().to_sql(), "seats::text");
    }

    #[test]
    fn int4_rejects_wide_bounds() {
        let c = intrange("seats", IntRangeConfig::default()).unwrap();
        let err = c.encode(&RangeValue::between(0, i64::from(i32::MAX) + 1)).unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn inverted_bounds_rejected() {
        let c = numrange::<f64>("price", NumRangeConfig::default()).unwrap();
        assert!(c.encode(&RangeValue::between(5.0, 1.0)).unwrap_err().is_validation());
    }

    #[test]
    fn configured_brackets() {
        let bounds = RangeBounds::inclusive();
        let c = daterange::<NaiveDate>("stay", DateRangeConfig::default().with_bounds(bounds)).unwrap();
        let d1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(
            c.encode(&RangeValue::between(d1, d2)).unwrap(),
            "[2024-01-01,2024-01-07]"
        );
        assert_eq!(c.ty().bounds().upper, BoundType::Inclusive);
    }

    #[test]
    fn string_mode_passes_text_through() {
        let c = tsrange::<String>("during", TsRangeConfig::default()).unwrap();
        let r = c
            .decode(r#"["2024-01-01 10:00:00","2024-01-01 12:00:00")"#.to_string())
            .unwrap();
        assert_eq!(r.lower.as_deref(), Some("2024-01-01 10:00:00"));
        assert_eq!(
            c.encode(&r).unwrap(),
            r#"["2024-01-01 10:00:00","2024-01-01 12:00:00")"#
        );
    }

    #[test]
    fn empty_range_round_trip() {
        let c = intrange("seats", IntRangeConfig::default()).unwrap();
        let text = c.encode(&RangeValue::empty()).unwrap();
        assert_eq!(text, "empty");
        assert!(c.decode(text).unwrap().is_empty());
    }
}
