//! Application-side range validation.
//!
//! A [`RangeSchema`] bounds the values a range column accepts and checks
//! `{ "lower": ..., "upper": ... }` JSON input before it reaches the
//! database.

use crate::error::{ExprError, ExprResult};
use crate::types::RangeValue;
use chrono::{NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt::Display;

/// Allowed span for range bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSchema<T> {
    pub min: Option<T>,
    pub max: Option<T>,
}

impl<T> Default for RangeSchema<T> {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
        }
    }
}

impl<T> RangeSchema<T>
where
    T: PartialOrd + Display,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min(mut self, min: T) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: T) -> Self {
        self.max = Some(max);
        self
    }

    /// Check ordering and the configured limits. Empty ranges always pass.
    pub fn validate(&self, value: &RangeValue<T>) -> ExprResult<()> {
        if value.is_empty() {
            return Ok(());
        }
        value.check_order()?;
        if let (Some(min), Some(lower)) = (&self.min, &value.lower)
            && lower < min
        {
            return Err(ExprError::validation(format!(
                "range lower bound {lower} is below minimum {min}"
            )));
        }
        if let (Some(max), Some(upper)) = (&self.max, &value.upper)
            && upper > max
        {
            return Err(ExprError::validation(format!(
                "range upper bound {upper} is above maximum {max}"
            )));
        }
        Ok(())
    }

    /// Deserialize a `{ "lower", "upper" }` object and validate it.
    ///
    /// Missing or `null` bounds are unbounded, as are the strings
    /// `"infinity"` and `"-infinity"`.
    pub fn parse_json(&self, value: &Value) -> ExprResult<RangeValue<T>>
    where
        T: DeserializeOwned,
    {
        let Value::Object(map) = value else {
            return Err(ExprError::validation(format!(
                "expected a range object, got {value}"
            )));
        };
        let lower = json_bound(map.get("lower"), "lower")?;
        let upper = json_bound(map.get("upper"), "upper")?;
        let range = RangeValue::new(lower, upper);
        self.validate(&range)?;
        Ok(range)
    }
}

fn json_bound<T: DeserializeOwned>(value: Option<&Value>, side: &str) -> ExprResult<Option<T>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if is_infinity(s) => Ok(None),
        Some(v) => serde_json::from_value(v.clone())
            .map(Some)
            .map_err(|e| ExprError::validation(format!("invalid {side} bound {v}: {e}"))),
    }
}

fn is_infinity(s: &str) -> bool {
    matches!(s, "infinity" | "-infinity")
}

/// Returns `true` if `value` is an object with `lower` and `upper` keys and
/// nothing else.
pub fn is_range(value: &Value) -> bool {
    match value {
        Value::Object(map) => {
            map.len() == 2 && map.contains_key("lower") && map.contains_key("upper")
        }
        _ => false,
    }
}

/// Schema for integer ranges.
pub fn intrange_schema(min: Option<i64>, max: Option<i64>) -> RangeSchema<i64> {
    RangeSchema { min, max }
}

/// Schema for numeric ranges.
pub fn numrange_schema(min: Option<f64>, max: Option<f64>) -> RangeSchema<f64> {
    RangeSchema { min, max }
}

/// Schema for timestamp ranges.
pub fn tsrange_schema(
    min: Option<NaiveDateTime>,
    max: Option<NaiveDateTime>,
) -> RangeSchema<NaiveDateTime> {
    RangeSchema { min, max }
}

/// Schema for date ranges.
pub fn daterange_schema(min: Option<NaiveDate>, max: Option<NaiveDate>) -> RangeSchema<NaiveDate> {
    RangeSchema { min, max }
}
