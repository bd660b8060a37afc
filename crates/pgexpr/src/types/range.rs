//! PostgreSQL range literal codec.
//!
//! Converts [`RangeValue<T>`] to and from the text form range columns accept
//! and return (`[1,5)`, `["2024-01-01 10:00:00+00",)`, `empty`). Element
//! values go through [`RangeElement`], so the same codec serves `int4range`,
//! `int8range`, `numrange`, `tsrange`, `tstzrange` and `daterange`.

use super::bound::{BoundSide, RangeBounds, bound_type};
use crate::error::{ExprError, ExprResult};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

/// The empty-range token.
pub const EMPTY_RANGE: &str = "empty";

/// A range value: two optional bounds, or the empty range.
///
/// `None` bounds are unbounded (infinite) endpoints. Inclusivity is not part
/// of the value; it is chosen per column with [`RangeBounds`].
///
/// # Examples
///
/// ```ignore
/// use pgexpr::types::RangeValue;
///
/// let r = RangeValue::new(Some(1), Some(10));
/// let open_ended = RangeValue::new(Some(1), None);
/// let nothing = RangeValue::<i32>::empty();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RangeValue<T> {
    /// Lower bound, or `None` for unbounded.
    pub lower: Option<T>,
    /// Upper bound, or `None` for unbounded.
    pub upper: Option<T>,
    /// Whether this is the empty range.
    empty: bool,
}

impl<T> RangeValue<T> {
    /// Creates a range with the given bounds.
    pub fn new(lower: Option<T>, upper: Option<T>) -> Self {
        Self {
            lower,
            upper,
            empty: false,
        }
    }

    /// Creates a range with both bounds present.
    pub fn between(lower: T, upper: T) -> Self {
        Self::new(Some(lower), Some(upper))
    }

    /// Creates the empty range (contains no values).
    pub fn empty() -> Self {
        Self {
            lower: None,
            upper: None,
            empty: true,
        }
    }

    /// Creates an unbounded range `(-infinity, +infinity)`.
    pub fn unbounded() -> Self {
        Self::new(None, None)
    }

    /// Returns `true` if this is the empty range.
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Maps both bounds through `f`.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> RangeValue<U> {
        RangeValue {
            lower: self.lower.map(&mut f),
            upper: self.upper.map(&mut f),
            empty: self.empty,
        }
    }
}

impl<T: PartialOrd> RangeValue<T> {
    /// Checks `lower <= upper` when both bounds are present.
    pub fn check_order(&self) -> ExprResult<()> {
        if let (Some(lower), Some(upper)) = (&self.lower, &self.upper) {
            if lower > upper {
                return Err(ExprError::validation(
                    "range lower bound must be less than or equal to upper bound",
                ));
            }
        }
        Ok(())
    }
}

impl<T> From<std::ops::Range<T>> for RangeValue<T> {
    fn from(r: std::ops::Range<T>) -> Self {
        Self::between(r.start, r.end)
    }
}

/// A decoded range together with the brackets the text actually used.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRange<T> {
    pub value: RangeValue<T>,
    pub bounds: RangeBounds,
}

/// A scalar that can appear as a range bound.
pub trait RangeElement: Sized {
    /// Range type over this element, if there is a single natural one.
    /// `String` has none: its text may belong to any range type.
    const RANGE_TYPE: Option<&'static str> = None;

    /// Canonical text for this bound (unquoted).
    fn encode_bound(&self) -> ExprResult<String>;

    /// Parse one bound component. `Ok(None)` means the component denotes an
    /// unbounded endpoint (`infinity` for date/time types).
    fn decode_bound(text: &str) -> ExprResult<Option<Self>>;
}

// ─── Encode ─────────────────────────────────────────────────────────────────

/// Encode a range using each element's [`RangeElement`] text.
pub fn encode_range<T: RangeElement>(value: &RangeValue<T>, bounds: RangeBounds) -> ExprResult<String> {
    encode_range_with(value, bounds, T::encode_bound)
}

/// Encode a range with an explicit bound formatter.
pub fn encode_range_with<T, F>(value: &RangeValue<T>, bounds: RangeBounds, mut formatter: F) -> ExprResult<String>
where
    F: FnMut(&T) -> ExprResult<String>,
{
    if value.is_empty() {
        return Ok(EMPTY_RANGE.to_string());
    }

    let mut out = String::new();
    out.push(bounds.open());
    if let Some(lower) = &value.lower {
        write_component(&mut out, &formatter(lower)?);
    }
    out.push(',');
    if let Some(upper) = &value.upper {
        write_component(&mut out, &formatter(upper)?);
    }
    out.push(bounds.close());
    Ok(out)
}

fn needs_quotes(s: &str) -> bool {
    s.is_empty()
        || s.chars()
            .any(|c| matches!(c, ',' | '(' | ')' | '[' | ']' | '"' | '\\') || c.is_whitespace())
}

fn write_component(out: &mut String, text: &str) {
    if !needs_quotes(text) {
        out.push_str(text);
        return;
    }
    out.push('"');
    for c in text.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
}

// ─── Decode ─────────────────────────────────────────────────────────────────

/// Decode range text into a [`RangeValue`].
///
/// Bracket types are read but not applied: `[1,5]` and `[1,5)` both decode to
/// `lower = 1, upper = 5`. Use [`parse_range`] when the brackets matter.
pub fn decode_range<T: RangeElement>(text: &str) -> ExprResult<RangeValue<T>> {
    parse_range(text).map(|parsed| parsed.value)
}

/// Decode range text with an explicit scalar parser.
pub fn decode_range_with<T, F>(text: &str, mut parser: F) -> ExprResult<RangeValue<T>>
where
    F: FnMut(&str) -> ExprResult<T>,
{
    parse_range_with(text, |s| parser(s).map(Some)).map(|parsed| parsed.value)
}

/// Decode range text, keeping the observed bound types.
pub fn parse_range<T: RangeElement>(text: &str) -> ExprResult<ParsedRange<T>> {
    parse_range_with(text, T::decode_bound)
}

fn parse_range_with<T, F>(text: &str, parser: F) -> ExprResult<ParsedRange<T>>
where
    F: FnMut(&str) -> ExprResult<Option<T>>,
{
    let result = parse_range_text(text, parser);
    if let Err(e) = &result {
        tracing::debug!(target: "pgexpr.codec", input = text, error = %e, "range decode failed");
    }
    result
}

fn parse_range_text<T, F>(text: &str, mut parser: F) -> ExprResult<ParsedRange<T>>
where
    F: FnMut(&str) -> ExprResult<Option<T>>,
{
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case(EMPTY_RANGE) {
        return Ok(ParsedRange {
            value: RangeValue::empty(),
            bounds: RangeBounds::default(),
        });
    }

    let mut chars = trimmed.chars();
    let (Some(open), Some(close)) = (chars.next(), chars.next_back()) else {
        return Err(ExprError::parse(text, "expected a bracketed range or `empty`"));
    };
    let lower_type = bound_type(BoundSide::Lower, open)
        .ok_or_else(|| ExprError::parse(text, format!("invalid lower bracket {open:?}")))?;
    let upper_type = bound_type(BoundSide::Upper, close)
        .ok_or_else(|| ExprError::parse(text, format!("invalid upper bracket {close:?}")))?;

    let components = split_components(chars.as_str()).map_err(|m| ExprError::parse(text, m))?;
    let [lower, upper]: [Option<String>; 2] = components
        .try_into()
        .map_err(|_| ExprError::parse(text, "expected exactly two bound components"))?;

    let lower = match lower {
        Some(s) => parser(&s)?,
        None => None,
    };
    let upper = match upper {
        Some(s) => parser(&s)?,
        None => None,
    };

    Ok(ParsedRange {
        value: RangeValue::new(lower, upper),
        bounds: RangeBounds::new(lower_type, upper_type),
    })
}

/// Split the text between the brackets on the top-level comma.
///
/// `None` marks an unquoted empty component (unbounded).
fn split_components(inner: &str) -> Result<Vec<Option<String>>, &'static str> {
    let mut out = Vec::with_capacity(2);
    let mut cur = String::new();
    let mut quoted = false;
    let mut in_quotes = false;

    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some(escaped) => cur.push(escaped),
                None => return Err("trailing backslash"),
            },
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    cur.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => {
                in_quotes = true;
                quoted = true;
            }
            ',' if !in_quotes => out.push(finish(&mut cur, &mut quoted)),
            _ => cur.push(c),
        }
    }

    if in_quotes {
        return Err("unterminated quoted bound");
    }
    out.push(finish(&mut cur, &mut quoted));
    Ok(out)
}

fn finish(cur: &mut String, quoted: &mut bool) -> Option<String> {
    let component = if !*quoted && cur.is_empty() {
        None
    } else {
        Some(std::mem::take(cur))
    };
    *quoted = false;
    component
}

// ─── Element impls ──────────────────────────────────────────────────────────

fn is_infinity(text: &str) -> bool {
    matches!(
        text.to_ascii_lowercase().as_str(),
        "infinity" | "+infinity" | "-infinity"
    )
}

fn bad_bound(text: &str, expected: &str) -> ExprError {
    ExprError::parse(text, format!("invalid {expected} bound"))
}

macro_rules! impl_integer_element {
    ($($ty:ty => $name:literal, $range:literal),* $(,)?) => {
        $(
            impl RangeElement for $ty {
                const RANGE_TYPE: Option<&'static str> = Some($range);

                fn encode_bound(&self) -> ExprResult<String> {
                    Ok(self.to_string())
                }

                fn decode_bound(text: &str) -> ExprResult<Option<Self>> {
                    text.trim().parse().map(Some).map_err(|_| bad_bound(text, $name))
                }
            }
        )*
    };
}

impl_integer_element!(i32 => "int4", "int4range", i64 => "int8", "int8range");

impl RangeElement for f64 {
    const RANGE_TYPE: Option<&'static str> = Some("numrange");

    fn encode_bound(&self) -> ExprResult<String> {
        if self.is_nan() {
            return Err(ExprError::format("NaN cannot be used as a range bound"));
        }
        if self.is_infinite() {
            let text = if *self > 0.0 { "infinity" } else { "-infinity" };
            return Ok(text.to_string());
        }
        Ok(self.to_string())
    }

    fn decode_bound(text: &str) -> ExprResult<Option<Self>> {
        text.trim()
            .parse()
            .map(Some)
            .map_err(|_| bad_bound(text, "numeric"))
    }
}

impl RangeElement for String {
    fn encode_bound(&self) -> ExprResult<String> {
        Ok(self.clone())
    }

    fn decode_bound(text: &str) -> ExprResult<Option<Self>> {
        Ok(Some(text.to_string()))
    }
}

impl RangeElement for NaiveDate {
    const RANGE_TYPE: Option<&'static str> = Some("daterange");

    fn encode_bound(&self) -> ExprResult<String> {
        Ok(self.format("%Y-%m-%d").to_string())
    }

    fn decode_bound(text: &str) -> ExprResult<Option<Self>> {
        let text = text.trim();
        if is_infinity(text) {
            return Ok(None);
        }
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| bad_bound(text, "date"))
    }
}

impl RangeElement for NaiveDateTime {
    const RANGE_TYPE: Option<&'static str> = Some("tsrange");

    fn encode_bound(&self) -> ExprResult<String> {
        Ok(self.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
    }

    fn decode_bound(text: &str) -> ExprResult<Option<Self>> {
        let text = text.trim();
        if is_infinity(text) {
            return Ok(None);
        }
        ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
            .map(Some)
            .ok_or_else(|| bad_bound(text, "timestamp"))
    }
}

fn parse_timestamptz(text: &str) -> ExprResult<Option<DateTime<FixedOffset>>> {
    let text = text.trim();
    if is_infinity(text) {
        return Ok(None);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(Some(dt));
    }
    ["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"]
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(text, fmt).ok())
        .map(Some)
        .ok_or_else(|| bad_bound(text, "timestamptz"))
}

impl RangeElement for DateTime<FixedOffset> {
    const RANGE_TYPE: Option<&'static str> = Some("tstzrange");

    fn encode_bound(&self) -> ExprResult<String> {
        Ok(self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    fn decode_bound(text: &str) -> ExprResult<Option<Self>> {
        parse_timestamptz(text)
    }
}

impl RangeElement for DateTime<Utc> {
    const RANGE_TYPE: Option<&'static str> = Some("tstzrange");

    fn encode_bound(&self) -> ExprResult<String> {
        Ok(self.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }

    fn decode_bound(text: &str) -> ExprResult<Option<Self>> {
        Ok(parse_timestamptz(text)?.map(|dt| dt.with_timezone(&Utc)))
    }
}

#[cfg(feature = "rust_decimal")]
impl RangeElement for rust_decimal::Decimal {
    const RANGE_TYPE: Option<&'static str> = Some("numrange");

    fn encode_bound(&self) -> ExprResult<String> {
        Ok(self.to_string())
    }

    fn decode_bound(text: &str) -> ExprResult<Option<Self>> {
        use std::str::FromStr;
        rust_decimal::Decimal::from_str(text.trim())
            .map(Some)
            .map_err(|_| bad_bound(text, "numeric"))
    }
}
