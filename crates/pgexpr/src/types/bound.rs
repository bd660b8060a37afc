//! Bracket notation for range bounds.

use serde::Deserialize;

/// Whether a range bound includes its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundType {
    /// `[value` or `value]`
    Inclusive,
    /// `(value` or `value)`
    Exclusive,
}

impl BoundType {
    /// Returns `true` if this bound is inclusive.
    pub fn is_inclusive(self) -> bool {
        matches!(self, BoundType::Inclusive)
    }
}

/// Which end of a range a bound sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundSide {
    Lower,
    Upper,
}

/// Bracket character for a bound.
pub fn bracket(side: BoundSide, ty: BoundType) -> char {
    match (side, ty) {
        (BoundSide::Lower, BoundType::Inclusive) => '[',
        (BoundSide::Lower, BoundType::Exclusive) => '(',
        (BoundSide::Upper, BoundType::Inclusive) => ']',
        (BoundSide::Upper, BoundType::Exclusive) => ')',
    }
}

/// Bound type for a bracket character, if `c` is a valid bracket for `side`.
pub fn bound_type(side: BoundSide, c: char) -> Option<BoundType> {
    match (side, c) {
        (BoundSide::Lower, '[') | (BoundSide::Upper, ']') => Some(BoundType::Inclusive),
        (BoundSide::Lower, '(') | (BoundSide::Upper, ')') => Some(BoundType::Exclusive),
        _ => None,
    }
}

/// Bound types for both ends of a range.
///
/// Defaults to the canonical PostgreSQL form: lower inclusive, upper exclusive
/// (`[lower,upper)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(default)]
pub struct RangeBounds {
    pub lower: BoundType,
    pub upper: BoundType,
}

impl Default for RangeBounds {
    fn default() -> Self {
        Self {
            lower: BoundType::Inclusive,
            upper: BoundType::Exclusive,
        }
    }
}

impl RangeBounds {
    pub fn new(lower: BoundType, upper: BoundType) -> Self {
        Self { lower, upper }
    }

    /// `[lower,upper]`
    pub fn inclusive() -> Self {
        Self::new(BoundType::Inclusive, BoundType::Inclusive)
    }

    /// `(lower,upper)`
    pub fn exclusive() -> Self {
        Self::new(BoundType::Exclusive, BoundType::Exclusive)
    }

    /// Set the lower bound type.
    pub fn with_lower(mut self, lower: BoundType) -> Self {
        self.lower = lower;
        self
    }

    /// Set the upper bound type.
    pub fn with_upper(mut self, upper: BoundType) -> Self {
        self.upper = upper;
        self
    }

    /// Opening bracket character.
    pub fn open(&self) -> char {
        bracket(BoundSide::Lower, self.lower)
    }

    /// Closing bracket character.
    pub fn close(&self) -> char {
        bracket(BoundSide::Upper, self.upper)
    }
}
