//! Constant SQL values.

use crate::sql::{Sql, sql};
use crate::types::range::EMPTY_RANGE;

/// `'{}'::json`
pub fn empty_json_object() -> Sql {
    sql("'{}'::json")
}

/// `'[]'::json`
pub fn empty_json_array() -> Sql {
    sql("'[]'::json")
}

/// `'{}'`: empty array literal, untyped.
pub fn empty_array() -> Sql {
    sql("'{}'")
}

/// `'true'`
pub fn tru() -> Sql {
    sql("'true'")
}

/// `'false'`
pub fn fal() -> Sql {
    sql("'false'")
}

/// `'true'` or `'false'`. Inlined, not bound.
pub fn bool(value: bool) -> Sql {
    if value { tru() } else { fal() }
}

/// `null`
pub fn nul() -> Sql {
    sql("null")
}

/// `'infinity'`, valid for date, timestamp and numeric types.
pub fn infinity() -> Sql {
    sql("'infinity'")
}

/// `'today'`
pub fn today() -> Sql {
    sql("'today'")
}

/// `'empty'`, the empty range of any range type.
pub fn empty_range() -> Sql {
    sql(format!("'{EMPTY_RANGE}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_are_inlined() {
        assert_eq!(empty_json_object().to_sql(), "'{}'::json");
        assert_eq!(empty_json_array().to_sql(), "'[]'::json");
        assert_eq!(empty_array().to_sql(), "'{}'");
        assert_eq!(bool(true).to_sql(), "'true'");
        assert_eq!(bool(false).to_sql(), "'false'");
        assert_eq!(nul().to_sql(), "null");
        assert_eq!(infinity().to_sql(), "'infinity'");
        assert_eq!(today().to_sql(), "'today'");
        assert_eq!(empty_range().to_sql(), "'empty'");
        assert_eq!(empty_range().param_count(), 0);
    }
}
