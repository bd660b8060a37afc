//! `fuzzystrmatch` functions.

use crate::expr::call;
use crate::sql::{IntoExpr, Sql};

/// `soundex(text)`
pub fn soundex(text: impl IntoExpr) -> Sql {
    call("soundex", [text.into_expr()])
}

/// `difference(a, b)`: number of matching soundex positions (0 to 4).
pub fn difference(a: impl IntoExpr, b: impl IntoExpr) -> Sql {
    call("difference", [a.into_expr(), b.into_expr()])
}

/// `daitch_mokotoff(source)`: array of Daitch-Mokotoff soundex codes.
pub fn daitch_mokotoff(source: impl IntoExpr) -> Sql {
    call("daitch_mokotoff", [source.into_expr()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::sql;

    #[test]
    fn renders_calls() {
        assert_eq!(soundex("Anne").to_sql(), "soundex($1::text)");
        assert_eq!(difference(sql("a"), "Ann").to_sql(), "difference(a, $1::text)");
        assert_eq!(daitch_mokotoff(sql("name")).to_sql(), "daitch_mokotoff(name)");
    }
}
