//! Full-text search expressions.

use super::functions::call;
use crate::sql::{IntoExpr, Sql};
use crate::types::Regconfig;
use serde::Deserialize;
use std::fmt;

/// `tsvector` label weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum Weight {
    A,
    B,
    C,
    D,
}

impl Weight {
    /// Weights in descending importance.
    pub const ALL: [Weight; 4] = [Weight::A, Weight::B, Weight::C, Weight::D];

    pub fn as_char(self) -> char {
        match self {
            Weight::A => 'A',
            Weight::B => 'B',
            Weight::C => 'C',
            Weight::D => 'D',
        }
    }

    /// Weight for the `index`-th source (`0 => A`), if there is one.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// `to_tsvector([config, ] text)`
pub fn to_tsvector(text: impl IntoExpr, regconfig: Option<Sql>) -> Sql {
    match regconfig {
        Some(cfg) => call("to_tsvector", [cfg, text.into_expr()]),
        None => call("to_tsvector", [text.into_expr()]),
    }
}

/// Options for [`to_tsquery`].
#[derive(Debug, Clone, Default)]
pub struct TsQueryOptions {
    /// Use `plainto_tsquery` (plain text input, no query operators).
    pub plain: bool,
    /// Text search configuration; the server default when `None`.
    pub regconfig: Option<Sql>,
}

impl TsQueryOptions {
    pub fn plain() -> Self {
        Self {
            plain: true,
            ..Self::default()
        }
    }

    pub fn with_regconfig(mut self, regconfig: impl IntoExpr) -> Self {
        self.regconfig = Some(regconfig.into_expr());
        self
    }
}

/// `to_tsquery([config, ] text)` or `plainto_tsquery(...)`.
pub fn to_tsquery(text: impl IntoExpr, options: TsQueryOptions) -> Sql {
    let name = if options.plain {
        "plainto_tsquery"
    } else {
        "to_tsquery"
    };
    match options.regconfig {
        Some(cfg) => call(name, [cfg, text.into_expr()]),
        None => call(name, [text.into_expr()]),
    }
}

/// `setweight(vector, 'A')`
pub fn setweight(tsvector: impl IntoExpr, weight: Weight) -> Sql {
    let mut out = Sql::new("setweight(");
    out.push_expr(tsvector)
        .push(", ")
        .push_literal(&weight.as_char().to_string())
        .push(")");
    out
}

/// `get_current_ts_config()`
pub fn get_current_ts_config() -> Sql {
    Sql::new("get_current_ts_config()")
}

/// `vector @@ query`: full-text match.
pub fn ts(vector: impl IntoExpr, query: impl IntoExpr) -> Sql {
    let mut out = vector.into_expr();
    out.push(" @@ ").push_expr(query);
    out
}

/// Shorthand for [`Regconfig::to_expr`].
pub fn regconfig(cfg: Regconfig) -> Sql {
    cfg.to_expr()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::sql;

    #[test]
    fn tsvector_with_and_without_config() {
        assert_eq!(to_tsvector(sql("body"), None).to_sql(), "to_tsvector(body)");
        assert_eq!(
            to_tsvector(sql("body"), Some(regconfig(Regconfig::English))).to_sql(),
            "to_tsvector('english'::regconfig, body)"
        );
    }

    #[test]
    fn tsquery_variants() {
        assert_eq!(
            to_tsquery("cafe & bar", TsQueryOptions::default()).to_sql(),
            "to_tsquery($1::text)"
        );
        let opts = TsQueryOptions::plain().with_regconfig(Regconfig::French);
        assert_eq!(
            to_tsquery("cafe bar", opts).to_sql(),
            "plainto_tsquery('french'::regconfig, $1::text)"
        );
    }

    #[test]
    fn setweight_literal() {
        assert_eq!(
            setweight(sql("v"), Weight::B).to_sql(),
            "setweight(v, 'B')"
        );
        assert_eq!(Weight::from_index(3), Some(Weight::D));
        assert_eq!(Weight::from_index(4), None);
    }

    #[test]
    fn match_operator() {
        let q = ts(
            sql("search"),
            to_tsquery("coffee", TsQueryOptions::plain()),
        );
        assert_eq!(q.to_sql(), "search @@ plainto_tsquery($1::text)");
    }
}
