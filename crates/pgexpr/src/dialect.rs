//! SQL dialects understood by the fragment renderer.

use serde::Deserialize;

/// Target database dialect.
///
/// Only placeholder syntax and a handful of function names differ; every
/// PostgreSQL-only helper ignores this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// `$1, $2, ...` placeholders.
    #[default]
    Postgres,
    /// `?` placeholders.
    MySql,
    /// `?` placeholders.
    Sqlite,
}

impl Dialect {
    /// Write the placeholder for the 1-based parameter `idx`.
    pub(crate) fn write_placeholder(self, out: &mut String, idx: usize) {
        match self {
            Dialect::Postgres => {
                out.push('$');
                out.push_str(&idx.to_string());
            }
            Dialect::MySql | Dialect::Sqlite => out.push('?'),
        }
    }

    /// Name of the dialect's pseudo-random number function.
    pub fn random_fn(self) -> &'static str {
        match self {
            Dialect::Postgres | Dialect::Sqlite => "random",
            Dialect::MySql => "rand",
        }
    }
}
