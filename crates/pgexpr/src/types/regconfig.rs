//! Text search configuration names.

use crate::error::{ExprError, ExprResult};
use crate::sql::{IntoExpr, Sql, quote_literal};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

macro_rules! regconfigs {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// A text search configuration (`regconfig`).
        ///
        /// The named variants are the configurations shipped with PostgreSQL;
        /// [`Regconfig::Custom`] covers anything else installed on the server.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum Regconfig {
            $(
                $variant,
            )*
            Custom(String),
        }

        impl Regconfig {
            /// All built-in configurations.
            pub const BUILTIN: &'static [Regconfig] = &[$(Regconfig::$variant),*];

            pub fn as_str(&self) -> &str {
                match self {
                    $(Regconfig::$variant => $name,)*
                    Regconfig::Custom(name) => name,
                }
            }

            fn builtin(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Regconfig::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

regconfigs! {
    Simple => "simple",
    Arabic => "arabic",
    Armenian => "armenian",
    Basque => "basque",
    Catalan => "catalan",
    Danish => "danish",
    Dutch => "dutch",
    English => "english",
    Finnish => "finnish",
    French => "french",
    German => "german",
    Greek => "greek",
    Hindi => "hindi",
    Hungarian => "hungarian",
    Indonesian => "indonesian",
    Irish => "irish",
    Italian => "italian",
    Lithuanian => "lithuanian",
    Nepali => "nepali",
    Norwegian => "norwegian",
    Portuguese => "portuguese",
    Romanian => "romanian",
    Russian => "russian",
    Serbian => "serbian",
    Spanish => "spanish",
    Swedish => "swedish",
    Tamil => "tamil",
    Turkish => "turkish",
    Yiddish => "yiddish",
}

impl Default for Regconfig {
    fn default() -> Self {
        Regconfig::English
    }
}

impl Regconfig {
    /// `'english'::regconfig`
    pub fn to_expr(&self) -> Sql {
        Sql::new(quote_literal(self.as_str())).cast("regconfig")
    }
}

impl FromStr for Regconfig {
    type Err = ExprError;

    fn from_str(s: &str) -> ExprResult<Self> {
        let name = s.trim();
        if name.is_empty() {
            return Err(ExprError::validation("regconfig name cannot be empty"));
        }
        let lower = name.to_ascii_lowercase();
        Ok(Regconfig::builtin(&lower).unwrap_or_else(|| Regconfig::Custom(name.to_string())))
    }
}

impl fmt::Display for Regconfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Regconfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl IntoExpr for Regconfig {
    fn into_expr(self) -> Sql {
        self.to_expr()
    }
}

impl IntoExpr for &Regconfig {
    fn into_expr(self) -> Sql {
        self.to_expr()
    }
}
