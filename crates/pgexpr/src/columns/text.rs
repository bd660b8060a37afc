//! Text column types: `citext`, `regconfig`, `tsvector` and generated search vectors.

use super::{Column, CustomType};
use crate::error::{ExprError, ExprResult};
use crate::expr::Weight;
use crate::ident::{Ident, IntoIdent};
use crate::sql::quote_literal;
use crate::types::Regconfig;
use serde::Deserialize;

/// Case-insensitive text (`citext` extension).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Citext;

impl CustomType for Citext {
    type Data = String;
    type Driver = String;

    fn data_type(&self) -> String {
        "citext".to_string()
    }

    fn to_driver(&self, value: &String) -> ExprResult<String> {
        Ok(value.clone())
    }

    fn from_driver(&self, value: String) -> ExprResult<String> {
        Ok(value)
    }
}

/// `citext` column.
pub fn citext(name: impl IntoIdent) -> ExprResult<Column<Citext>> {
    Column::new(name, Citext)
}

/// Text search configuration column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegconfigType;

impl CustomType for RegconfigType {
    type Data = Regconfig;
    type Driver = String;

    fn data_type(&self) -> String {
        "regconfig".to_string()
    }

    fn to_driver(&self, value: &Regconfig) -> ExprResult<String> {
        Ok(value.as_str().to_string())
    }

    fn from_driver(&self, value: String) -> ExprResult<Regconfig> {
        value.parse()
    }
}

/// `regconfig` column.
pub fn regconfig(name: impl IntoIdent) -> ExprResult<Column<RegconfigType>> {
    Column::new(name, RegconfigType)
}

/// Plain `tsvector` column, exchanged as its text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tsvector;

impl CustomType for Tsvector {
    type Data = String;
    type Driver = String;

    fn data_type(&self) -> String {
        "tsvector".to_string()
    }

    fn to_driver(&self, value: &String) -> ExprResult<String> {
        Ok(value.clone())
    }

    fn from_driver(&self, value: String) -> ExprResult<String> {
        Ok(value)
    }
}

/// `tsvector` column.
pub fn tsvector(name: impl IntoIdent) -> ExprResult<Column<Tsvector>> {
    Column::new(name, Tsvector)
}

/// Configuration for [`generated_tsvector`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeneratedTsvectorConfig {
    /// Source columns, in weight order when `weighted`.
    pub sources: Vec<String>,
    /// Text search configuration the vector is built with.
    pub language: Regconfig,
    /// Weight each source by position (`A` for the first, up to `D`).
    pub weighted: bool,
}

impl GeneratedTsvectorConfig {
    pub fn new<S: Into<String>>(sources: impl IntoIterator<Item = S>) -> Self {
        Self {
            sources: sources.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_language(mut self, language: Regconfig) -> Self {
        self.language = language;
        self
    }

    pub fn weighted(mut self) -> Self {
        self.weighted = true;
        self
    }
}

/// A `tsvector` column generated from other columns of the same row.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedTsvector {
    sources: Vec<Ident>,
    language: Regconfig,
    weighted: bool,
}

impl GeneratedTsvector {
    /// Validate the configuration: at least one source, every source a valid
    /// identifier, and no more sources than weights when `weighted`.
    pub fn new(config: GeneratedTsvectorConfig) -> ExprResult<Self> {
        if config.sources.is_empty() {
            return Err(ExprError::validation(
                "generated tsvector needs at least one source column",
            ));
        }
        if config.weighted && config.sources.len() > Weight::ALL.len() {
            return Err(ExprError::validation(format!(
                "weighted tsvector supports at most {} sources, got {}",
                Weight::ALL.len(),
                config.sources.len()
            )));
        }
        let sources = config
            .sources
            .iter()
            .map(|s| Ident::parse(s))
            .collect::<ExprResult<Vec<_>>>()?;
        Ok(Self {
            sources,
            language: config.language,
            weighted: config.weighted,
        })
    }

    /// The generation expression (without `generated always as`).
    pub fn expression(&self) -> String {
        let language = quote_literal(self.language.as_str());
        if self.weighted {
            self.sources
                .iter()
                .zip(Weight::ALL)
                .map(|(source, weight)| {
                    format!("setweight(to_tsvector({language}, coalesce({source}, '')), '{weight}')")
                })
                .collect::<Vec<_>>()
                .join(" || ")
        } else {
            let joined = self
                .sources
                .iter()
                .map(Ident::to_sql)
                .collect::<Vec<_>>()
                .join(" || ' ' || ");
            format!("to_tsvector({language}, {joined})")
        }
    }
}

impl CustomType for GeneratedTsvector {
    type Data = String;
    type Driver = String;

    fn data_type(&self) -> String {
        format!("tsvector generated always as ({}) stored", self.expression())
    }

    fn cast_type(&self) -> String {
        "tsvector".to_string()
    }

    fn to_driver(&self, value: &String) -> ExprResult<String> {
        Ok(value.clone())
    }

    fn from_driver(&self, value: String) -> ExprResult<String> {
        Ok(value)
    }
}

/// Generated `tsvector` column.
pub fn generated_tsvector(
    name: impl IntoIdent,
    config: GeneratedTsvectorConfig,
) -> ExprResult<Column<GeneratedTsvector>> {
    Column::new(name, GeneratedTsvector::new(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_types() {
        assert_eq!(citext("email").unwrap().definition(), "email citext");
        assert_eq!(tsvector("search").unwrap().definition(), "search tsvector");
        let cfg = regconfig("lang").unwrap();
        assert_eq!(cfg.definition(), "lang regconfig");
        assert_eq!(cfg.decode("german".into()).unwrap(), Regconfig::German);
    }

    #[test]
    fn generated_unweighted() {
        let col = generated_tsvector(
            "search",
            GeneratedTsvectorConfig::new(["title", "body"]),
        )
        .unwrap();
        assert_eq!(
            col.data_type(),
            "tsvector generated always as (to_tsvector('english', title || ' ' || body)) stored"
        );
    }

    #[test]
    fn generated_weighted_letters() {
        let col = generated_tsvector(
            "search",
            GeneratedTsvectorConfig::new(["title", "summary", "body"])
                .with_language(Regconfig::Simple)
                .weighted(),
        )
        .unwrap();
        let expr = col.ty().expression();
        assert!(expr.starts_with("setweight(to_tsvector('simple', coalesce(title, '')), 'A')"));
        assert!(expr.contains("coalesce(summary, '')), 'B')"));
        assert!(expr.ends_with("coalesce(body, '')), 'C')"));
        assert_eq!(col.bind(&"x".to_string()).unwrap().to_sql(), "$1::text::tsvector");
    }

    #[test]
    fn generated_rejects_bad_sources() {
        let err = generated_tsvector(
            "search",
            GeneratedTsvectorConfig::new(["title); drop table x; --"]),
        )
        .unwrap_err();
        assert!(err.is_validation());

        let err = generated_tsvector("search", GeneratedTsvectorConfig::default()).unwrap_err();
        assert!(err.is_validation());

        let err = generated_tsvector(
            "search",
            GeneratedTsvectorConfig::new(["a", "b", "c", "d", "e"]).weighted(),
        )
        .unwrap_err();
        assert!(err.is_validation());
    }
}
