//! Nanoid generation on top of `pgcrypto`.
//!
//! Expects the `nanoid` / `nanoid_optimized` functions from the
//! nanoid-postgres project to be installed alongside `pgcrypto`.

use crate::error::{ExprError, ExprResult};
use crate::ident::Ident;
use crate::sql::{Sql, bind};
use serde::Deserialize;

/// Which generator to call and its tuning knobs.
///
/// The two variants take disjoint options, so a config can't mix
/// `additional_bytes_factor` with `mask`/`step`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum NanoidAlgorithm {
    /// `nanoid(...)`
    Standard {
        #[serde(default)]
        additional_bytes_factor: Option<f64>,
    },
    /// `nanoid_optimized(...)`, with a precomputed mask and step.
    Optimized {
        #[serde(default)]
        mask: Option<i32>,
        #[serde(default)]
        step: Option<i32>,
    },
}

impl Default for NanoidAlgorithm {
    fn default() -> Self {
        NanoidAlgorithm::Standard {
            additional_bytes_factor: None,
        }
    }
}

/// Configuration for [`nanoid`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct NanoidConfig {
    /// Id length. The function default (21) applies when unset.
    pub size: Option<i32>,
    pub alphabet: Option<String>,
    pub algorithm: NanoidAlgorithm,
    /// Schema the functions live in.
    pub schema_name: Option<String>,
}

impl NanoidConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: i32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = Some(alphabet.into());
        self
    }

    pub fn with_additional_bytes_factor(mut self, factor: f64) -> Self {
        self.algorithm = NanoidAlgorithm::Standard {
            additional_bytes_factor: Some(factor),
        };
        self
    }

    pub fn optimized(mut self, mask: Option<i32>, step: Option<i32>) -> Self {
        self.algorithm = NanoidAlgorithm::Optimized { mask, step };
        self
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema_name = Some(schema.into());
        self
    }

    fn validate(&self) -> ExprResult<()> {
        if let Some(size) = self.size
            && size <= 0
        {
            return Err(ExprError::validation(format!(
                "nanoid size must be positive, got {size}"
            )));
        }
        if self.alphabet.as_deref().is_some_and(str::is_empty) {
            return Err(ExprError::validation("nanoid alphabet cannot be empty"));
        }
        match self.algorithm {
            NanoidAlgorithm::Standard {
                additional_bytes_factor: Some(f),
            } if !(f.is_finite() && f >= 1.0) => Err(ExprError::validation(format!(
                "nanoid additional_bytes_factor must be at least 1, got {f}"
            ))),
            NanoidAlgorithm::Optimized { mask, step }
                if mask.is_some_and(|m| m <= 0) || step.is_some_and(|s| s <= 0) =>
            {
                Err(ExprError::validation(
                    "nanoid_optimized mask and step must be positive",
                ))
            }
            _ => Ok(()),
        }
    }
}

/// `[schema.]nanoid(size => $1, alphabet => $2, additionalBytesFactor => $3)`
///
/// Only configured arguments are passed, using named notation so the rest
/// keep their function defaults.
pub fn nanoid(config: &NanoidConfig) -> ExprResult<Sql> {
    config.validate()?;

    let schema = config.schema_name.as_deref().map(Ident::parse).transpose()?;
    let name = match config.algorithm {
        NanoidAlgorithm::Standard { .. } => "nanoid",
        NanoidAlgorithm::Optimized { .. } => "nanoid_optimized",
    };

    let mut args = Vec::new();
    if let Some(size) = config.size {
        args.push(named_arg("size", bind(size)));
    }
    if let Some(alphabet) = &config.alphabet {
        args.push(named_arg("alphabet", bind(alphabet.clone())));
    }
    match config.algorithm {
        NanoidAlgorithm::Standard {
            additional_bytes_factor,
        } => {
            if let Some(factor) = additional_bytes_factor {
                args.push(named_arg("additionalBytesFactor", bind(factor)));
            }
        }
        NanoidAlgorithm::Optimized { mask, step } => {
            if let Some(mask) = mask {
                args.push(named_arg("mask", bind(mask)));
            }
            if let Some(step) = step {
                args.push(named_arg("step", bind(step)));
            }
        }
    }

    let mut out = Sql::empty();
    if let Some(schema) = &schema {
        out.push_ident_ref(schema).push(".");
    }
    out.push(name)
        .push("(")
        .push_sql(Sql::join(args, ", "))
        .push(")");
    Ok(out)
}

fn named_arg(name: &str, value: Sql) -> Sql {
    let mut out = Sql::new(name);
    out.push(" => ").push_sql(value);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_call_without_arguments() {
        let q = nanoid(&NanoidConfig::default()).unwrap();
        assert_eq!(q.to_sql(), "nanoid()");
    }

    #[test]
    fn standard_arguments_are_named() {
        let config = NanoidConfig::new()
            .with_size(12)
            .with_alphabet("abc123")
            .with_additional_bytes_factor(1.6)
            .with_schema("extensions");
        let q = nanoid(&config).unwrap();
        assert_eq!(
            q.to_sql(),
            "extensions.nanoid(size => $1, alphabet => $2, additionalBytesFactor => $3)"
        );
        assert_eq!(q.param_count(), 3);
    }

    #[test]
    fn optimized_arguments() {
        let config = NanoidConfig::new().with_size(10).optimized(Some(63), None);
        let q = nanoid(&config).unwrap();
        assert_eq!(q.to_sql(), "nanoid_optimized(size => $1, mask => $2)");
    }

    #[test]
    fn rejects_bad_values() {
        let err = nanoid(&NanoidConfig::new().with_size(0)).unwrap_err();
        assert!(err.is_validation());

        let err = nanoid(&NanoidConfig::new().with_alphabet("")).unwrap_err();
        assert!(err.is_validation());

        let err = nanoid(&NanoidConfig::new().with_additional_bytes_factor(0.5)).unwrap_err();
        assert!(err.is_validation());

        let err = nanoid(&NanoidConfig::new().optimized(Some(-1), Some(4))).unwrap_err();
        assert!(err.is_validation());

        let err = nanoid(&NanoidConfig::new().with_schema("bad schema")).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn config_from_json() {
        let config: NanoidConfig = serde_json::from_str(
            r#"{"size": 16, "algorithm": {"kind": "optimized", "mask": 63, "step": 24}}"#,
        )
        .unwrap();
        assert_eq!(
            config.algorithm,
            NanoidAlgorithm::Optimized {
                mask: Some(63),
                step: Some(24)
            }
        );

        let mixed = serde_json::from_str::<NanoidConfig>(
            r#"{"algorithm": {"kind": "standard", "mask": 63}}"#,
        );
        assert!(mixed.is_err());
    }
}
