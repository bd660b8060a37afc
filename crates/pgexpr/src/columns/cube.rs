//! `cube` extension column.

use super::{Column, CustomType, qualified_type, schema_ident};
use crate::error::{ExprError, ExprResult};
use crate::ident::{Ident, IntoIdent};
use crate::types::{CubeValue, decode_cube, encode_cube};
use serde::Deserialize;

/// Configuration for [`cube`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    /// Schema the extension is installed in.
    pub schema_name: Option<String>,
    /// Require every value to have exactly this many dimensions.
    pub dimensions: Option<usize>,
}

impl CubeConfig {
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema_name = Some(schema.into());
        self
    }

    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }
}

/// `cube` column.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    schema: Option<Ident>,
    dimensions: Option<usize>,
}

impl Cube {
    fn check_dimensions(&self, value: &CubeValue) -> ExprResult<()> {
        match self.dimensions {
            Some(expected) if value.dimensions() != expected => Err(ExprError::dimension_mismatch(
                format!("{expected} dimensions"),
                format!("{} dimensions", value.dimensions()),
            )),
            _ => Ok(()),
        }
    }
}

impl CustomType for Cube {
    type Data = CubeValue;
    type Driver = String;

    fn data_type(&self) -> String {
        qualified_type(self.schema.as_ref(), "cube")
    }

    fn to_driver(&self, value: &CubeValue) -> ExprResult<String> {
        self.check_dimensions(value)?;
        encode_cube(value)
    }

    fn from_driver(&self, value: String) -> ExprResult<CubeValue> {
        let cube = decode_cube(&value)?;
        self.check_dimensions(&cube)?;
        Ok(cube)
    }
}

/// Cube column.
pub fn cube(name: impl IntoIdent, config: CubeConfig) -> ExprResult<Column<Cube>> {
    let schema = schema_ident(config.schema_name.as_deref())?;
    Column::new(
        name,
        Cube {
            schema,
            dimensions: config.dimensions,
        },
    )
}
