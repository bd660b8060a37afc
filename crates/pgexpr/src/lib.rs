//! # pgexpr
//!
//! SQL expression helpers and PostgreSQL extension column codecs.
//!
//! ## Features
//!
//! - **Parameter-safe fragments**: every helper returns a [`Sql`] fragment; values are bound, never spliced
//! - **Range codec**: `RangeValue<T>` <-> `[1,5)` range literals, with the bound brackets kept on decode
//! - **Geometry codecs**: PostGIS `POINT[Z][M]` text and `cube` extension values
//! - **Column types**: ranges, PostGIS points and GeoJSON, cube, citext, tsvector (including generated columns)
//! - **Expression builders**: `CASE`, aggregates, JSON, arithmetic, full-text search
//! - **Extension helpers**: cube, PostGIS, nanoid, fuzzystrmatch, pg_trgm
//! - **Pagination**: zero-based `LIMIT`/`OFFSET`
//!
//! ## Example
//!
//! ```ignore
//! use pgexpr::prelude::*;
//! use pgexpr::expr::{Case, json_agg_build_object};
//!
//! let status = Case::new()
//!     .when(sql("score >= 90"), "gold")
//!     .when(sql("score >= 50"), "silver")
//!     .otherwise("bronze")
//!     .build();
//!
//! let mut q = sql("SELECT ");
//! q.push_sql(json_agg_build_object([("id", sql("u.id")), ("name", sql("u.name"))]))
//!     .push(" FROM users u");
//! let q = paginate(q, 0, None)?;
//! # Ok::<(), pgexpr::ExprError>(())
//! ```
//!
//! Decode failures are logged with `tracing` at `debug` level under the
//! `pgexpr.codec` target; column binds are traced under `pgexpr.column`.

pub mod columns;
pub mod dialect;
pub mod error;
pub mod expr;
pub mod ext;
pub mod ident;
pub mod paginate;
pub mod prelude;
pub mod sql;
pub mod types;
pub mod validate;
pub mod values;

pub use columns::{Column, CustomType};
pub use dialect::Dialect;
pub use error::{ExprError, ExprResult};
pub use ident::{Ident, IdentPart, IntoIdent};
pub use paginate::{PAGE_SIZE_DEFAULT, Pagination, paginate};
pub use sql::{IntoExpr, Sql, bind, quote_literal, sql};
pub use types::{RangeBounds, RangeValue};
