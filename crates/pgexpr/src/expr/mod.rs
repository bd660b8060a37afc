//! Expression builders.
//!
//! Every builder takes fragments or plain values ([`IntoExpr`](crate::IntoExpr))
//! and returns a new [`Sql`](crate::Sql) fragment. Plain values are always
//! bound as parameters, never spliced into the text.

pub mod arith;
pub mod case;
pub mod functions;
pub mod json;
pub mod text_search;

pub use arith::{add, divide, multiply, subtract};
pub use case::{Case, cases};
pub use functions::{
    age, bool_and, bool_or, call, coalesce, distinct, excluded, greatest, interval, least, now,
    null_if, random, range,
};
pub use json::{
    array_agg, json_agg, json_agg_build_object, json_agg_with_nulls, json_build_object,
    json_object_agg, json_strip_nulls, jsonb_object_agg, row_to_json, to_json, to_jsonb,
};
pub use text_search::{
    TsQueryOptions, Weight, get_current_ts_config, regconfig, setweight, to_tsquery, to_tsvector,
    ts,
};
