use super::builder::Sql;
use crate::ident::Ident;

/// Conversion into a SQL expression fragment.
///
/// [`Sql`] fragments and identifiers are embedded as-is; plain Rust values are
/// bound as parameters with a type cast (`$1::int4`, `$2::text`), so they
/// type-check where PostgreSQL can't infer a parameter type, as in `CASE`
/// branches or `json_build_object` arguments. Raw SQL text never goes through
/// this trait: use [`sql()`](super::sql) for that, so a `&str` here is always
/// a bound value.
pub trait IntoExpr {
    fn into_expr(self) -> Sql;
}

impl IntoExpr for Sql {
    fn into_expr(self) -> Sql {
        self
    }
}

impl IntoExpr for &Sql {
    fn into_expr(self) -> Sql {
        self.clone()
    }
}

impl IntoExpr for Ident {
    fn into_expr(self) -> Sql {
        (&self).into_expr()
    }
}

impl IntoExpr for &Ident {
    fn into_expr(self) -> Sql {
        let mut s = Sql::empty();
        s.push_ident_ref(self);
        s
    }
}

impl IntoExpr for &str {
    fn into_expr(self) -> Sql {
        super::bind(self.to_string()).cast("text")
    }
}

macro_rules! bind_as_param {
    ($($ty:ty => $pg:literal),* $(,)?) => {
        $(
            impl IntoExpr for $ty {
                fn into_expr(self) -> Sql {
                    super::bind(self).cast($pg)
                }
            }

            impl IntoExpr for Option<$ty> {
                fn into_expr(self) -> Sql {
                    super::bind(self).cast($pg)
                }
            }
        )*
    };
}

bind_as_param!(
    i16 => "int2",
    i32 => "int4",
    i64 => "int8",
    f32 => "float4",
    f64 => "float8",
    bool => "bool",
    String => "text",
    chrono::NaiveDate => "date",
    chrono::NaiveDateTime => "timestamp",
    chrono::DateTime<chrono::Utc> => "timestamptz",
    chrono::DateTime<chrono::FixedOffset> => "timestamptz",
    serde_json::Value => "json",
);
