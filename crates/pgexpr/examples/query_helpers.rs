//! Query helper example for pgexpr
//!
//! Run with: cargo run --example query_helpers -p pgexpr
//!
//! Prints the SQL and parameters for a few typical queries. No database is
//! needed.

use pgexpr::columns::{
    GeneratedTsvectorConfig, IntRangeConfig, PointConfig, generated_tsvector, intrange, point,
};
use pgexpr::expr::{Case, TsQueryOptions, json_agg_build_object, regconfig, to_tsquery, ts};
use pgexpr::ext::cube::{DistanceType, distance, make_cube};
use pgexpr::ext::pgcrypto::{NanoidConfig, nanoid};
use pgexpr::types::{Coordinate, RangeValue, Regconfig};
use pgexpr::{ExprError, Sql, paginate, sql};

fn show(title: &str, q: &Sql) {
    println!("=== {title} ===");
    println!("{}", q.to_sql());
    println!("params: {:?}\n", q.params_ref());
}

fn main() -> Result<(), ExprError> {
    // DDL fragments
    let id_default = nanoid(&NanoidConfig::new().with_size(12))?;
    let seats = intrange("seats", IntRangeConfig::default())?;
    let location = point("location", PointConfig::default().with_z())?;
    let document = generated_tsvector(
        "document",
        GeneratedTsvectorConfig::new(["title", "description"])
            .with_language(Regconfig::English)
            .weighted(),
    )?;
    println!("=== CREATE TABLE ===");
    println!(
        "CREATE TABLE venues (\n  id text PRIMARY KEY DEFAULT {},\n  {},\n  {},\n  {}\n)\n",
        id_default.to_sql(),
        seats.definition(),
        location.definition(),
        document.definition()
    );

    // INSERT with column codecs
    let mut insert = sql("INSERT INTO venues (seats, location) VALUES (");
    insert
        .push_sql(seats.bind(&RangeValue::between(50, 200))?)
        .push(", ")
        .push_sql(location.bind(&Coordinate::xyz(2.35, 48.85, 35.0))?)
        .push(")");
    show("INSERT", &insert);

    // Search with CASE, JSON aggregation and pagination
    let size_label = Case::new()
        .when(sql("upper(v.seats) > 150"), "large")
        .when(sql("upper(v.seats) > 50"), "medium")
        .otherwise("small")
        .build()
        .unwrap_or_else(|| sql("null"));

    let mut select = sql("SELECT v.id, ");
    select
        .push_sql(size_label)
        .push(" AS size, ")
        .push_sql(json_agg_build_object([
            ("name", sql("e.name")),
            ("starts_at", sql("e.starts_at")),
        ]))
        .push(" AS events FROM venues v LEFT JOIN events e ON e.venue_id = v.id WHERE ")
        .push_sql(ts(
            sql("v.document"),
            to_tsquery(
                "jazz club",
                TsQueryOptions::plain().with_regconfig(regconfig(Regconfig::English)),
            ),
        ))
        .push(" GROUP BY v.id ORDER BY v.id");
    let select = paginate(select, 1, Some(25))?;
    show("SELECT", &select);

    // Nearest neighbours on a cube column
    let mut knn = sql("SELECT id FROM items ORDER BY ");
    knn.push_sql(distance(
        sql("embedding"),
        make_cube([0.1, 0.7, 0.2]),
        DistanceType::Euclidean,
    ))
    .push(" LIMIT 5");
    show("KNN", &knn);

    Ok(())
}
