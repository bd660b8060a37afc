use pgexpr::expr::{
    Case, TsQueryOptions, coalesce, excluded, json_agg, json_agg_build_object, range, regconfig,
    to_tsquery, to_tsvector, ts,
};
use pgexpr::ext::cube::{DistanceType, distance, make_cube};
use pgexpr::ext::pgcrypto::{NanoidConfig, nanoid};
use pgexpr::types::{Coordinate, Dimensions, RangeBounds, RangeValue, Regconfig, decode_point, encode_point};
use pgexpr::{Pagination, Sql, paginate, sql, values};

#[test]
fn single_branch_case() {
    let q = pgexpr::expr::cases([Some((sql("x > 0"), "positive"))], None::<Sql>).unwrap();
    assert_eq!(q.to_sql(), "CASE WHEN x > 0 THEN $1::text END");
}

#[test]
fn absent_branches_are_skipped() {
    let q = pgexpr::expr::cases(
        [None, Some((sql("b"), sql("2"))), None],
        Some(sql("3")),
    )
    .unwrap();
    assert_eq!(q.to_sql(), "CASE WHEN b THEN 2 ELSE 3 END");
}

#[test]
fn fallback_only_is_returned_as_is() {
    let q = pgexpr::expr::cases(Vec::<Option<(Sql, Sql)>>::new(), Some(sql("0"))).unwrap();
    assert_eq!(q.to_sql(), "0");
    assert!(pgexpr::expr::cases(Vec::<Option<(Sql, Sql)>>::new(), None::<Sql>).is_none());
    assert!(Case::new().build().is_none());
}

#[test]
fn paginate_page_two_of_ten() {
    let q = paginate(sql("SELECT * FROM users ORDER BY id"), 2, Some(10)).unwrap();
    assert_eq!(q.to_sql(), "SELECT * FROM users ORDER BY id LIMIT $1 OFFSET $2");
    assert_eq!(format!("{:?}", q.params_ref()), "[10, 20]");

    let q = Pagination::new(2).with_size(10).apply(sql("SELECT 1")).unwrap();
    assert_eq!(format!("{:?}", q.params_ref()), "[10, 20]");
}

#[test]
fn point_text_round_trips() {
    let dims = Dimensions::new(true, false);
    let c = Coordinate::xyz(1.0, 2.0, 3.0);
    let text = encode_point(&c, dims).unwrap();
    assert!(text.starts_with("PointZ("), "{text}");
    assert_eq!(decode_point("POINT Z (1 2 3)", dims).unwrap(), c);
}

#[test]
fn point_dimension_mismatch_both_ways() {
    let z = Dimensions::new(true, false);
    assert!(decode_point("POINT(1 2)", z).unwrap_err().is_dimension_mismatch());
    let flat = Dimensions::default();
    assert!(decode_point("POINT Z (1 2 3)", flat).unwrap_err().is_dimension_mismatch());
}

#[test]
fn range_literal_is_bound() {
    let q = range(&RangeValue::between(1, 5), RangeBounds::default()).unwrap();
    assert_eq!(q.to_sql(), "$1::text::int4range");
    assert_eq!(format!("{:?}", q.params_ref()), r#"["[1,5)"]"#);
}

#[test]
fn aggregate_query() {
    let mut q = sql("SELECT u.id, ");
    q.push_sql(json_agg_build_object([("id", sql("p.id")), ("title", sql("p.title"))]))
        .push(" AS posts, ")
        .push_sql(json_agg(sql("p.tag")))
        .push(" AS tags FROM users u JOIN posts p ON p.user_id = u.id GROUP BY u.id");
    assert_eq!(
        q.to_sql(),
        "SELECT u.id, coalesce(json_agg(distinct json_build_object('id', p.id, 'title', p.title)), '[]') AS posts, \
         json_agg(p.tag) FILTER (WHERE p.tag IS NOT NULL) AS tags FROM users u JOIN posts p ON p.user_id = u.id GROUP BY u.id"
    );
}

#[test]
fn full_text_search_query() {
    let cfg = regconfig(Regconfig::English);
    let q = ts(
        to_tsvector(sql("body"), Some(cfg.clone())),
        to_tsquery("rust & postgres", TsQueryOptions::default().with_regconfig(cfg)),
    );
    assert_eq!(
        q.to_sql(),
        "to_tsvector('english'::regconfig, body) @@ to_tsquery('english'::regconfig, $1::text)"
    );
}

#[test]
fn upsert_uses_excluded_columns() {
    let cols = excluded(["public.users.name", "email"]).unwrap();
    let mut q = sql("ON CONFLICT (id) DO UPDATE SET (name, email) = (");
    q.push_sql(Sql::join(cols, ", ")).push(")");
    assert_eq!(
        q.to_sql(),
        "ON CONFLICT (id) DO UPDATE SET (name, email) = (excluded.name, excluded.email)"
    );
}

#[test]
fn knn_order_by_cube_distance() {
    let mut q = sql("SELECT id FROM items ORDER BY ");
    q.push_sql(distance(sql("embedding"), make_cube([1.0, 2.0, 3.0]), DistanceType::Euclidean));
    assert_eq!(
        q.to_sql(),
        "SELECT id FROM items ORDER BY embedding <-> cube($1::float8, $2::float8, $3::float8)"
    );
}

#[test]
fn nanoid_default_column() {
    let q = nanoid(&NanoidConfig::new().with_size(12).with_schema("extensions")).unwrap();
    assert_eq!(q.to_sql(), "extensions.nanoid(size => $1)");
}

#[test]
fn constant_values() {
    let q = coalesce([sql("settings"), values::empty_json_object()]);
    assert_eq!(q.to_sql(), "coalesce(settings, '{}'::json)");
    assert_eq!(values::bool(true).to_sql(), "'true'");
}
