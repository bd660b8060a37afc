use super::*;
use crate::dialect::Dialect;

#[test]
fn builds_placeholders_in_order() {
    let mut q = sql("SELECT * FROM places WHERE a = ");
    q.push_bind(1).push(" AND b = ").push_bind("x");

    assert_eq!(q.to_sql(), "SELECT * FROM places WHERE a = $1 AND b = $2");
    assert_eq!(q.params_ref().len(), 2);
}

#[test]
fn nested_fragments_renumber_placeholders() {
    let inner = bind(7_i64).wrap("coalesce(", ", 0)");
    let mut q = sql("SELECT ");
    q.push_bind("a").push(", ").push_sql(inner);

    assert_eq!(q.to_sql(), "SELECT $1, coalesce($2, 0)");
    assert_eq!(q.param_count(), 2);
    q.validate().unwrap();
}

#[test]
fn bind_list_renders_commas() {
    let mut q = sql("id IN (");
    q.push_bind_list(vec![1, 2, 3]).push(")");
    assert_eq!(q.to_sql(), "id IN ($1, $2, $3)");
}

#[test]
fn bind_list_empty_is_valid_sql() {
    let mut q = sql("id IN (");
    q.push_bind_list(Vec::<i32>::new()).push(")");
    assert_eq!(q.to_sql(), "id IN (NULL)");
    assert_eq!(q.param_count(), 0);
}

#[test]
fn push_ident_rejects_unsafe() {
    let mut q = Sql::empty();
    assert!(q.push_ident("title; drop table places; --").is_err());
    assert!(q.push_ident("1title").is_err());
    q.push_ident("public.places").unwrap();
    assert_eq!(q.to_sql(), "public.places");
}

#[test]
fn literal_quotes_are_doubled() {
    assert_eq!(quote_literal("it's"), "'it''s'");
    let mut q = Sql::empty();
    q.push_literal("o'neil");
    assert_eq!(q.to_sql(), "'o''neil'");
}

#[test]
fn str_into_expr_binds_instead_of_splicing() {
    let q = "x'); drop table places; --".into_expr();
    assert_eq!(q.to_sql(), "$1::text");
    assert_eq!(q.param_count(), 1);
}

#[test]
fn join_and_cast() {
    let q = Sql::join([sql("a"), sql("b"), bind(1)], " || ").cast("text");
    assert_eq!(q.to_sql(), "a || b || $1::text");
}

#[test]
fn renders_question_marks_for_mysql() {
    let mut q = sql("SELECT * FROM t WHERE a = ");
    q.push_bind(1).push(" AND b = ").push_bind(2);
    assert_eq!(
        q.to_sql_for(Dialect::MySql),
        "SELECT * FROM t WHERE a = ? AND b = ?"
    );
}

#[test]
fn empty_fragment_is_empty() {
    assert!(Sql::empty().is_empty());
    assert!(sql("").is_empty());
    assert!(!bind(1).is_empty());
}

#[test]
fn limit_offset_appends_both_params() {
    let mut q = sql("SELECT * FROM places ORDER BY id");
    q.limit_offset(10, 20);
    assert_eq!(
        q.to_sql(),
        "SELECT * FROM places ORDER BY id LIMIT $1 OFFSET $2"
    );
    assert_eq!(format!("{:?}", q.params_ref()), "[10, 20]");
}
