use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use pgexpr::expr::Case;
use pgexpr::types::{
    Coordinate, Dimensions, RangeBounds, RangeValue, decode_point, decode_range, encode_point,
    encode_range,
};
use pgexpr::{Sql, sql};

fn bench_range_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codecs/range");

    let value = RangeValue::between(1_i64, 1_000_000);
    group.bench_function("encode_int8", |b| {
        b.iter(|| black_box(encode_range(black_box(&value), RangeBounds::default())))
    });
    group.bench_function("decode_int8", |b| {
        b.iter(|| black_box(decode_range::<i64>(black_box("[1,1000000)"))))
    });

    let quoted = RangeValue::between("alpha beta".to_string(), "omega, \"z\"".to_string());
    let text = encode_range(&quoted, RangeBounds::inclusive()).unwrap_or_default();
    group.bench_function("decode_quoted_text", |b| {
        b.iter(|| black_box(decode_range::<String>(black_box(&text))))
    });

    group.finish();
}

fn bench_point_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codecs/point");

    for (name, coordinate, dims) in [
        ("xy", Coordinate::xy(2.35, 48.85), Dimensions::default()),
        (
            "xyzm",
            Coordinate::xyzm(2.35, 48.85, 35.0, 1.5),
            Dimensions::new(true, true),
        ),
    ] {
        let wkt = coordinate.to_wkt(dims).unwrap_or_default();
        group.bench_with_input(BenchmarkId::new("encode", name), &coordinate, |b, c| {
            b.iter(|| black_box(encode_point(c, dims)))
        });
        group.bench_with_input(BenchmarkId::new("decode", name), &wkt, |b, wkt| {
            b.iter(|| black_box(decode_point(wkt, dims)))
        });
    }

    group.finish();
}

/// CASE with `n` branches, each condition and result a bound parameter.
fn build_case(n: usize) -> Option<Sql> {
    let mut case = Case::new();
    for i in 0..n {
        let mut condition = sql("score >= ");
        condition.push_bind(i as i64);
        case = case.when(condition, format!("tier{i}"));
    }
    case.otherwise("none").build()
}

fn bench_case_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("codecs/case_render");

    for n in [1, 5, 10, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_case(n).map(|q| q.to_sql())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_range_codec, bench_point_codec, bench_case_render);
criterion_main!(benches);
