use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use csv_query::expression::{AggregateExpr, FilterExpr};
use csv_query::ingestion::csv::{load_csv_from_reader, reader_builder};
use csv_query::ingestion::CsvOptions;
use csv_query::processing::{aggregate, filter};
use csv_query::render::render_dataset;

const ROWS: usize = 100_000;

fn synthetic_csv() -> String {
    let mut out = String::from("name,brand,price,rating\n");
    for i in 0..ROWS {
        let brand = ["apple", "samsung", "xiaomi", "google"][i % 4];
        out.push_str(&format!("phone {i},{brand},{},{}.{}\n", 100 + (i * 37) % 1200, 3 + i % 2, i % 10));
    }
    out
}

fn query(c: &mut Criterion) {
    let input = synthetic_csv();
    let mut rdr = reader_builder(&CsvOptions::default()).from_reader(input.as_bytes());
    let ds = load_csv_from_reader(&mut rdr).unwrap();

    let where_gt = FilterExpr::parse("price>500").unwrap();
    let where_eq = FilterExpr::parse("brand=apple").unwrap();
    let avg = AggregateExpr::parse("price=avg").unwrap();

    let mut group = c.benchmark_group("query");
    group.sample_size(20);
    group.throughput(Throughput::Elements(ROWS as u64));

    group.bench_function("load", |b| {
        b.iter(|| {
            let mut rdr = reader_builder(&CsvOptions::default()).from_reader(input.as_bytes());
            load_csv_from_reader(&mut rdr).unwrap()
        })
    });
    group.bench_function("filter_numeric", |b| b.iter(|| filter(&ds, &where_gt).unwrap()));
    group.bench_function("filter_equals", |b| b.iter(|| filter(&ds, &where_eq).unwrap()));
    group.bench_function("filter_then_avg", |b| {
        b.iter(|| {
            let filtered = filter(&ds, &where_gt).unwrap();
            aggregate(&filtered, &avg).unwrap()
        })
    });
    group.bench_function("render_filtered", |b| {
        let filtered = filter(&ds, &where_eq).unwrap();
        b.iter(|| render_dataset(&filtered).unwrap())
    });
    group.finish();
}

criterion_group!(benches, query);
criterion_main!(benches);
