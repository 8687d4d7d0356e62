// Criterion benchmarks for the business directory

use biz_directory::core::{normalize_phone, rank_and_limit};
use biz_directory::models::{BusinessRecord, DataSource, LocationFilter};
use biz_directory::services::{Directory, Taxonomy};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const STATES: [&str; 5] = ["CA", "TX", "NY", "FL", "WA"];
const CATEGORIES: [&str; 6] = [
    "plumber",
    "accountant",
    "legal services",
    "landscaper",
    "tax preparation",
    "restaurant",
];

fn create_record(id: usize) -> BusinessRecord {
    BusinessRecord {
        name: format!("Business {}", id),
        phone: "+1 (555) 123-4567".to_string(),
        address: String::new(),
        city: format!("City {}", id % 20),
        state: STATES[id % STATES.len()].to_string(),
        postal_code: String::new(),
        rating: 1.0 + (id % 40) as f64 / 10.0,
        reviews: (id * 37 % 500) as u32,
        website: String::new(),
        category: CATEGORIES[id % CATEGORIES.len()].to_string(),
        kind: String::new(),
    }
}

fn create_directory(count: usize) -> Directory {
    let records = (0..count).map(create_record).collect();
    // Benchmarks only run against the tables compiled into the binary
    let taxonomy = Taxonomy::embedded().expect("embedded tables parse");
    Directory::new(records, DataSource::EmbeddedSample, taxonomy, true)
}

fn bench_normalize_phone(c: &mut Criterion) {
    c.bench_function("normalize_phone", |b| {
        b.iter(|| normalize_phone(black_box("(555) 123-4567")))
    });
}

fn bench_list_by_category(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_by_category");

    for record_count in [100, 1000, 10000].iter() {
        let directory = create_directory(*record_count);
        let location = LocationFilter::state("TX");

        group.bench_with_input(
            BenchmarkId::new("plumbers_tx", record_count),
            record_count,
            |b, _| {
                b.iter(|| directory.list_by_category(black_box("plumbers"), &location, black_box(50), true))
            },
        );

        group.bench_with_input(
            BenchmarkId::new("fallback_tx", record_count),
            record_count,
            |b, _| {
                b.iter(|| {
                    directory.list_by_category(black_box("underwater-welders"), &location, black_box(50), true)
                })
            },
        );
    }

    group.finish();
}

fn bench_list_by_location(c: &mut Criterion) {
    let directory = create_directory(1000);
    let location = LocationFilter::state("CA").with_city("City 5");

    c.bench_function("list_by_location_1000_records", |b| {
        b.iter(|| directory.list_by_location(black_box(&location), black_box(50)))
    });
}

fn bench_ranking(c: &mut Criterion) {
    let records: Vec<BusinessRecord> = (0..1000).map(create_record).collect();

    c.bench_function("rank_and_limit_1000_records", |b| {
        b.iter(|| {
            let refs: Vec<&BusinessRecord> = records.iter().collect();
            black_box(rank_and_limit(refs, 50))
        })
    });
}

criterion_group!(
    benches,
    bench_normalize_phone,
    bench_list_by_category,
    bench_list_by_location,
    bench_ranking
);

criterion_main!(benches);
