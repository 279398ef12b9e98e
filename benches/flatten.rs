use criterion::{criterion_group, criterion_main, Criterion, black_box};

use reach_estimate::core::Response;
use reach_estimate::{process, TargetingSpec};

const SPEC: &str = r#"{
    "geo_locations": {
        "countries": ["US", "CA", "MX"],
        "location_types": ["home", "recent"]
    },
    "age_min": 25,
    "age_max": 54,
    "genders": [1],
    "relationship_statuses": [1, 3, 4],
    "education_statuses": [9, 10, 11],
    "exclusions": {"interests": [{"id": "6003107902433", "name": "Association football"}]}
}"#;

fn bench_flatten(c: &mut Criterion) {
    let spec = TargetingSpec::parse(SPEC).expect("bench spec parses");
    let resp = Response::new(200, r#"{"data":{"users":123456789,"estimate_ready":true}}"#);

    c.bench_function("spec_parse", |b| {
        b.iter(|| TargetingSpec::parse(black_box(SPEC)).map(|s| s.as_map().len()))
    });

    c.bench_function("spec_flatten", |b| {
        b.iter(|| black_box(&spec).flatten().len())
    });

    c.bench_function("process_row", |b| {
        b.iter(|| process(black_box(&spec), black_box(&resp)).map(|r| r.users))
    });
}

criterion_group!(benches, bench_flatten);
criterion_main!(benches);
