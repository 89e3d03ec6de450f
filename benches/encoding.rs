use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;
use serde_lispify::{encode, to_string, to_value, ErrorRecord, LispMap, Value};

#[derive(Serialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Clone)]
struct NestedData {
    id: u32,
    metadata: Metadata,
    tags: Vec<String>,
}

#[derive(Serialize, Clone)]
struct Metadata {
    created: String,
    updated: String,
    version: u32,
}

fn benchmark_encode_simple(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    c.bench_function("encode_simple_struct", |b| {
        b.iter(|| to_string(black_box(&user)))
    });
}

fn benchmark_encode_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_array");

    for size in [10, 50, 100, 500].iter() {
        let products: Vec<Product> = (0..*size)
            .map(|i| Product {
                sku: format!("SKU{}", i),
                name: format!("Product {}", i),
                price: 9.99 + f64::from(i),
                quantity: i,
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_string(black_box(&products)))
        });
    }
    group.finish();
}

fn benchmark_encode_prepared_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_prepared_value");

    for size in [10, 100, 1000].iter() {
        let map: LispMap = (0..*size)
            .map(|i| (format!("key{}", i), Value::from(i)))
            .collect();
        let value = Value::from(map);

        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.iter(|| encode(black_box(value.clone())))
        });
    }
    group.finish();
}

fn benchmark_encode_nested(c: &mut Criterion) {
    let data = NestedData {
        id: 42,
        metadata: Metadata {
            created: "2023-01-01T00:00:00Z".to_string(),
            updated: "2023-12-31T23:59:59Z".to_string(),
            version: 3,
        },
        tags: vec![
            "important".to_string(),
            "verified".to_string(),
            "production".to_string(),
        ],
    };

    c.bench_function("encode_nested_struct", |b| {
        b.iter(|| to_string(black_box(&data)))
    });
}

fn benchmark_string_quoting(c: &mut Criterion) {
    let plain = "a".repeat(1000);
    let quoted = "\"a\" ".repeat(250);

    c.bench_function("quote_plain_string", |b| {
        b.iter(|| to_string(black_box(&plain)))
    });
    c.bench_function("quote_escaped_string", |b| {
        b.iter(|| to_string(black_box(&quoted)))
    });
}

fn benchmark_error_record(c: &mut Criterion) {
    let record = ErrorRecord::new("ResourceNotFound")
        .with_message("no such page")
        .with_attribute("reply", "I don't know that page.");

    c.bench_function("encode_error_record", |b| {
        b.iter(|| encode(black_box(record.clone())))
    });
}

fn benchmark_idempotent_reencode(c: &mut Criterion) {
    let value = to_value(&vec!["wikipedia-class1"; 100]).unwrap();
    let node = encode(value).unwrap();

    c.bench_function("reencode_encoded_node", |b| {
        b.iter(|| encode(black_box(node.clone())))
    });
}

criterion_group!(
    benches,
    benchmark_encode_simple,
    benchmark_encode_array,
    benchmark_encode_prepared_value,
    benchmark_encode_nested,
    benchmark_string_quoting,
    benchmark_error_record,
    benchmark_idempotent_reencode
);
criterion_main!(benches);
