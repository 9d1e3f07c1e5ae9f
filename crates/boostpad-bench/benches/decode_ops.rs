//! Criterion micro-benchmarks for replay decoding.

use boostpad_bench::{reference_profile, stress_profile};
use boostpad_replay::codec::Cursor;
use boostpad_replay::property::decode_properties;
use boostpad_replay::{decode, DecoderConfig, ReplayDecoder, TagMatching};
use boostpad_test_utils::PropertyListBuilder;
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

/// Benchmark: decode the 3v3 reference replay end to end.
fn bench_decode_reference(c: &mut Criterion) {
    let bytes = reference_profile(42);

    let mut group = c.benchmark_group("decode_reference");
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.bench_function("tolerant", |b| {
        b.iter(|| {
            let doc = decode(black_box(&bytes)).unwrap();
            black_box(&doc);
        });
    });

    let strict = ReplayDecoder::new(DecoderConfig {
        tag_matching: TagMatching::Strict,
        ..DecoderConfig::default()
    })
    .unwrap();
    group.bench_function("strict", |b| {
        b.iter(|| {
            let doc = strict.decode_bytes(black_box(&bytes)).unwrap();
            black_box(&doc);
        });
    });
    group.finish();
}

/// Benchmark: decode the stress replay (large tables, many groups).
fn bench_decode_stress(c: &mut Criterion) {
    let bytes = stress_profile(42);

    let mut group = c.benchmark_group("decode_stress");
    group.throughput(Throughput::Bytes(bytes.len() as u64));
    group.sample_size(20);
    group.bench_function("full", |b| {
        b.iter(|| {
            let doc = decode(black_box(&bytes)).unwrap();
            black_box(&doc);
        });
    });
    group.finish();
}

/// Benchmark: a flat property list of 1K scalars.
fn bench_property_list_1k(c: &mut Criterion) {
    let buf = (0..1000)
        .fold(PropertyListBuilder::new(), |b, i| {
            b.int(&format!("Int{i}"), i)
        })
        .finish();
    let config = DecoderConfig::default();

    c.bench_function("property_list_1k", |b| {
        b.iter(|| {
            let mut cursor = Cursor::new(black_box(&buf));
            let props = decode_properties(&mut cursor, &config).unwrap();
            black_box(&props);
        });
    });
}

criterion_group!(
    benches,
    bench_decode_reference,
    bench_decode_stress,
    bench_property_list_1k
);
criterion_main!(benches);
