//! Benchmarks for feature extraction.
#![allow(
    missing_docs,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_panics_doc,
    reason = "Benchmark code has different conventions"
)]

use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use querylens_benchmarks_criterion::QUERY_CASES;
use querylens_intent::{FeatureExtractor, IntentPipeline};

/// Benchmark extraction across query sizes
fn bench_feature_extraction(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("feature_extraction");
    let extractor = FeatureExtractor::default();

    for (name, query) in QUERY_CASES {
        group.throughput(Throughput::Bytes(query.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), query, |bencher, query| {
            bencher.iter(|| extractor.analyze(black_box(query), None).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the full classification pipeline
fn bench_classification(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("classification");
    let pipeline = IntentPipeline::default();

    for (name, query) in QUERY_CASES {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(name), query, |bencher, query| {
            bencher.iter(|| pipeline.classify(black_box(query), None, None).unwrap());
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(2))
        .warm_up_time(Duration::from_millis(500));
    targets = bench_feature_extraction,
             bench_classification
}

criterion_main!(benches);
