//! Benchmarks for intent scoring and resolution on pre-extracted analyses.
#![allow(
    missing_docs,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_panics_doc,
    reason = "Benchmark code has different conventions"
)]

use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use querylens_benchmarks_criterion::QUERY_CASES;
use querylens_core::{AnalysisResult, MemorySessionState};
use querylens_intent::{FeatureExtractor, IntentResolver};
use serde_json::to_value;

fn analyses() -> Vec<(&'static str, AnalysisResult)> {
    let extractor = FeatureExtractor::default();
    QUERY_CASES
        .iter()
        .map(|(name, query)| (*name, extractor.analyze(query, None).unwrap()))
        .collect()
}

/// Benchmark typed resolution with and without a session sink
fn bench_resolution(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("resolution");
    let resolver = IntentResolver::default();
    let session = MemorySessionState::new();

    for (name, analysis) in analyses() {
        group.bench_with_input(
            BenchmarkId::new("typed", name),
            &analysis,
            |bencher, analysis| {
                bencher.iter(|| resolver.resolve(black_box(analysis)).unwrap());
            },
        );
        group.bench_with_input(
            BenchmarkId::new("with_session", name),
            &analysis,
            |bencher, analysis| {
                bencher.iter(|| {
                    resolver
                        .resolve_with_session(black_box(analysis), Some(&session))
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

/// Benchmark resolution from untyped JSON, including deserialization
fn bench_json_resolution(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("json_resolution");
    let resolver = IntentResolver::default();

    for (name, analysis) in analyses() {
        let value = to_value(&analysis).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &value, |bencher, value| {
            bencher.iter(|| resolver.resolve_json(black_box(value)).unwrap());
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(2))
        .warm_up_time(Duration::from_millis(500));
    targets = bench_resolution,
             bench_json_resolution
}

criterion_main!(benches);
