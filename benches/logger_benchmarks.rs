//! Criterion benchmarks for leveled_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use leveled_logger::prelude::*;
use std::io;

fn sink_logger(threshold: Severity) -> LeveledLogger {
    LeveledLogger::builder()
        .threshold(threshold)
        .sink(WriterSink::new(io::sink()))
        .announce(false)
        .build()
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger(Severity::Debug);

    group.bench_function("info", |b| {
        b.iter(|| {
            logger.info(black_box("Info message"));
        });
    });

    group.bench_function("info_formatted", |b| {
        b.iter(|| {
            logger.info(format_args!("request {} took {}ms", black_box(42), black_box(7)));
        });
    });

    group.bench_function("emit_str", |b| {
        b.iter(|| {
            logger.emit_str(black_box("WARN"), "Warn message");
        });
    });

    group.finish();
}

// ============================================================================
// Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger(Severity::Info);

    group.bench_function("filtered_debug", |b| {
        b.iter(|| {
            logger.debug(format_args!("hidden {}", black_box(1)));
        });
    });

    group.bench_function("is_enabled", |b| {
        b.iter(|| black_box(logger.is_enabled(black_box(Severity::Error))));
    });

    group.bench_function("is_enabled_str_unknown", |b| {
        b.iter(|| black_box(logger.is_enabled_str(black_box("TRACE"))));
    });

    group.finish();
}

fn bench_timestamp(c: &mut Criterion) {
    c.bench_function("timestamp_now", |b| {
        b.iter(|| black_box(leveled_logger::timestamp::now()));
    });
}

criterion_group!(benches, bench_emit, bench_level_filtering, bench_timestamp);
criterion_main!(benches);
