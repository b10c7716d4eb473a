//! Performance benchmarks for the parking meter engine.
//!
//! Covers the hot paths of a meter deployment:
//! - A short purchase inside a single window
//! - A day pass spanning several days and a free Sunday
//! - A start inside a free month
//! - Scaling with the purchased duration
//! - Holiday table computation
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use chrono::{Duration, NaiveDateTime};

use parking_meter::calculation::{ExpenditureEngine, holidays_in_year};
use parking_meter::clock::FixedClock;
use parking_meter::config::ConfigLoader;

fn make_datetime(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

/// Creates an engine over the default calendar.
fn create_engine() -> ExpenditureEngine {
    let calendar = ConfigLoader::load("./config/default.yaml").expect("Failed to load config");
    ExpenditureEngine::builder()
        .calendar(calendar)
        .clock(FixedClock::new(make_datetime("2015-02-23 10:30:00")))
        .build()
        .expect("Failed to build engine")
}

/// Benchmark: One hour inside the current window.
fn bench_short_purchase(c: &mut Criterion) {
    let engine = create_engine();
    let start = make_datetime("2015-02-23 10:30:00");

    c.bench_function("short_purchase", |b| {
        b.iter(|| black_box(engine.compute_ending_instant(black_box(start), Duration::hours(1))))
    });
}

/// Benchmark: 24 charged hours from Friday afternoon.
fn bench_day_pass(c: &mut Criterion) {
    let engine = create_engine();
    let start = make_datetime("2015-02-27 15:00:00");

    c.bench_function("day_pass", |b| {
        b.iter(|| black_box(engine.compute_ending_instant(black_box(start), Duration::hours(24))))
    });
}

/// Benchmark: Zero duration from the first of August.
fn bench_free_month_skip(c: &mut Criterion) {
    let engine = create_engine();
    let start = make_datetime("2015-08-01 00:00:00");

    c.bench_function("free_month_skip", |b| {
        b.iter(|| black_box(engine.compute_ending_instant(black_box(start), Duration::zero())))
    });
}

/// Benchmark: Purchased durations from one hour to four weeks of charged time.
fn bench_scaling(c: &mut Criterion) {
    let engine = create_engine();
    let start = make_datetime("2015-02-23 10:30:00");

    let mut group = c.benchmark_group("scaling");

    for hours in [1i64, 8, 24, 48, 96, 192].iter() {
        group.throughput(Throughput::Elements(*hours as u64));
        group.bench_with_input(BenchmarkId::new("charged_hours", hours), hours, |b, &hours| {
            b.iter(|| black_box(engine.compute_ending_instant(start, Duration::hours(hours))))
        });
    }

    group.finish();
}

/// Benchmark: Holiday table for one year.
fn bench_holidays_in_year(c: &mut Criterion) {
    c.bench_function("holidays_in_year", |b| {
        b.iter(|| black_box(holidays_in_year(black_box(2015))))
    });
}

criterion_group!(
    benches,
    bench_short_purchase,
    bench_day_pass,
    bench_free_month_skip,
    bench_scaling,
    bench_holidays_in_year,
);
criterion_main!(benches);
