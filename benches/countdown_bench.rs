// Benchmark for countdown decomposition and list filtering
// Measures the per-frame work done for every visible timer surface

use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use launch_countdown::models::launch::LaunchRecord;
use launch_countdown::services::countdown::Countdown;
use launch_countdown::services::filter::{FilterSnapshot, LaunchFilter};

fn schedule(count: usize) -> Vec<LaunchRecord> {
    let start = Utc.with_ymd_and_hms(2026, 2, 10, 12, 0, 0).unwrap();
    let providers = ["SpaceX", "NASA", "ULA", "Blue Origin", "Rocket Lab"];

    (0..count)
        .map(|i| {
            LaunchRecord::builder()
                .id(i.to_string())
                .provider(providers[i % providers.len()])
                .mission(format!("Mission {i}"))
                .launch_time(start + Duration::hours(i as i64 * 7))
                .build()
                .unwrap()
        })
        .collect()
}

fn bench_countdown(c: &mut Criterion) {
    let now = Utc.with_ymd_and_hms(2026, 2, 10, 12, 0, 0).unwrap();
    let target = now + Duration::days(23) + Duration::milliseconds(4_567_891);

    c.bench_function("countdown_between", |b| {
        b.iter(|| Countdown::between(black_box(target), black_box(now)))
    });

    c.bench_function("countdown_quick_label", |b| {
        let countdown = Countdown::between(target, now);
        b.iter(|| black_box(countdown).quick_label())
    });
}

fn bench_filters(c: &mut Criterion) {
    let now = Utc.with_ymd_and_hms(2026, 2, 10, 12, 0, 0).unwrap();
    let mut group = c.benchmark_group("filter_snapshot");

    for size in [10usize, 100, 1000] {
        let launches = schedule(size);
        group.bench_with_input(BenchmarkId::new("imminent", size), &launches, |b, launches| {
            b.iter(|| FilterSnapshot::evaluate(LaunchFilter::Imminent, black_box(launches), now))
        });
        group.bench_with_input(BenchmarkId::new("provider", size), &launches, |b, launches| {
            b.iter(|| {
                FilterSnapshot::evaluate(
                    LaunchFilter::Provider("spacex".into()),
                    black_box(launches),
                    now,
                )
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_countdown, bench_filters);
criterion_main!(benches);
