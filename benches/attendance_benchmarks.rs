use criterion::{Criterion, black_box, criterion_group, criterion_main};

use attendr::engine::attendance::aggregate_percentage;
use attendr::engine::projection::project_future;
use attendr::roster::Roster;

fn make_counts(count: usize) -> Vec<(i64, i64)> {
    (0..count)
        .map(|i| {
            let conducted = (i % 80) as i64; // every 80th course has no classes yet
            let attended = conducted * 3 / 4;
            (conducted, attended)
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let counts = make_counts(10_000);

    c.bench_function("aggregate_percentage (10k courses)", |b| {
        b.iter(|| aggregate_percentage(black_box(&counts).iter().copied()))
    });
}

fn bench_roster_average(c: &mut Criterion) {
    let mut roster = Roster::new();
    for (i, (conducted, attended)) in make_counts(1_000).into_iter().enumerate() {
        roster.add(&format!("Course {i}"), conducted, attended);
    }

    c.bench_function("roster average (1k courses)", |b| {
        b.iter(|| black_box(&roster).average())
    });
}

fn bench_projection(c: &mut Criterion) {
    c.bench_function("project_future parse+validate", |b| {
        b.iter(|| {
            project_future(
                black_box(40),
                black_box(35),
                black_box("10"),
                black_box("10"),
            )
        })
    });
}

criterion_group!(benches, bench_aggregate, bench_roster_average, bench_projection);
criterion_main!(benches);
