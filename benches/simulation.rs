//! Benchmark the per-tick pieces and a short run.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use parikrama::config::ParikramaConfig;
use parikrama::core::{CellRect, GridCoord};
use parikrama::evaluation::MappingAccuracy;
use parikrama::grid::{EnvironmentBuilder, OccupancyGrid, RangeSensor};
use parikrama::navigation::WallDetector;
use parikrama::sim::Simulation;

/// 800-cell room with a block, like the shipped orthogonal scenario.
fn room() -> OccupancyGrid {
    EnvironmentBuilder::new(800)
        .room(CellRect::new(0, 0, 799, 799), 40)
        .block(CellRect::new(500, 150, 579, 229))
        .build()
}

fn bench_sensor_sample(c: &mut Criterion) {
    let truth = room();
    let mut group = c.benchmark_group("sensor_sample_range");

    for range in [25, 50, 100].iter() {
        let sensor = RangeSensor::new(*range);
        let mut belief = OccupancyGrid::new(truth.side());
        let center = GridCoord::new(400, 400);

        group.bench_with_input(BenchmarkId::from_parameter(range), range, |b, _| {
            b.iter(|| {
                let result = sensor.sample(&truth, &mut belief, black_box(center));
                black_box(result)
            })
        });
    }

    group.finish();
}

fn bench_detect(c: &mut Criterion) {
    let truth = room();
    let detector = WallDetector::new(17);
    let center = GridCoord::new(37, 400);

    c.bench_function("wall_detect", |b| {
        b.iter(|| black_box(detector.detect(&truth, black_box(center))))
    });
}

fn bench_accuracy(c: &mut Criterion) {
    let truth = room();

    c.bench_function("accuracy_score_800", |b| {
        b.iter(|| black_box(MappingAccuracy::score(black_box(&truth), &truth)))
    });
}

fn bench_run(c: &mut Criterion) {
    let mut config = ParikramaConfig::default();
    config.run.max_ticks = 500;
    let truth = room();

    c.bench_function("run_500_ticks", |b| {
        b.iter(|| {
            let mut sim = Simulation::new(&config, truth.clone());
            black_box(sim.run())
        })
    });
}

criterion_group!(
    benches,
    bench_sensor_sample,
    bench_detect,
    bench_accuracy,
    bench_run
);
criterion_main!(benches);
