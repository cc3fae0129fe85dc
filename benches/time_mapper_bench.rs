// Benchmark for grid time conversion
// Measures pixel -> time over a full drag sweep, as run every frame while dragging

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_calendar_grid::models::calibration::CalibrationOffset;
use rust_calendar_grid::models::grid::{ColumnId, GridSnapshot};
use rust_calendar_grid::services::time_mapper::{pixel_to_time, time_to_client_y};

fn bench_drag_sweep(c: &mut Criterion) {
    let snapshot = GridSnapshot::new(ColumnId("2025-01-01".to_string()), 80.0, 320.0, 48.0, 6)
        .expect("valid snapshot");
    let offset = CalibrationOffset::new(-12.5).expect("finite offset");

    let mut group = c.benchmark_group("drag_sweep");
    for steps in [60usize, 600, 6000] {
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            b.iter(|| {
                let mut last = 0.0f32;
                for i in 0..steps {
                    let y = 80.0 + (i as f32 * 600.0 / steps as f32);
                    let time = pixel_to_time(black_box(y), &snapshot, offset);
                    last = time_to_client_y(time, &snapshot, offset);
                }
                black_box(last)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_drag_sweep);
criterion_main!(benches);
