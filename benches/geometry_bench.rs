use criterion::{Criterion, criterion_group, criterion_main};
use linechart_rs::core::{
    Bounds, DataPoint, FillContext, FillShapes, LimitBand, annotate_series, classify_segments,
    cubic_spline_path,
};
use linechart_rs::render::Color;
use std::hint::black_box;

fn sample_points(count: usize, gap_every: usize) -> Vec<DataPoint> {
    let mut offset = 0.0;
    (0..count)
        .map(|i| {
            if i > 0 && i % gap_every == 0 {
                offset += 5.0;
            }
            let y = (i as f64 * 0.05).sin() * 120.0;
            DataPoint::new(i as f64 + offset, y)
        })
        .collect()
}

fn bench_annotate_classify_10k(c: &mut Criterion) {
    let points = sample_points(10_000, 500);
    let band = LimitBand::new(80.0, -80.0, Color::rgb(1.0, 0.0, 0.0)).expect("valid band");

    c.bench_function("annotate_classify_10k", |b| {
        b.iter(|| {
            let augmented =
                annotate_series(black_box(&points), black_box(Some(&band)), black_box(2.0));
            let _ = classify_segments(black_box(&augmented), Some(&band), black_box(1.0));
        })
    });
}

fn bench_fill_shapes_10k(c: &mut Criterion) {
    let points = sample_points(10_000, 500);
    let band = LimitBand::new(80.0, -80.0, Color::rgb(1.0, 0.0, 0.0)).expect("valid band");
    let augmented = annotate_series(&points, Some(&band), 2.0);
    let ctx = FillContext {
        fill_min: -150.0,
        phase_y: 1.0,
        axis_min: -150.0,
        axis_max: 150.0,
    };

    c.bench_function("fill_shapes_10k", |b| {
        b.iter(|| {
            let shapes = FillShapes::new(black_box(&augmented), Some(&band), black_box(ctx));
            let _ = black_box(shapes.count());
        })
    });
}

fn bench_cubic_spline_10k(c: &mut Criterion) {
    let points = sample_points(10_000, usize::MAX);

    c.bench_function("cubic_spline_10k", |b| {
        b.iter(|| {
            let _ = cubic_spline_path(
                black_box(&points),
                Bounds::all(&points),
                black_box(0.2),
                black_box(1.0),
            );
        })
    });
}

criterion_group!(
    benches,
    bench_annotate_classify_10k,
    bench_fill_shapes_10k,
    bench_cubic_spline_10k
);
criterion_main!(benches);
