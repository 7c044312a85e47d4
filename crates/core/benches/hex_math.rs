use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexgrid::{Hex, Layout, Orientation, Point};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("hex-math");

    let start = Hex::new(-500, 200);
    let end = Hex::new(480, -130);
    group.bench_function("line", |b| {
        b.iter(|| black_box(start).line_to(black_box(end)).count())
    });

    let layout = Layout::new(
        Orientation::pointy(),
        Point::new(32.0, 32.0),
        Point::new(640.0, 360.0),
    )
    .unwrap();
    group.bench_function("pixel round trip", |b| {
        b.iter(|| layout.hex_at(layout.hex_to_pixel(black_box(end))))
    });
    group.bench_function("polygon corners", |b| {
        b.iter(|| layout.polygon_corners(black_box(start)))
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
