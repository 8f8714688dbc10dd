use criterion::{criterion_group, criterion_main, Bencher, BenchmarkId, Criterion};
use std::time::Duration;
use tinyraster::{Canvas, Color, Lines, Passthrough, Position, Rng, ShadedVertex, ShaderStage};

fn lines_benchmark(b: &mut Bencher, &[width, height]: &[usize; 2]) {
    let mut canvas = Canvas::new(width, height);
    let mut rng = Rng::new(42);
    let lines = (0..100)
        .map(|_| {
            (
                Position::random(width, height, &mut rng),
                Position::random(width, height, &mut rng),
                Color::random(&mut rng),
            )
        })
        .collect::<Vec<_>>();

    b.iter(|| {
        for &(start, end, color) in &lines {
            Lines.draw_line(&mut canvas, start, end, color).unwrap();
        }
    });
}

fn fill_benchmark(b: &mut Bencher, &[width, height]: &[usize; 2]) {
    let mut canvas = Canvas::new(width, height);
    let (w, h) = ((width - 1) as f64, (height - 1) as f64);
    // Two triangles covering the whole canvas
    let vertices = [
        ShadedVertex::new(0.0, 0.0, 255.0, 0.0, 0.0),
        ShadedVertex::new(w, h, 0.0, 255.0, 0.0),
        ShadedVertex::new(0.0, h, 0.0, 0.0, 255.0),
        ShadedVertex::new(w, 0.0, 0.0, 0.0, 255.0),
    ];
    let indices = [0, 1, 2, 0, 1, 3];
    let mut shader = Passthrough::default();

    b.iter(|| {
        shader.render(&mut canvas, &vertices, &indices).unwrap();
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    for size in &[[32, 32], [200, 200], [640, 480]] {
        let id = format!("{}x{}", size[0], size[1]);
        c.bench_with_input(BenchmarkId::new("lines", &id), size, |b, size| lines_benchmark(b, size));
        c.bench_with_input(BenchmarkId::new("fill", &id), size, |b, size| fill_benchmark(b, size));
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .warm_up_time(Duration::from_millis(1000));
    targets = criterion_benchmark
}

criterion_main!(benches);
