use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use quadvol::utils::linspace;
use quadvol::{
    integrate_grid, integrate_simpson, integrate_spline, AxisOrder, Method, QuadraticSpline,
    SampleGrid,
};

fn bench_1d(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrate_1d");

    for n in [100_usize, 1_000, 10_000] {
        let xs = linspace(0.0, 5.0, n);
        let ys: Vec<f64> = xs.iter().map(|x| x.sin()).collect();
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("spline build+integrate", n), &n, |b, _| {
            b.iter(|| {
                let spline = QuadraticSpline::new(black_box(&xs), black_box(&ys)).unwrap();
                black_box(integrate_spline(&spline, None, None).unwrap())
            })
        });

        let spline = QuadraticSpline::new(&xs, &ys).unwrap();
        group.bench_with_input(BenchmarkId::new("spline integrate", n), &n, |b, _| {
            b.iter(|| black_box(integrate_spline(black_box(&spline), None, None).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("simpson", n), &n, |b, _| {
            b.iter(|| {
                black_box(integrate_simpson(black_box(&xs), black_box(&ys), None, None).unwrap())
            })
        });
    }

    group.finish();
}

fn bench_2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrate_2d");

    for n in [50_usize, 100, 200] {
        let xs = linspace(0.0, 1.0, n);
        let ys = linspace(0.0, 1.0, n);
        let grid = SampleGrid::from_fn(xs, ys, |x, y| x + y);
        group.throughput(Throughput::Elements((n * n) as u64));

        for (name, method) in [
            ("spline", Method::AnalyticSpline),
            ("simpson", Method::CompositeQuadrature),
        ] {
            group.bench_with_input(BenchmarkId::new(name, n), &n, |b, _| {
                b.iter(|| {
                    black_box(integrate_grid(black_box(&grid), AxisOrder::XFirst, method).unwrap())
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_1d, bench_2d);
criterion_main!(benches);
