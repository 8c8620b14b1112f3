// ============================================================================
// Fixed-Point Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Arithmetic - multiply/divide through the i128 widening path
// 2. Transcendental - iterative and series-based functions
// 3. Geometry - vector and polygon operations built on the numeric layer
// 4. Cache - shared value lookup under the mutex
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lockstep_math::prelude::*;
use std::hint::black_box;

fn fp(s: &str) -> FixedPoint {
    s.parse().unwrap()
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");
    let a = fp("1234.567891");
    let b = fp("-3.25");

    group.bench_function("multiply", |bench| {
        bench.iter(|| black_box(a).multiply(black_box(b)))
    });
    group.bench_function("divide", |bench| {
        bench.iter(|| black_box(a).divide(black_box(b)))
    });
    group.bench_function("parse", |bench| {
        bench.iter(|| black_box("1234.567891").parse::<FixedPoint>())
    });
    group.bench_function("display", |bench| bench.iter(|| black_box(a).to_string()));

    group.finish();
}

// ============================================================================
// Transcendental Benchmarks
// Inputs span the ranges where iteration counts differ
// ============================================================================

fn benchmark_sqrt(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqrt");

    for input in ["0.25", "2", "1000", "1000000"].iter() {
        let value = fp(input);
        group.bench_with_input(BenchmarkId::new("sqrt", input), &value, |b, v| {
            b.iter(|| black_box(*v).sqrt())
        });
    }

    group.finish();
}

fn benchmark_trigonometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("trigonometry");

    for input in ["0.3", "1.2", "5.5", "-100"].iter() {
        let angle = fp(input);
        group.bench_with_input(BenchmarkId::new("sin", input), &angle, |b, v| {
            b.iter(|| black_box(*v).sin())
        });
        group.bench_with_input(BenchmarkId::new("sin_cos", input), &angle, |b, v| {
            b.iter(|| black_box(*v).sin_cos())
        });
    }

    let ratio = fp("0.6");
    group.bench_function("asin", |b| b.iter(|| black_box(ratio).asin()));
    group.bench_function("atan2", |b| {
        b.iter(|| black_box(fp("-3")).atan2(black_box(fp("4"))))
    });

    group.finish();
}

fn benchmark_exponential(c: &mut Criterion) {
    let mut group = c.benchmark_group("exponential");

    for input in ["0.5", "2.718282", "1000"].iter() {
        let value = fp(input);
        group.bench_with_input(BenchmarkId::new("ln", input), &value, |b, v| {
            b.iter(|| black_box(*v).ln())
        });
    }
    for input in ["-3.5", "0.5", "10.25"].iter() {
        let value = fp(input);
        group.bench_with_input(BenchmarkId::new("exp", input), &value, |b, v| {
            b.iter(|| black_box(*v).exp())
        });
    }

    let base = fp("1.5");
    group.bench_function("pow_integer", |b| {
        b.iter(|| black_box(base).pow(black_box(fp("7"))))
    });
    group.bench_function("pow_fractional", |b| {
        b.iter(|| black_box(base).pow(black_box(fp("2.5"))))
    });

    group.finish();
}

// ============================================================================
// Geometry Benchmarks
// ============================================================================

fn benchmark_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");
    let v = Vec2::new(fp("3.7"), fp("-1.3"));

    group.bench_function("normalize", |b| b.iter(|| black_box(v).normalize()));
    group.bench_function("rotate", |b| {
        b.iter(|| black_box(v).rotate(black_box(FixedPoint::QUARTER_PI)))
    });
    group.bench_function("mat3_transform", |b| {
        let m = Mat3::translation(Vec2::from_i32(5, 2)) * Mat3::rotation(fp("0.5"));
        b.iter(|| black_box(m).transform_point(black_box(v)))
    });

    for sides in [4i32, 8, 32].iter() {
        let step = FixedPoint::TWO_PI.div_int(i64::from(*sides)).unwrap();
        let polygon = Polygon::new(
            (0..*sides).map(|i| Vec2::from_angle(step.mul_int(i64::from(i))).scale(fp("10"))),
        );
        let probe = Vec2::from_i32(1, 2);
        group.bench_with_input(
            BenchmarkId::new("polygon_contains", sides),
            &polygon,
            |b, poly| b.iter(|| black_box(poly).contains(black_box(probe))),
        );
    }

    group.finish();
}

// ============================================================================
// Cache Benchmarks
// ============================================================================

fn benchmark_cache(c: &mut Criterion) {
    let cache = ValueCache::new(1024).unwrap();
    let values: Vec<FixedPoint> = (0..512).map(FixedPoint::from_i32).collect();

    c.bench_function("cache_get", |b| {
        let mut i = 0usize;
        b.iter(|| {
            i = (i + 1) % values.len();
            black_box(cache.get(values[i]))
        })
    });
}

criterion_group!(
    benches,
    benchmark_arithmetic,
    benchmark_sqrt,
    benchmark_trigonometry,
    benchmark_exponential,
    benchmark_geometry,
    benchmark_cache,
);
criterion_main!(benches);
