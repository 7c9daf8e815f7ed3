use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tp_dft::NaiveDft;
use tp_polynomial::TrigPoly;

fn bench_arith(c: &mut Criterion) {
    mul(c, &[64, 500, 1024, 4096]);
    mul_naive(c, &[16, 64, 128]);
    eval(c, &[64, 1024]);
    interpolate(c, &[1000, 1024, 4099]);
}

fn mul(c: &mut Criterion, sizes: &[usize]) {
    let mut group = c.benchmark_group("mul");
    group.sample_size(10);

    let mut rng = SmallRng::seed_from_u64(1);
    for &n in sizes {
        let f = TrigPoly::rand(&mut rng, n);
        let g = TrigPoly::rand(&mut rng, n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(f, g), |b, (f, g)| {
            b.iter(|| black_box(f * g));
        });
    }
}

fn mul_naive(c: &mut Criterion, sizes: &[usize]) {
    let mut group = c.benchmark_group("mul::<NaiveDft>");
    group.sample_size(10);

    let mut rng = SmallRng::seed_from_u64(2);
    for &n in sizes {
        let f = TrigPoly::rand(&mut rng, n);
        let g = TrigPoly::rand(&mut rng, n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(f, g), |b, (f, g)| {
            b.iter(|| black_box(f.mul_with(&NaiveDft, g)));
        });
    }
}

fn eval(c: &mut Criterion, sizes: &[usize]) {
    let mut group = c.benchmark_group("eval_many");
    group.sample_size(10);

    let mut rng = SmallRng::seed_from_u64(3);
    let points: Vec<f64> = (0..1000).map(|k| k as f64 * 0.00628).collect();
    for &n in sizes {
        let f = TrigPoly::rand(&mut rng, n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &f, |b, f| {
            b.iter(|| black_box(f.eval_many(&points)));
        });
    }
}

fn interpolate(c: &mut Criterion, sizes: &[usize]) {
    let mut group = c.benchmark_group("from_fn");
    group.sample_size(10);

    for &n in sizes {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(TrigPoly::from_fn(|x: f64| x.sin().exp(), n)));
        });
    }
}

criterion_group!(benches, bench_arith);
criterion_main!(benches);
