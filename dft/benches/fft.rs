use std::any::type_name;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use num_complex::Complex64;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tp_dft::{FourierDft, NaiveDft, RustFftDft};

fn bench_fft(c: &mut Criterion) {
    // Powers of two alongside awkward lengths: products of small primes and a large prime.
    let sizes = &[256, 1000, 1024, 4096, 4099];
    let small_sizes = &[64, 100, 256];

    dft::<RustFftDft>(c, sizes);
    idft::<RustFftDft>(c, sizes);
    dft::<NaiveDft>(c, small_sizes);
}

fn rand_vec(rng: &mut SmallRng, n: usize) -> Vec<Complex64> {
    (0..n)
        .map(|_| Complex64::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)))
        .collect()
}

fn dft<Dft: FourierDft>(c: &mut Criterion, sizes: &[usize]) {
    let mut group = c.benchmark_group(format!("dft::<{}>", type_name::<Dft>()));
    group.sample_size(10);

    let mut rng = SmallRng::seed_from_u64(1);
    for &n in sizes {
        let samples = rand_vec(&mut rng, n);
        let dft = Dft::default();
        group.bench_with_input(BenchmarkId::from_parameter(n), &dft, |b, dft| {
            b.iter(|| black_box(dft.dft(samples.clone())));
        });
    }
}

fn idft<Dft: FourierDft>(c: &mut Criterion, sizes: &[usize]) {
    let mut group = c.benchmark_group(format!("idft::<{}>", type_name::<Dft>()));
    group.sample_size(10);

    let mut rng = SmallRng::seed_from_u64(2);
    for &n in sizes {
        let spectrum = rand_vec(&mut rng, n);
        let dft = Dft::default();
        group.bench_with_input(BenchmarkId::from_parameter(n), &dft, |b, dft| {
            b.iter(|| black_box(dft.idft(spectrum.clone())));
        });
    }
}

criterion_group!(benches, bench_fft);
criterion_main!(benches);
