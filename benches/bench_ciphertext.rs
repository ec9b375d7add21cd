use ckks_rns::ckks::{Ciphertext, Parameters};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};

pub fn bench_ciphertext_construction(c: &mut Criterion) {
    let params = Parameters::generate(12, 3, 2, 40).unwrap();
    let scale = (1u64 << 40) as f64;

    let mut group = c.benchmark_group("CKKS ciphertext construction");
    group.bench_function("New", |b| {
        b.iter(|| Ciphertext::new(&params, 1, 3, scale).unwrap())
    });
    group.bench_function("NewQP", |b| {
        b.iter(|| Ciphertext::new_qp(&params, 1, 3, scale).unwrap())
    });
    group.bench_function("NewRandom", |b| {
        b.iter(|| {
            Ciphertext::new_random(StdRng::seed_from_u64(0), &params, 1, 3, scale).unwrap()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_ciphertext_construction);
criterion_main!(benches);
