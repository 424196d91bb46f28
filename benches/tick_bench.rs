use criterion::{criterion_group, criterion_main, Criterion};
use sparse_life::{naive::NaiveField, Config, LifeEngine};

const N: usize = 1 << 10;
const SEED: u64 = 42;
const FILL_RATE: f64 = 0.3;

fn soup(fill_rate: f64) -> LifeEngine {
    let mut life = LifeEngine::new(&Config::with_size(N, N, 32).seeded(SEED)).unwrap();
    life.initialize(fill_rate);
    life
}

fn bench_sparse_dense(c: &mut Criterion) {
    let mut life = soup(FILL_RATE);
    c.bench_function("sparse_dense", |b| b.iter(|| life.tick()));
}

// the case the active region is built for: a few cells on a big grid
fn bench_sparse_thin(c: &mut Criterion) {
    let mut life = soup(0.002);
    c.bench_function("sparse_thin", |b| b.iter(|| life.tick()));
}

fn bench_naive(c: &mut Criterion) {
    let life = soup(FILL_RATE);
    let mut naive = NaiveField::from_bitmap(N, N, life.grid().bitmap());
    c.bench_function("naive", |b| b.iter(|| naive.update(1)));
}

criterion_group!(benches, bench_sparse_dense, bench_sparse_thin, bench_naive);
criterion_main!(benches);
