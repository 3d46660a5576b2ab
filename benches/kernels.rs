use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matmul_order::Matrix;

fn bench_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    group.sample_size(10);

    for &n in &[64, 128, 256] {
        let a = Matrix::random(n, 12345);
        let b = Matrix::random(n, 67890);
        let mut out = Matrix::zeros(n);

        group.bench_with_input(BenchmarkId::new("naive_ijk", n), &n, |bench, _| {
            bench.iter(|| a.mul_naive_into(black_box(&b), &mut out))
        });
        group.bench_with_input(BenchmarkId::new("cache_friendly_ikj", n), &n, |bench, _| {
            bench.iter(|| {
                out.fill_zero();
                a.mul_cache_friendly_into(black_box(&b), &mut out)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_kernels);
criterion_main!(benches);
