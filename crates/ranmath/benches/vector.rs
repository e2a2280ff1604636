use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use ranmath::{F32x3, F32x4, Vector};

const BATCH_SIZES: [usize; 3] = [64, 1024, 16384];

fn create_test_vectors<const N: usize>(len: usize) -> Vec<Vector<f32, N>> {
    let mut rng = StdRng::seed_from_u64(7);
    (0..len)
        .map(|_| Vector::new(core::array::from_fn(|_| rng.gen_range(-100.0..100.0))))
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_f32x3");
    for len in BATCH_SIZES {
        let vectors: Vec<F32x3> = create_test_vectors(len);
        let glam_vectors: Vec<glam::Vec3> = vectors.iter().map(|v| (*v).into()).collect();

        group.bench_with_input(BenchmarkId::new("ranmath", len), &vectors, |b, vectors| {
            b.iter(|| {
                for v in vectors {
                    black_box(v.normalize());
                }
            })
        });

        group.bench_with_input(BenchmarkId::new("glam", len), &glam_vectors, |b, vectors| {
            b.iter(|| {
                for v in vectors {
                    black_box(v.normalize_or_zero());
                }
            })
        });
    }
    group.finish();
}

fn bench_dot(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot_f32x4");
    for len in BATCH_SIZES {
        let vectors: Vec<F32x4> = create_test_vectors(len);
        let glam_vectors: Vec<glam::Vec4> = vectors.iter().map(|v| (*v).into()).collect();

        group.bench_with_input(BenchmarkId::new("ranmath", len), &vectors, |b, vectors| {
            b.iter(|| {
                let mut sum = 0.0;
                for pair in vectors.windows(2) {
                    sum += pair[0].dot(pair[1]);
                }
                sum
            })
        });

        group.bench_with_input(BenchmarkId::new("glam", len), &glam_vectors, |b, vectors| {
            b.iter(|| {
                let mut sum = 0.0;
                for pair in vectors.windows(2) {
                    sum += pair[0].dot(pair[1]);
                }
                sum
            })
        });
    }
    group.finish();
}

fn bench_swizzle_write(c: &mut Criterion) {
    let vectors: Vec<F32x4> = create_test_vectors(1024);
    c.bench_function("swizzle_write_f32x4", |b| {
        let mut output = vectors.clone();
        b.iter(|| {
            for v in output.iter_mut() {
                *v.yz_mut() = v.zy();
            }
            black_box(&output);
        })
    });
}

criterion_group!(benches, bench_normalize, bench_dot, bench_swizzle_write);
criterion_main!(benches);
