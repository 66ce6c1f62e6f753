use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use distdot::prelude::dot_product;
use distdot::prelude::random_vector;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn dot_product_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot_product");
    let mut rng = StdRng::seed_from_u64(42);
    for num_elements in [1000, 100000] {
        let a = random_vector(&mut rng, num_elements);
        let b = random_vector(&mut rng, num_elements);
        group.throughput(Throughput::Elements(num_elements as u64));
        group.bench_function(BenchmarkId::from_parameter(num_elements), |bench| {
            bench.iter(|| dot_product(black_box(&a), black_box(&b)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, dot_product_benchmark);
criterion_main!(benches);
