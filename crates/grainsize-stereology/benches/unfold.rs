use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grainsize_histogram::{DensityHistogramBuilder, HistogramBuilder};
use grainsize_stereology::unfold_population;
use rand::SeedableRng;
use rand_distr::{Distribution, LogNormal};

fn unfold_benchmark(c: &mut Criterion) {
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(99);
    let lognormal = LogNormal::new(15.0f64.ln(), 1.5f64.ln()).unwrap();
    let diameters: Vec<f64> = (0..5000).map(|_| lognormal.sample(&mut rng)).collect();

    for numbins in [10usize, 20, 40] {
        let histogram = DensityHistogramBuilder::with_count(numbins)
            .build(&diameters)
            .unwrap();
        c.bench_function(&format!("unfold_{numbins}_classes"), |b| {
            b.iter(|| unfold_population(black_box(&histogram)).unwrap())
        });
    }
}

criterion_group!(benches, unfold_benchmark);
criterion_main!(benches);
