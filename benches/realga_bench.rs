//! Criterion benchmarks for the realga engine.
//!
//! Uses a synthetic sphere objective so the numbers reflect operator
//! overhead only.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use realga::ga::{
    Chromosome, CrossoverMethod, Entity, GaConfig, GeneticAlgorithm, MutationMethod,
    MutationParams, Randomizer,
};

#[derive(Clone, Default)]
struct SphereIndividual {
    dna: Chromosome,
}

impl Entity for SphereIndividual {
    fn chromosome(&self) -> &Chromosome {
        &self.dna
    }
    fn chromosome_mut(&mut self) -> &mut Chromosome {
        &mut self.dna
    }
}

// Maximize -sum(x_i^2)
fn sphere(ind: &SphereIndividual) -> f64 {
    -ind.dna.iter().map(|x| x * x).sum::<f64>()
}

fn engine(
    pop_size: usize,
    dim: usize,
) -> GeneticAlgorithm<SphereIndividual, fn(&SphereIndividual) -> f64, fn() -> SphereIndividual> {
    let mut ga = GeneticAlgorithm::with_config(
        SphereIndividual::default as fn() -> SphereIndividual,
        sphere as fn(&SphereIndividual) -> f64,
        GaConfig::default().with_seed(42),
    )
    .expect("valid config");
    ga.add_entities((0..pop_size).map(|_| SphereIndividual::default()));
    ga.initialize(dim, -5.0, 5.0).expect("valid interval");
    ga
}

fn bench_run_default(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_default");

    for method in [
        CrossoverMethod::Uniform,
        CrossoverMethod::Proportional,
        CrossoverMethod::Mean,
    ] {
        group.bench_with_input(
            BenchmarkId::new("sphere_50d", format!("{method:?}")),
            &method,
            |b, &method| {
                let mut ga = engine(100, 50);
                b.iter(|| {
                    black_box(
                        ga.run_default(20, method, MutationMethod::NewValue, 0.1)
                            .expect("pipeline"),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_generations(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation_loop");
    group.sample_size(20);

    for &pop_size in &[50, 200] {
        group.bench_with_input(
            BenchmarkId::new("sphere_10d", pop_size),
            &pop_size,
            |b, &pop_size| {
                b.iter(|| {
                    let mut ga = engine(pop_size, 10);
                    let params = MutationParams::default().with_bounds(-1.0, 1.0);
                    for _ in 0..20 {
                        let parents = ga.select_and_remove(4).expect("parents");
                        let mut kids = ga
                            .crossover(CrossoverMethod::Uniform, 4, &parents)
                            .expect("children");
                        for kid in &mut kids {
                            let method = MutationMethod::Boundary;
                            ga.mutate(method, Randomizer::Normal, true, kid, &params);
                        }
                        ga.add_entities(kids);
                        ga.next_generation();
                    }
                    black_box(ga.best().map(|(_, f)| f))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_run_default, bench_generations);
criterion_main!(benches);
