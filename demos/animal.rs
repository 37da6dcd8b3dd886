//! Runs the default pipeline once on a small herd and prints the children.
//!
//! ```text
//! RUST_LOG=debug cargo run --example animal
//! ```

use std::fmt;

use realga::ga::{Chromosome, CrossoverMethod, Entity, GaConfig, GeneticAlgorithm, MutationMethod};

const DISTANCE_TRAVEL: f64 = 100.0;

#[derive(Debug, Clone, Default)]
struct Animal {
    value: f64,
    dna: Chromosome,
}

impl Animal {
    fn new(value: f64) -> Self {
        Self {
            value,
            dna: Chromosome::new(),
        }
    }
}

impl Entity for Animal {
    fn chromosome(&self) -> &Chromosome {
        &self.dna
    }
    fn chromosome_mut(&mut self) -> &mut Chromosome {
        &mut self.dna
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Animal [value={} DNA: {}]", self.value, self.dna)
    }
}

fn cost(animal: &Animal) -> f64 {
    animal.value * DISTANCE_TRAVEL
}

fn main() -> realga::Result<()> {
    env_logger::init();

    let seed = std::env::args().nth(1).and_then(|s| s.parse().ok());
    let mut config = GaConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let mut genetic = GeneticAlgorithm::<Animal, _, _>::with_config(Animal::default, cost, config)?;
    genetic.add_entities([100.0, 3.0, 2.0, 5.0].map(Animal::new));
    genetic.initialize_default(20)?;

    let children =
        genetic.run_default(10, CrossoverMethod::Uniform, MutationMethod::NewValue, 0.99)?;
    for child in &children {
        println!("{child}");
    }
    Ok(())
}
