// src/core/static_random.rs

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub struct StaticRandom {
    rng: ChaCha8Rng,
}

impl StaticRandom {
    pub fn new() -> Self {
        let mut seed = [0u8; 32];
        rand::rng().fill(&mut seed);
        let mut rng = ChaCha8Rng::from_seed(seed);
        let counter = rng.random_range(100..200);
        for _ in 0..counter {
            rng.random::<u32>();
        }
        StaticRandom { rng }
    }

    /// Reproducible stream for a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        StaticRandom { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn from_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    pub fn next(&mut self) -> u32 {
        self.rng.random()
    }

    /// Uniform value in `[min_value, max_value)`.
    pub fn next_range<T>(&mut self, min_value: T, max_value: T) -> T
    where
        T: rand::distr::uniform::SampleUniform + PartialOrd,
    {
        self.rng.random_range(min_value..max_value)
    }
}

impl Default for StaticRandom {
    fn default() -> Self {
        Self::new()
    }
}
