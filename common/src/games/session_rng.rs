use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG owned by one game. Keeping the seed lets a game be replayed exactly.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn random_bool(&mut self) -> bool {
        self.rng.random()
    }

    /// Uniform pick from a non-empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..items.len());
        items.get(idx)
    }
}
