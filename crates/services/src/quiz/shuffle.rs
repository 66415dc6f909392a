use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// How a freshly fetched question list is reordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShuffleMode {
    /// Keep source order.
    Off,
    /// Uniform permutation from the thread RNG.
    #[default]
    Random,
    /// Uniform permutation from a seeded RNG, reproducible across runs.
    Seeded(u64),
}

impl ShuffleMode {
    /// Permute `items` in place (Fisher–Yates).
    pub fn apply<T>(self, items: &mut [T]) {
        match self {
            ShuffleMode::Off => {}
            ShuffleMode::Random => items.shuffle(&mut rand::rng()),
            ShuffleMode::Seeded(seed) => items.shuffle(&mut StdRng::seed_from_u64(seed)),
        }
    }
}
