//! Configuration for rolling.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Settings for rolling dice pools.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiceConfig {
    /// RNG seed for reproducible rolls. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl DiceConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the RNG described by this configuration.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
