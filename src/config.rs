//! Configuration parameters for the hub location core.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Configuration settings for initial solutions and neighborhood moves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Draws allowed per node before a move generator gives up
    pub attempts_per_node: usize,
    /// Lower bound on the draws allowed, whatever the instance size
    pub min_attempts: usize,
    /// Optional seed for reproducible random streams
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            attempts_per_node: 50,
            min_attempts: 1000,
            seed: None,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the number of draws allowed per node.
    pub fn with_attempts_per_node(mut self, attempts: usize) -> Self {
        self.attempts_per_node = attempts;
        self
    }

    /// Set the minimum number of draws.
    pub fn with_min_attempts(mut self, attempts: usize) -> Self {
        self.min_attempts = attempts;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Retry budget of a move generator on an instance with `node_count` nodes.
    pub fn max_attempts(&self, node_count: usize) -> usize {
        self.attempts_per_node
            .saturating_mul(node_count)
            .max(self.min_attempts)
            .max(1)
    }

    /// Build the random generator described by this configuration.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}
