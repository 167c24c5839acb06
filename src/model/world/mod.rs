use crate::model::config::AppConfig;
use gridlife_core::{Environment, Metrics};
use gridlife_data::PopulationStats;
use rand_chacha::ChaCha8Rng;

pub mod init;
pub mod stats;
pub mod update;

/// A seeded environment plus the bookkeeping needed to run it headless.
pub struct World {
    pub tick: u64,
    pub config: AppConfig,
    pub pop_stats: PopulationStats,
    pub metrics: Metrics,
    env: Environment,
    rng: ChaCha8Rng,
}

impl World {
    #[must_use]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Direct access for tests and tools that stage scenarios.
    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    #[must_use]
    pub fn population(&self) -> usize {
        self.env.agents().len()
    }

    #[must_use]
    pub fn is_extinct(&self) -> bool {
        self.env.agents().is_empty()
    }
}
