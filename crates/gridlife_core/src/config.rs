//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `config.toml` file read by the headless driver.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impl)
//! 2. `config.toml` file (overrides defaults)
//! 3. Command-line flags (seed and tick count only)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! log_interval = 100
//! max_ticks = 10000
//!
//! [world]
//! width = 80
//! height = 40
//! initial_population = 60
//! initial_food = 120
//! initial_obstacles = 20
//! walls = true
//! food_nutrition = 1.0
//! food_generation_countdown = 5
//! food_generation_countdown_max = 5
//! food_per_generation = 3
//! seed = 42
//!
//! [founders]
//! metabolism = 20.0
//! initial_ticks_without_food = 0.0
//! ```

use gridlife_data::DEFAULT_METABOLISM;
use serde::{Deserialize, Serialize};

/// Grid dimensions, initial seeding and food regrowth.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: i32,
    pub height: i32,
    pub initial_population: usize,
    pub initial_food: usize,
    /// Random interior obstacles, on top of the border walls.
    pub initial_obstacles: usize,
    /// Place obstacles on every cell of the outer ring.
    pub walls: bool,
    pub food_nutrition: f64,
    pub food_generation_countdown: u32,
    pub food_generation_countdown_max: u32,
    pub food_per_generation: usize,
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 40,
            initial_population: 60,
            initial_food: 120,
            initial_obstacles: 20,
            walls: true,
            food_nutrition: 1.0,
            food_generation_countdown: 5,
            food_generation_countdown_max: 5,
            food_per_generation: 3,
            seed: None,
        }
    }
}

impl WorldConfig {
    /// Cells left for seeding once the walls are in place.
    #[must_use]
    pub fn free_cells(&self) -> usize {
        let inset = if self.walls { 2 } else { 0 };
        let w = (self.width - inset).max(0) as usize;
        let h = (self.height - inset).max(0) as usize;
        w * h
    }
}

/// Non-heritable settings applied to the initial population.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FounderConfig {
    pub metabolism: f64,
    pub initial_ticks_without_food: f64,
}

impl Default for FounderConfig {
    fn default() -> Self {
        Self {
            metabolism: DEFAULT_METABOLISM,
            initial_ticks_without_food: 0.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub founders: FounderConfig,
    /// Ticks between population log lines.
    pub log_interval: u64,
    /// Upper bound for a headless run; 0 means until extinction.
    pub max_ticks: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            founders: FounderConfig::default(),
            log_interval: 100,
            max_ticks: 10_000,
        }
    }
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        let world = &self.world;
        anyhow::ensure!(world.width > 0, "World width must be positive");
        anyhow::ensure!(world.width <= 1000, "World width too large (max 1000)");
        anyhow::ensure!(world.height > 0, "World height must be positive");
        anyhow::ensure!(world.height <= 1000, "World height too large (max 1000)");

        let cells = world.free_cells();
        anyhow::ensure!(
            world.initial_population + world.initial_food + world.initial_obstacles <= cells,
            "Initial entities ({}) do not fit on a {}x{} grid",
            world.initial_population + world.initial_food + world.initial_obstacles,
            world.width,
            world.height
        );
        anyhow::ensure!(
            world.food_nutrition > 0.0,
            "Food nutrition must be positive"
        );
        anyhow::ensure!(
            world.food_generation_countdown <= world.food_generation_countdown_max,
            "Food generation countdown must not exceed its max"
        );

        anyhow::ensure!(
            self.founders.metabolism > 0.0,
            "Founder metabolism must be positive"
        );
        anyhow::ensure!(
            self.founders.initial_ticks_without_food.is_finite(),
            "Founder hunger must be finite"
        );

        anyhow::ensure!(self.log_interval > 0, "Log interval must be positive");
        Ok(())
    }

    /// Parses and validates a `config.toml` document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Hash of every setting that changes simulation outcomes.
    ///
    /// Two runs with the same fingerprint and the same seed are identical.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.world).as_bytes());
        hasher.update(format!("{:?}", self.founders).as_bytes());
        hex::encode(hasher.finalize())
    }
}
