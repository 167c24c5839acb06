use crate::model::world::World;
use gridlife_data::{Agent, Food, Obstacle, PopulationStats};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable copy of a world at one tick.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorldSnapshot {
    pub tick: u64,
    pub width: i32,
    pub height: i32,
    pub agents: Vec<Agent>,
    pub foods: Vec<Food>,
    pub obstacles: Vec<Obstacle>,
    pub stats: PopulationStats,
}

impl WorldSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl World {
    #[must_use]
    pub fn snapshot(&self) -> WorldSnapshot {
        let env = self.env();
        WorldSnapshot {
            tick: self.tick,
            width: env.width(),
            height: env.height(),
            agents: env.agents().to_vec(),
            foods: env.foods().to_vec(),
            obstacles: env.obstacles().to_vec(),
            stats: self.pop_stats.clone(),
        }
    }
}
