use serde::{Deserialize, Serialize};

/// Why an agent was removed from the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeathCause {
    OldAge,
    Starvation,
}

/// Tagged union of all simulation events emitted during a tick.
///
/// Serialised with `#[serde(tag = "event")]` for streaming JSONL output.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "event")]
pub enum LiveEvent {
    /// An offspring was added to the environment.
    Birth {
        id: u64,
        parents: (u64, u64),
        x: i32,
        y: i32,
    },
    /// An agent exceeded its age or starvation cap.
    Death {
        id: u64,
        age: u64,
        cause: DeathCause,
        x: i32,
        y: i32,
    },
    /// An agent consumed a food item.
    Meal {
        agent_id: u64,
        food_id: u64,
        x: i32,
        y: i32,
    },
    /// Food regrew after the generation countdown expired.
    FoodSpawned { id: u64, x: i32, y: i32 },
}

/// Aggregate population figures, recomputed after each tick.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PopulationStats {
    pub population: usize,
    pub food_count: usize,
    pub avg_age: f64,
    pub avg_speed: f64,
    pub avg_sensing_radius: f64,
    pub avg_mating_incentive: f64,
    pub avg_mutation_chance: f64,
    /// Mean stored fat; hungry agents count as zero.
    pub avg_excess_fat: f64,
}
