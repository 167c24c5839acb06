use super::genotype::Genome;
use serde::{Deserialize, Serialize};

/// Food with 1 nutrition lowers `current_ticks_without_food` by this much.
pub const DEFAULT_METABOLISM: f64 = 20.0;

/// Integer cell on the unbounded simulation grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shifted cell. Saturates at the edge of the `i32` range.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Euclidean distance between two cells.
    #[must_use]
    pub fn distance_to(self, other: Position) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        (dx * dx + dy * dy).sqrt()
    }

    /// Largest per-axis displacement between two cells.
    #[must_use]
    pub fn chebyshev_to(self, other: Position) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }
}

/// Anything that occupies a grid cell.
pub trait Located {
    fn position(&self) -> Position;
}

impl Located for Position {
    fn position(&self) -> Position {
        *self
    }
}

/// A single simulated organism.
///
/// An agent is alive exactly as long as it sits in the environment's agent
/// collection; there is no separate "dead" flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: u64,
    pub position: Position,
    pub genome: Genome,
    /// Converts one unit of nutrition into ticks of starvation relief.
    pub metabolism: f64,
    pub current_age: u64,
    /// Negative values are stored fat.
    pub current_ticks_without_food: f64,
}

impl Agent {
    #[must_use]
    pub fn new(id: u64, position: Position, genome: Genome) -> Self {
        Self {
            id,
            position,
            genome,
            metabolism: DEFAULT_METABOLISM,
            current_age: 0,
            current_ticks_without_food: 0.0,
        }
    }

    /// Number of action rounds per tick; fractional speeds round up.
    #[must_use]
    pub fn speed(&self) -> u32 {
        if self.genome.speed.value <= 0.0 {
            0
        } else {
            self.genome.speed.value.ceil() as u32
        }
    }

    #[must_use]
    pub fn sensing_radius(&self) -> f64 {
        self.genome.sensing_radius.value
    }

    /// Fat currently carried, zero when the agent is hungry.
    #[must_use]
    pub fn excess_fat(&self) -> f64 {
        (-self.current_ticks_without_food).max(0.0)
    }
}

impl Located for Agent {
    fn position(&self) -> Position {
        self.position
    }
}
