use super::entity::{Located, Position};
use serde::{Deserialize, Serialize};

/// Food resource in the world.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: u64,
    pub position: Position,
    /// Positive; multiplied by the eater's metabolism on consumption.
    pub nutrition: f64,
}

impl Food {
    #[must_use]
    pub fn new(id: u64, position: Position, nutrition: f64) -> Self {
        Self {
            id,
            position,
            nutrition,
        }
    }
}

impl Located for Food {
    fn position(&self) -> Position {
        self.position
    }
}

/// Static blocker. Never moves and is never removed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u64,
    pub position: Position,
}

impl Obstacle {
    #[must_use]
    pub fn new(id: u64, position: Position) -> Self {
        Self { id, position }
    }
}

impl Located for Obstacle {
    fn position(&self) -> Position {
        self.position
    }
}
