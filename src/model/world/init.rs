use crate::model::config::AppConfig;
use crate::model::environment::FoodGrowth;
use crate::model::lifecycle;
use crate::model::world::{stats, World};
use gridlife_core::{Environment, IdentityAllocator, Metrics};
use gridlife_data::{Food, Obstacle, Position};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

impl World {
    /// Seeds a fresh world from `config`.
    ///
    /// Border walls come first, then random interior obstacles, food and
    /// founders, each on its own free cell.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let mut rng = if let Some(seed) = config.world.seed {
            ChaCha8Rng::seed_from_u64(seed)
        } else {
            ChaCha8Rng::from_entropy()
        };

        let world_cfg = &config.world;
        let (width, height) = (world_cfg.width, world_cfg.height);
        let mut ids = IdentityAllocator::new();

        let mut obstacles: Vec<Obstacle> = if world_cfg.walls {
            border_cells(width, height)
                .into_iter()
                .map(|pos| Obstacle::new(ids.next_id(), pos))
                .collect()
        } else {
            Vec::new()
        };

        let mut free = interior_cells(width, height, world_cfg.walls);
        free.shuffle(&mut rng);
        let mut free = free.into_iter();
        let mut take_cell = || {
            free.next()
                .ok_or_else(|| anyhow::anyhow!("Ran out of free cells while seeding"))
        };

        for _ in 0..world_cfg.initial_obstacles {
            obstacles.push(Obstacle::new(ids.next_id(), take_cell()?));
        }

        let mut foods = Vec::with_capacity(world_cfg.initial_food);
        for _ in 0..world_cfg.initial_food {
            foods.push(Food::new(ids.next_id(), take_cell()?, world_cfg.food_nutrition));
        }

        let mut agents = Vec::with_capacity(world_cfg.initial_population);
        for _ in 0..world_cfg.initial_population {
            let pos = take_cell()?;
            let mut founder = lifecycle::create_founder(ids.next_id(), pos, width, height, &mut rng);
            founder.metabolism = config.founders.metabolism;
            founder.current_ticks_without_food = config.founders.initial_ticks_without_food;
            agents.push(founder);
        }

        let env = Environment::new(
            width,
            height,
            obstacles,
            foods,
            agents,
            world_cfg.food_generation_countdown,
            world_cfg.food_generation_countdown_max,
        )?
        .with_food_growth(FoodGrowth {
            nutrition: world_cfg.food_nutrition,
            batch: world_cfg.food_per_generation,
        });

        tracing::info!(
            width,
            height,
            population = env.agents().len(),
            food = env.foods().len(),
            obstacles = env.obstacles().len(),
            "World seeded"
        );

        Ok(Self {
            tick: 0,
            pop_stats: stats::population_stats(&env),
            metrics: Metrics::new(),
            config,
            env,
            rng,
        })
    }
}

/// The outer ring of the grid, each cell once.
fn border_cells(width: i32, height: i32) -> Vec<Position> {
    let mut cells = Vec::new();
    for y in 0..height {
        for x in 0..width {
            if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
                cells.push(Position::new(x, y));
            }
        }
    }
    cells
}

fn interior_cells(width: i32, height: i32, walls: bool) -> Vec<Position> {
    let inset = i32::from(walls);
    let mut cells = Vec::new();
    for y in inset..height - inset {
        for x in inset..width - inset {
            cells.push(Position::new(x, y));
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_cells_form_a_ring() {
        let ring = border_cells(4, 3);
        assert_eq!(ring.len(), 10);
        assert!(!ring.contains(&Position::new(1, 1)));
        assert!(!ring.contains(&Position::new(2, 1)));
    }

    #[test]
    fn test_interior_skips_walls() {
        assert_eq!(interior_cells(4, 3, true), vec![Position::new(1, 1), Position::new(2, 1)]);
        assert_eq!(interior_cells(4, 3, false).len(), 12);
    }
}
