pub mod macros;

use gridlife_lib::model::config::AppConfig;
use gridlife_lib::model::environment::Environment;
use gridlife_lib::model::world::World;
use gridlife_data::{Agent, Food, Gene, Genome, Obstacle, Position};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[allow(dead_code)]
pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Builds agents with explicit traits; unspecified genes keep their defaults.
#[allow(dead_code)]
pub struct AgentBuilder {
    agent: Agent,
}

#[allow(dead_code)]
impl AgentBuilder {
    pub fn new(id: u64, x: i32, y: i32) -> Self {
        let genome = Genome {
            speed: Gene::recessive(1.0),
            sensing_radius: Gene::recessive(3.0),
            ticks_alive_without_food: Gene::recessive(100.0),
            potential_highest_age: Gene::recessive(100.0),
            chance_of_mutation_per_attribute: Gene::recessive(0.0),
            ..Genome::default()
        };
        Self {
            agent: Agent::new(id, Position::new(x, y), genome),
        }
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.agent.genome.speed = Gene::recessive(speed);
        self
    }

    pub fn sensing_radius(mut self, radius: f64) -> Self {
        self.agent.genome.sensing_radius = Gene::recessive(radius);
        self
    }

    pub fn max_age(mut self, age: f64) -> Self {
        self.agent.genome.potential_highest_age = Gene::recessive(age);
        self
    }

    pub fn starvation_limit(mut self, ticks: f64) -> Self {
        self.agent.genome.ticks_alive_without_food = Gene::recessive(ticks);
        self
    }

    pub fn mating(mut self, chance: f64) -> Self {
        self.agent.genome.chance_for_mating_incentive = Gene::recessive(chance);
        self
    }

    pub fn max_excess_fat(mut self, fat: f64) -> Self {
        self.agent.genome.max_excess_fat = Gene::recessive(fat);
        self
    }

    pub fn age(mut self, age: u64) -> Self {
        self.agent.current_age = age;
        self
    }

    pub fn hunger(mut self, ticks: f64) -> Self {
        self.agent.current_ticks_without_food = ticks;
        self
    }

    pub fn metabolism(mut self, metabolism: f64) -> Self {
        self.agent.metabolism = metabolism;
        self
    }

    pub fn build(self) -> Agent {
        self.agent
    }
}

#[allow(dead_code)]
pub struct EnvironmentBuilder {
    width: i32,
    height: i32,
    obstacles: Vec<Obstacle>,
    foods: Vec<Food>,
    agents: Vec<Agent>,
    countdown: u32,
    countdown_max: u32,
}

#[allow(dead_code)]
impl EnvironmentBuilder {
    pub fn new(width: i32, height: i32) -> Self {
        // Long countdown so regrowth stays out of short scenarios.
        Self {
            width,
            height,
            obstacles: Vec::new(),
            foods: Vec::new(),
            agents: Vec::new(),
            countdown: 1000,
            countdown_max: 1000,
        }
    }

    pub fn with_agent(mut self, agent: Agent) -> Self {
        self.agents.push(agent);
        self
    }

    pub fn with_food(mut self, id: u64, x: i32, y: i32, nutrition: f64) -> Self {
        self.foods.push(Food::new(id, Position::new(x, y), nutrition));
        self
    }

    pub fn with_obstacle(mut self, id: u64, x: i32, y: i32) -> Self {
        self.obstacles.push(Obstacle::new(id, Position::new(x, y)));
        self
    }

    pub fn with_countdown(mut self, countdown: u32, max: u32) -> Self {
        self.countdown = countdown;
        self.countdown_max = max;
        self
    }

    pub fn build(self) -> Environment {
        Environment::new(
            self.width,
            self.height,
            self.obstacles,
            self.foods,
            self.agents,
            self.countdown,
            self.countdown_max,
        )
        .expect("Failed to build environment")
    }
}

/// Small seeded world for driver-level tests.
#[allow(dead_code)]
pub fn seeded_world(seed: u64) -> World {
    let mut config = AppConfig::default();
    config.world.width = 30;
    config.world.height = 20;
    config.world.initial_population = 25;
    config.world.initial_food = 40;
    config.world.initial_obstacles = 10;
    config.world.seed = Some(seed);
    World::new(config).expect("Failed to create world")
}
