//! The authoritative world state and the proximity queries agents rely on.
//!
//! All range queries are linear scans over the full collections. The
//! environment is the only place that adds or removes agents and food;
//! agents ask for those changes through the methods below.

use crate::agent::{AgentFate, AgentLogic};
use crate::error::{Result, SimError};
use crate::identity::IdentityAllocator;
use crate::movement::{self, is_in_range, neighborhood};
use gridlife_data::{Agent, Food, LiveEvent, Obstacle, Position};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Placement tries per regrown food before the cell search gives up.
const MAX_PLACEMENT_ATTEMPTS: usize = 64;

/// What regrows when the food countdown reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodGrowth {
    pub nutrition: f64,
    /// Items spawned per expiry.
    pub batch: usize,
}

impl Default for FoodGrowth {
    fn default() -> Self {
        Self {
            nutrition: 1.0,
            batch: 1,
        }
    }
}

/// Everything inside one agent's sensing square.
#[derive(Debug, Default)]
pub struct Surroundings<'a> {
    pub agents: Vec<&'a Agent>,
    pub foods: Vec<&'a Food>,
    pub obstacles: Vec<&'a Obstacle>,
}

#[derive(Debug, Clone)]
pub struct Environment {
    width: i32,
    height: i32,
    obstacles: Vec<Obstacle>,
    foods: Vec<Food>,
    agents: Vec<Agent>,
    food_generation_countdown: u32,
    food_generation_countdown_max: u32,
    food_growth: FoodGrowth,
    ids: IdentityAllocator,
    pending_events: Vec<LiveEvent>,
}

impl Environment {
    /// Builds an environment around an existing population.
    ///
    /// Fails when `food_generation_countdown > food_generation_countdown_max`
    /// or when either dimension is not positive. The internal id allocator
    /// continues after the largest id found among the supplied entities.
    pub fn new(
        width: i32,
        height: i32,
        obstacles: Vec<Obstacle>,
        foods: Vec<Food>,
        agents: Vec<Agent>,
        food_generation_countdown: u32,
        food_generation_countdown_max: u32,
    ) -> Result<Self> {
        if food_generation_countdown > food_generation_countdown_max {
            return Err(SimError::CountdownExceedsMax {
                countdown: food_generation_countdown,
                max: food_generation_countdown_max,
            });
        }
        if width <= 0 || height <= 0 {
            return Err(SimError::InvalidDimensions { width, height });
        }

        let last_id = agents
            .iter()
            .map(|a| a.id)
            .chain(foods.iter().map(|f| f.id))
            .chain(obstacles.iter().map(|o| o.id))
            .max()
            .unwrap_or(0);

        Ok(Self {
            width,
            height,
            obstacles,
            foods,
            agents,
            food_generation_countdown,
            food_generation_countdown_max,
            food_growth: FoodGrowth::default(),
            ids: IdentityAllocator::resume_after(last_id),
            pending_events: Vec::new(),
        })
    }

    #[must_use]
    pub fn with_food_growth(mut self, growth: FoodGrowth) -> Self {
        self.food_growth = growth;
        self
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[must_use]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    #[must_use]
    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    #[must_use]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    #[must_use]
    pub fn food_generation_countdown(&self) -> u32 {
        self.food_generation_countdown
    }

    #[must_use]
    pub fn food_generation_countdown_max(&self) -> u32 {
        self.food_generation_countdown_max
    }

    #[must_use]
    pub fn agent(&self, id: u64) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    fn agent_index(&self, id: u64) -> Option<usize> {
        self.agents.iter().position(|a| a.id == id)
    }

    /// Next unused entity id.
    pub fn next_id(&mut self) -> u64 {
        self.ids.next_id()
    }

    // --- Range queries -----------------------------------------------------

    /// Other agents inside `agent`'s sensing square.
    #[must_use]
    pub fn get_agents_in_range(&self, agent: &Agent) -> Vec<&Agent> {
        let radius = agent.sensing_radius();
        self.agents
            .iter()
            .filter(|other| other.id != agent.id)
            .filter(|other| is_in_range(agent.position, radius, other.position))
            .collect()
    }

    #[must_use]
    pub fn get_foods_in_range(&self, agent: &Agent) -> Vec<&Food> {
        let radius = agent.sensing_radius();
        self.foods
            .iter()
            .filter(|food| is_in_range(agent.position, radius, food.position))
            .collect()
    }

    #[must_use]
    pub fn get_obstacles_in_range(&self, agent: &Agent) -> Vec<&Obstacle> {
        let radius = agent.sensing_radius();
        self.obstacles
            .iter()
            .filter(|obstacle| is_in_range(agent.position, radius, obstacle.position))
            .collect()
    }

    #[must_use]
    pub fn get_entities_in_range(&self, agent: &Agent) -> Surroundings<'_> {
        Surroundings {
            agents: self.get_agents_in_range(agent),
            foods: self.get_foods_in_range(agent),
            obstacles: self.get_obstacles_in_range(agent),
        }
    }

    /// Whether any food sits in the sensing square, without collecting it.
    #[must_use]
    pub fn has_food_in_range(&self, agent: &Agent) -> bool {
        let radius = agent.sensing_radius();
        self.foods
            .iter()
            .any(|food| is_in_range(agent.position, radius, food.position))
    }

    #[must_use]
    pub fn has_agent_in_range(&self, agent: &Agent) -> bool {
        let radius = agent.sensing_radius();
        self.agents
            .iter()
            .any(|other| other.id != agent.id && is_in_range(agent.position, radius, other.position))
    }

    /// Position of the nearest food anywhere on the grid.
    #[must_use]
    pub fn closest_food(&self, agent: &Agent) -> Option<Position> {
        movement::closest(agent.position, &self.foods).map(|f| f.position)
    }

    /// Position of the nearest other agent anywhere on the grid.
    #[must_use]
    pub fn closest_agent(&self, agent: &Agent) -> Option<Position> {
        movement::closest(
            agent.position,
            self.agents.iter().filter(|other| other.id != agent.id),
        )
        .map(|a| a.position)
    }

    // --- Cell predicates ---------------------------------------------------

    #[must_use]
    pub fn obstacle_at(&self, pos: Position) -> bool {
        self.obstacles.iter().any(|o| o.position == pos)
    }

    /// First food in collection order at `pos`.
    #[must_use]
    pub fn food_at(&self, pos: Position) -> Option<&Food> {
        self.foods.iter().find(|f| f.position == pos)
    }

    /// First agent other than `except` standing on `pos`.
    #[must_use]
    pub fn other_agent_at(&self, pos: Position, except: u64) -> Option<&Agent> {
        self.agents
            .iter()
            .find(|a| a.id != except && a.position == pos)
    }

    /// A cell is closed to `mover` only when it holds an obstacle and
    /// another agent at the same time.
    #[must_use]
    pub fn is_blocked(&self, pos: Position, mover: u64) -> bool {
        self.obstacle_at(pos) && self.other_agent_at(pos, mover).is_some()
    }

    /// Unblocked cells of the 3x3 block around `agent`, in neighbourhood
    /// order.
    #[must_use]
    pub fn possible_move_targets(&self, agent: &Agent) -> Vec<Position> {
        neighborhood(agent.position)
            .into_iter()
            .filter(|&cell| !self.is_blocked(cell, agent.id))
            .collect()
    }

    // --- Mutations ---------------------------------------------------------

    pub fn add_agent(&mut self, agent: Agent) {
        self.agents.push(agent);
    }

    /// Removes the agent with `id`; absent ids are ignored.
    pub fn remove_agent(&mut self, id: u64) -> Option<Agent> {
        self.agent_index(id).map(|idx| self.agents.remove(idx))
    }

    /// Removes the food with `id`; absent ids are ignored.
    pub fn remove_food(&mut self, id: u64) -> Option<Food> {
        self.foods
            .iter()
            .position(|f| f.id == id)
            .map(|idx| self.foods.remove(idx))
    }

    pub fn record(&mut self, event: LiveEvent) {
        self.pending_events.push(event);
    }

    /// Drains events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<LiveEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // --- Driving -----------------------------------------------------------

    /// Runs one agent's per-tick update.
    ///
    /// The agent is taken out of the collection while it acts, so it never
    /// sees itself in queries, and put back at the same index afterwards
    /// unless it died. Returns `None` for ids that are not live.
    pub fn update_agent<R: Rng>(&mut self, id: u64, rng: &mut R) -> Option<AgentFate> {
        let idx = self.agent_index(id)?;
        let mut agent = self.agents.remove(idx);
        let fate = agent.update(self, rng);
        if fate == AgentFate::Alive {
            // Offspring are only ever appended, so idx is still in bounds.
            self.agents.insert(idx, agent);
        }
        Some(fate)
    }

    /// Advances the whole environment by one step.
    ///
    /// Agents act in their order at tick start. Offspring born during the
    /// tick wait for the next one, and agents that die are not revisited.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> Vec<LiveEvent> {
        let roster: Vec<u64> = self.agents.iter().map(|a| a.id).collect();
        for id in roster {
            self.update_agent(id, rng);
        }
        self.advance_food_countdown(rng);
        self.take_events()
    }

    fn advance_food_countdown<R: Rng>(&mut self, rng: &mut R) {
        self.food_generation_countdown = self.food_generation_countdown.saturating_sub(1);
        if self.food_generation_countdown > 0 {
            return;
        }
        for _ in 0..self.food_growth.batch {
            if self.spawn_food(rng).is_none() {
                tracing::debug!("No free cell for regrown food");
                break;
            }
        }
        self.food_generation_countdown = self.food_generation_countdown_max;
    }

    /// Places one food on a random cell free of obstacles and food.
    pub fn spawn_food<R: Rng>(&mut self, rng: &mut R) -> Option<u64> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let pos = Position::new(rng.gen_range(0..self.width), rng.gen_range(0..self.height));
            if self.obstacle_at(pos) || self.food_at(pos).is_some() {
                continue;
            }
            let id = self.ids.next_id();
            self.foods
                .push(Food::new(id, pos, self.food_growth.nutrition));
            self.record(LiveEvent::FoodSpawned {
                id,
                x: pos.x,
                y: pos.y,
            });
            return Some(id);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridlife_data::{Gene, Genome};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn agent_at(id: u64, x: i32, y: i32, radius: f64) -> Agent {
        let genome = Genome {
            sensing_radius: Gene::recessive(radius),
            ..Genome::default()
        };
        Agent::new(id, Position::new(x, y), genome)
    }

    fn empty_env() -> Environment {
        Environment::new(10, 10, vec![], vec![], vec![], 0, 0).unwrap()
    }

    #[test]
    fn test_countdown_above_max_is_rejected() {
        let err = Environment::new(10, 10, vec![], vec![], vec![], 5, 4).unwrap_err();
        assert_eq!(err, SimError::CountdownExceedsMax { countdown: 5, max: 4 });
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        assert!(Environment::new(0, 10, vec![], vec![], vec![], 0, 0).is_err());
    }

    #[test]
    fn test_ids_resume_after_existing_entities() {
        let mut env = Environment::new(
            10,
            10,
            vec![Obstacle::new(9, Position::new(0, 0))],
            vec![Food::new(4, Position::new(1, 1), 1.0)],
            vec![agent_at(2, 3, 3, 2.0)],
            0,
            0,
        )
        .unwrap();
        assert_eq!(env.next_id(), 10);
    }

    #[test]
    fn test_agent_query_excludes_self() {
        let mut env = empty_env();
        env.add_agent(agent_at(1, 0, 0, 2.0));
        env.add_agent(agent_at(2, 1, 1, 2.0));
        env.add_agent(agent_at(3, 2, 0, 2.0));
        let me = env.agents()[0].clone();
        let ids: Vec<u64> = env.get_agents_in_range(&me).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_obstacle_query_reads_obstacles() {
        let env = Environment::new(
            10,
            10,
            vec![Obstacle::new(1, Position::new(1, 0))],
            vec![Food::new(2, Position::new(0, 1), 1.0)],
            vec![],
            0,
            0,
        )
        .unwrap();
        let seeker = agent_at(99, 0, 0, 2.0);
        let surroundings = env.get_entities_in_range(&seeker);
        assert_eq!(surroundings.obstacles.len(), 1);
        assert_eq!(surroundings.obstacles[0].id, 1);
        assert_eq!(surroundings.foods[0].id, 2);
        assert!(surroundings.agents.is_empty());
    }

    #[test]
    fn test_blocking_needs_obstacle_and_agent() {
        let mut env = Environment::new(
            10,
            10,
            vec![
                Obstacle::new(1, Position::new(1, 0)),
                Obstacle::new(2, Position::new(0, 1)),
            ],
            vec![],
            vec![],
            0,
            0,
        )
        .unwrap();
        env.add_agent(agent_at(10, 0, 1, 2.0));
        env.add_agent(agent_at(11, -1, 0, 2.0));

        let mover = agent_at(12, 0, 0, 2.0);
        assert!(!env.is_blocked(Position::new(1, 0), mover.id));
        assert!(!env.is_blocked(Position::new(-1, 0), mover.id));
        assert!(env.is_blocked(Position::new(0, 1), mover.id));

        let targets = env.possible_move_targets(&mover);
        assert_eq!(targets.len(), 8);
        assert!(!targets.contains(&Position::new(0, 1)));
        assert!(targets.contains(&mover.position));
    }

    #[test]
    fn test_removing_missing_entities_is_noop() {
        let mut env = empty_env();
        assert!(env.remove_agent(42).is_none());
        assert!(env.remove_food(42).is_none());
        env.add_agent(agent_at(1, 0, 0, 2.0));
        assert!(env.remove_agent(1).is_some());
        assert!(env.remove_agent(1).is_none());
        assert!(env.agents().is_empty());
    }

    #[test]
    fn test_closest_scans_whole_grid() {
        let env = Environment::new(
            100,
            100,
            vec![],
            vec![
                Food::new(1, Position::new(90, 90), 1.0),
                Food::new(2, Position::new(50, 40), 1.0),
            ],
            vec![],
            0,
            0,
        )
        .unwrap();
        let seeker = agent_at(3, 0, 0, 2.0);
        assert_eq!(env.closest_food(&seeker), Some(Position::new(50, 40)));
        assert_eq!(env.closest_agent(&seeker), None);
    }

    #[test]
    fn test_closest_agent_picks_nearest_other() {
        let env = Environment::new(
            20,
            20,
            vec![],
            vec![],
            vec![
                agent_at(1, 0, 0, 2.0),
                agent_at(2, 9, 1, 2.0),
                agent_at(3, 0, 5, 2.0),
                agent_at(4, 5, 0, 2.0),
            ],
            0,
            0,
        )
        .unwrap();
        let seeker = env.agents()[0].clone();
        // Agents 3 and 4 are equally near; 3 comes first.
        assert_eq!(env.closest_agent(&seeker), Some(Position::new(0, 5)));

        let far = env.agents()[1].clone();
        assert_eq!(env.closest_agent(&far), Some(Position::new(5, 0)));
    }

    #[test]
    fn test_food_regrows_when_countdown_expires() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut env = Environment::new(5, 5, vec![], vec![], vec![], 2, 3)
            .unwrap()
            .with_food_growth(FoodGrowth {
                nutrition: 2.0,
                batch: 2,
            });

        assert!(env.tick(&mut rng).is_empty());
        assert_eq!(env.food_generation_countdown(), 1);

        let events = env.tick(&mut rng);
        assert_eq!(events.len(), 2);
        assert_eq!(env.foods().len(), 2);
        assert!(env.foods().iter().all(|f| f.nutrition == 2.0));
        assert_eq!(env.food_generation_countdown(), 3);
    }

    #[test]
    fn test_regrowth_avoids_occupied_cells() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let obstacles = vec![
            Obstacle::new(1, Position::new(0, 0)),
            Obstacle::new(2, Position::new(1, 0)),
        ];
        let foods = vec![Food::new(3, Position::new(0, 1), 1.0)];
        let mut env = Environment::new(2, 2, obstacles, foods, vec![], 0, 0).unwrap();

        assert!(env.spawn_food(&mut rng).is_some());
        assert_eq!(env.foods()[1].position, Position::new(1, 1));
        // Grid is now full.
        assert!(env.spawn_food(&mut rng).is_none());
    }

    #[test]
    fn test_update_unknown_agent_is_none() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut env = empty_env();
        assert!(env.update_agent(5, &mut rng).is_none());
    }
}
