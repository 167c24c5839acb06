//! Per-tick decision loop of a single agent.
//!
//! Each tick an agent ages, may die, and otherwise gets `speed` action
//! rounds. Every round re-reads the environment, weighs the urge to eat
//! against the urge to mate, and then eats, mates, seeks, or wanders.

use crate::environment::Environment;
use crate::genetics::outcome_with_probability;
use crate::lifecycle::create_offspring;
use crate::movement::step_towards;
use gridlife_data::{Agent, DeathCause, LiveEvent, Position};
use rand::seq::SliceRandom;
use rand::Rng;

/// Sentinel urge to eat whenever food is sensed and there is room for fat.
pub const EAT_INCENTIVE: f64 = 1.0;

/// Outcome of one [`AgentLogic::update`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentFate {
    Alive,
    Died(DeathCause),
}

/// Which urge won a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urge {
    Eat,
    Reproduce,
    None,
}

/// What an agent actually did in one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Ate { food_id: u64 },
    Mated { partner_id: u64, child_id: u64 },
    /// The partner declined; nothing moved.
    Rejected { partner_id: u64 },
    SoughtFood,
    SoughtMate,
    Wandered,
    /// Nothing to seek and nowhere to go.
    Idle,
}

/// Picks the winning urge. Equal nonzero urges are settled by a fair coin.
pub fn choose_urge<R: Rng>(eat: f64, reproduce: f64, rng: &mut R) -> Urge {
    if eat != 0.0 && eat == reproduce {
        if rng.gen_bool(0.5) {
            Urge::Eat
        } else {
            Urge::Reproduce
        }
    } else if eat > reproduce {
        Urge::Eat
    } else if reproduce > eat {
        Urge::Reproduce
    } else {
        Urge::None
    }
}

pub trait AgentLogic {
    /// Ages the agent by one tick and lets it act.
    ///
    /// A dead agent is removed from `env` (a no-op if the caller already
    /// detached it) and performs no action.
    fn update<R: Rng>(&mut self, env: &mut Environment, rng: &mut R) -> AgentFate;

    /// One decision round.
    fn act<R: Rng>(&mut self, env: &mut Environment, rng: &mut R) -> Action;

    /// Cause of death if the age or starvation cap has been exceeded.
    fn death_cause(&self) -> Option<DeathCause>;

    fn incentive_to_eat(&self, env: &Environment) -> f64;
    fn incentive_to_reproduce(&self, env: &Environment) -> f64;

    /// Whether stored fat already exceeds the genetic cap.
    fn is_overfed(&self) -> bool;

    fn eat<R: Rng>(&mut self, env: &mut Environment, rng: &mut R) -> Action;
    fn reproduce<R: Rng>(&mut self, env: &mut Environment, rng: &mut R) -> Action;
    fn wander<R: Rng>(&mut self, env: &Environment, rng: &mut R) -> Action;

    /// One step towards `target` along the best unblocked neighbour cell.
    fn step_to(&mut self, env: &Environment, target: Position) -> bool;
}

impl AgentLogic for Agent {
    fn update<R: Rng>(&mut self, env: &mut Environment, rng: &mut R) -> AgentFate {
        self.current_age += 1;
        self.current_ticks_without_food += 1.0;

        if let Some(cause) = self.death_cause() {
            tracing::debug!(
                id = self.id,
                age = self.current_age,
                ?cause,
                "Agent died"
            );
            env.remove_agent(self.id);
            env.record(LiveEvent::Death {
                id: self.id,
                age: self.current_age,
                cause,
                x: self.position.x,
                y: self.position.y,
            });
            return AgentFate::Died(cause);
        }

        for _ in 0..self.speed() {
            let action = self.act(env, rng);
            tracing::trace!(id = self.id, ?action, "Agent acted");
        }
        AgentFate::Alive
    }

    fn act<R: Rng>(&mut self, env: &mut Environment, rng: &mut R) -> Action {
        let eat = self.incentive_to_eat(env);
        let reproduce = self.incentive_to_reproduce(env);
        match choose_urge(eat, reproduce, rng) {
            Urge::Eat => self.eat(env, rng),
            Urge::Reproduce => self.reproduce(env, rng),
            Urge::None => self.wander(env, rng),
        }
    }

    fn death_cause(&self) -> Option<DeathCause> {
        if self.current_age as f64 > self.genome.potential_highest_age.value {
            Some(DeathCause::OldAge)
        } else if self.current_ticks_without_food > self.genome.ticks_alive_without_food.value {
            Some(DeathCause::Starvation)
        } else {
            None
        }
    }

    fn incentive_to_eat(&self, env: &Environment) -> f64 {
        if env.has_food_in_range(self) && !self.is_overfed() {
            EAT_INCENTIVE
        } else {
            0.0
        }
    }

    fn incentive_to_reproduce(&self, env: &Environment) -> f64 {
        if env.has_agent_in_range(self) {
            self.genome.chance_for_mating_incentive.value
        } else {
            0.0
        }
    }

    fn is_overfed(&self) -> bool {
        self.genome.max_excess_fat.value < -self.current_ticks_without_food
    }

    fn eat<R: Rng>(&mut self, env: &mut Environment, rng: &mut R) -> Action {
        let food_cells: Vec<Position> = env
            .possible_move_targets(self)
            .into_iter()
            .filter(|&cell| env.food_at(cell).is_some())
            .collect();

        let Some(&cell) = food_cells.choose(rng) else {
            let sought = env
                .closest_food(self)
                .is_some_and(|target| self.step_to(env, target));
            return if sought { Action::SoughtFood } else { Action::Idle };
        };
        let Some((food_id, nutrition)) = env.food_at(cell).map(|f| (f.id, f.nutrition)) else {
            return Action::Idle;
        };

        self.current_ticks_without_food -= nutrition * self.metabolism;
        env.remove_food(food_id);
        self.position = cell;
        env.record(LiveEvent::Meal {
            agent_id: self.id,
            food_id,
            x: cell.x,
            y: cell.y,
        });
        Action::Ate { food_id }
    }

    fn reproduce<R: Rng>(&mut self, env: &mut Environment, rng: &mut R) -> Action {
        let mate_cells: Vec<Position> = env
            .possible_move_targets(self)
            .into_iter()
            .filter(|&cell| env.other_agent_at(cell, self.id).is_some())
            .collect();

        let Some(&cell) = mate_cells.choose(rng) else {
            let sought = env
                .closest_agent(self)
                .is_some_and(|target| self.step_to(env, target));
            return if sought { Action::SoughtMate } else { Action::Idle };
        };
        let Some(partner) = env.other_agent_at(cell, self.id).cloned() else {
            return Action::Idle;
        };

        // The partner's own propensity decides whether it accepts.
        if !outcome_with_probability(partner.genome.chance_for_mating_incentive.value, rng) {
            return Action::Rejected {
                partner_id: partner.id,
            };
        }

        let child = create_offspring(self, &partner, env, rng);
        let child_id = child.id;
        tracing::debug!(
            child = child_id,
            parent_a = self.id,
            parent_b = partner.id,
            x = child.position.x,
            y = child.position.y,
            "Offspring born"
        );
        env.record(LiveEvent::Birth {
            id: child_id,
            parents: (self.id, partner.id),
            x: child.position.x,
            y: child.position.y,
        });
        env.add_agent(child);
        Action::Mated {
            partner_id: partner.id,
            child_id,
        }
    }

    fn wander<R: Rng>(&mut self, env: &Environment, rng: &mut R) -> Action {
        match env.possible_move_targets(self).choose(rng) {
            Some(&cell) => {
                self.position = cell;
                Action::Wandered
            }
            None => Action::Idle,
        }
    }

    fn step_to(&mut self, env: &Environment, target: Position) -> bool {
        match step_towards(&env.possible_move_targets(self), target) {
            Some(cell) => {
                self.position = cell;
                true
            }
            None => false,
        }
    }
}
