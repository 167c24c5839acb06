use crate::environment::Environment;
use crate::genetics::{inherit_genome, random_genome};
use gridlife_data::{Agent, Position};
use rand::seq::SliceRandom;
use rand::Rng;

/// Builds the child of two parents. The caller adds it to the environment.
///
/// The child gets a fresh id, starts at age 0 with an empty stomach
/// counter, and is placed on a random unblocked cell next to either parent.
pub fn create_offspring<R: Rng>(
    parent_a: &Agent,
    parent_b: &Agent,
    env: &mut Environment,
    rng: &mut R,
) -> Agent {
    let id = env.next_id();

    let mut cells = env.possible_move_targets(parent_a);
    for cell in env.possible_move_targets(parent_b) {
        if !cells.contains(&cell) {
            cells.push(cell);
        }
    }
    let position = cells.choose(rng).copied().unwrap_or(parent_a.position);

    let genome = inherit_genome(
        &parent_a.genome,
        &parent_b.genome,
        env.width(),
        env.height(),
        rng,
    );
    Agent::new(id, position, genome)
}

/// A member of the initial population: every gene sampled, none inherited.
pub fn create_founder<R: Rng>(
    id: u64,
    position: Position,
    width: i32,
    height: i32,
    rng: &mut R,
) -> Agent {
    Agent::new(id, position, random_genome(width, height, rng))
}
