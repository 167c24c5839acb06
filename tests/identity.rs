mod common;

use common::seeded_world;
use gridlife_data::LiveEvent;
use std::collections::HashSet;

#[test]
fn test_new_ids_strictly_increase_over_a_run() {
    let mut world = seeded_world(2024);
    let mut issued = Vec::new();

    for _ in 0..300 {
        for event in world.update() {
            match event {
                LiveEvent::Birth { id, .. } | LiveEvent::FoodSpawned { id, .. } => issued.push(id),
                _ => {}
            }
        }
    }

    assert!(!issued.is_empty(), "Run created no entities");
    assert!(
        issued.windows(2).all(|w| w[0] < w[1]),
        "Ids not strictly increasing: {issued:?}"
    );
}

#[test]
fn test_live_ids_are_unique_across_collections() {
    let mut world = seeded_world(7);
    world.run(150);

    let env = world.env();
    let ids: Vec<u64> = env
        .agents()
        .iter()
        .map(|a| a.id)
        .chain(env.foods().iter().map(|f| f.id))
        .chain(env.obstacles().iter().map(|o| o.id))
        .collect();
    let unique: HashSet<u64> = ids.iter().copied().collect();
    assert_eq!(ids.len(), unique.len());
}
