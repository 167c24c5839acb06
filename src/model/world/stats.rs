use gridlife_core::Environment;
use gridlife_data::PopulationStats;

/// Averages over the live population. All averages are 0 when it is empty.
#[must_use]
pub fn population_stats(env: &Environment) -> PopulationStats {
    let agents = env.agents();
    let mut stats = PopulationStats {
        population: agents.len(),
        food_count: env.foods().len(),
        ..PopulationStats::default()
    };
    if agents.is_empty() {
        return stats;
    }

    let n = agents.len() as f64;
    for agent in agents {
        stats.avg_age += agent.current_age as f64;
        stats.avg_speed += f64::from(agent.speed());
        stats.avg_sensing_radius += agent.sensing_radius();
        stats.avg_mating_incentive += agent.genome.chance_for_mating_incentive.value;
        stats.avg_mutation_chance += agent.genome.chance_of_mutation_per_attribute.value;
        stats.avg_excess_fat += agent.excess_fat();
    }
    stats.avg_age /= n;
    stats.avg_speed /= n;
    stats.avg_sensing_radius /= n;
    stats.avg_mating_incentive /= n;
    stats.avg_mutation_chance /= n;
    stats.avg_excess_fat /= n;
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridlife_data::{Agent, Gene, Genome, Position};

    #[test]
    fn test_empty_population_has_zero_averages() {
        let env = Environment::new(5, 5, vec![], vec![], vec![], 0, 0).unwrap();
        assert_eq!(population_stats(&env), PopulationStats::default());
    }

    #[test]
    fn test_averages() {
        let fast = Genome {
            speed: Gene::recessive(3.0),
            ..Genome::default()
        };
        let mut a = Agent::new(1, Position::new(0, 0), Genome::default());
        a.current_age = 10;
        a.current_ticks_without_food = -6.0;
        let b = Agent::new(2, Position::new(2, 2), fast);
        let env = Environment::new(5, 5, vec![], vec![], vec![a, b], 0, 0).unwrap();

        let stats = population_stats(&env);
        assert_eq!(stats.population, 2);
        assert_eq!(stats.avg_age, 5.0);
        assert_eq!(stats.avg_speed, 2.0);
        assert_eq!(stats.avg_excess_fat, 3.0);
    }
}
