use crate::model::world::{stats, World};
use gridlife_data::LiveEvent;

impl World {
    /// Advances the simulation by one tick and returns what happened.
    pub fn update(&mut self) -> Vec<LiveEvent> {
        self.tick += 1;
        let events = self.env.tick(&mut self.rng);
        self.metrics.record_tick(&events, self.env.agents().len());
        self.pop_stats = stats::population_stats(&self.env);

        for event in &events {
            tracing::trace!(tick = self.tick, ?event, "Event");
        }
        if self.tick % self.config.log_interval == 0 {
            tracing::info!(
                tick = self.tick,
                population = self.pop_stats.population,
                food = self.pop_stats.food_count,
                avg_age = self.pop_stats.avg_age,
                avg_speed = self.pop_stats.avg_speed,
                avg_sensing_radius = self.pop_stats.avg_sensing_radius,
                avg_excess_fat = self.pop_stats.avg_excess_fat,
                "Population"
            );
        }
        events
    }

    /// Runs until `max_ticks` have elapsed or the population dies out.
    ///
    /// `max_ticks == 0` runs until extinction. Returns the ticks executed.
    pub fn run(&mut self, max_ticks: u64) -> u64 {
        let start = self.tick;
        while !self.is_extinct() && (max_ticks == 0 || self.tick - start < max_ticks) {
            self.update();
        }
        if self.is_extinct() {
            tracing::info!(tick = self.tick, "Population extinct");
        }
        self.tick - start
    }
}
