//! Run statistics and logging setup.
//!
//! Provides structured logging and counters for monitoring population
//! health over a run.

use gridlife_data::{DeathCause, LiveEvent};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Counters accumulated from tick events.
#[derive(Debug)]
pub struct Metrics {
    tick_count: u64,
    births: u64,
    deaths_old_age: u64,
    deaths_starvation: u64,
    meals: u64,
    food_spawned: u64,
    peak_population: usize,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: 0,
            births: 0,
            deaths_old_age: 0,
            deaths_starvation: 0,
            meals: 0,
            food_spawned: 0,
            peak_population: 0,
            start_time: Instant::now(),
        }
    }

    /// Folds one tick's events into the totals.
    pub fn record_tick(&mut self, events: &[LiveEvent], population: usize) {
        self.tick_count += 1;
        self.peak_population = self.peak_population.max(population);
        for event in events {
            match event {
                LiveEvent::Birth { .. } => self.births += 1,
                LiveEvent::Death {
                    cause: DeathCause::OldAge,
                    ..
                } => self.deaths_old_age += 1,
                LiveEvent::Death {
                    cause: DeathCause::Starvation,
                    ..
                } => self.deaths_starvation += 1,
                LiveEvent::Meal { .. } => self.meals += 1,
                LiveEvent::FoodSpawned { .. } => self.food_spawned += 1,
            }
        }
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn births(&self) -> u64 {
        self.births
    }

    #[must_use]
    pub fn deaths(&self) -> u64 {
        self.deaths_old_age + self.deaths_starvation
    }

    #[must_use]
    pub fn meals(&self) -> u64 {
        self.meals
    }

    #[must_use]
    pub fn food_spawned(&self) -> u64 {
        self.food_spawned
    }

    #[must_use]
    pub fn peak_population(&self) -> usize {
        self.peak_population
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Emits the run totals at info level.
    pub fn log_summary(&self) {
        tracing::info!(
            ticks = self.tick_count,
            births = self.births,
            deaths_old_age = self.deaths_old_age,
            deaths_starvation = self.deaths_starvation,
            meals = self.meals,
            food_spawned = self.food_spawned,
            peak_population = self.peak_population,
            elapsed_ms = self.elapsed().as_millis() as u64,
            "Run summary"
        );
    }
}

/// Initialize tracing subscriber for logging.
///
/// Honours `RUST_LOG`; defaults to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}
