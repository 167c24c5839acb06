//! # gridlife Core
//!
//! The simulation engine for gridlife: agents on an integer grid that
//! forage, mate and pass on seven heritable traits.
//!
//! This crate contains the deterministic simulation logic, including:
//! - The per-tick agent decision loop (eat / mate / seek / wander)
//! - Brute-force proximity queries over agents, food and obstacles
//! - Mendelian crossover and per-trait mutation
//! - Id allocation, configuration, metrics and logging setup
//!
//! ## Architecture
//!
//! Data types live in `gridlife_data`; behaviour is attached here through
//! extension traits such as [`AgentLogic`]. The [`Environment`] owns every
//! collection and is the only thing that mutates them.
//!
//! ## Example
//!
//! ```
//! use gridlife_core::Environment;
//! use gridlife_data::{Agent, Food, Genome, Position};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let agent = Agent::new(1, Position::new(0, 0), Genome::default());
//! let food = Food::new(2, Position::new(1, 0), 1.0);
//! let mut env = Environment::new(10, 10, vec![], vec![food], vec![agent], 0, 0)?;
//!
//! let events = env.tick(&mut rng);
//! assert!(!events.is_empty());
//! # Ok::<(), gridlife_core::SimError>(())
//! ```

/// Per-tick decision and action engine
pub mod agent;
/// Configuration management for simulation parameters
pub mod config;
/// World state, proximity queries and the tick driver
pub mod environment;
/// Construction-time error types
pub mod error;
/// Crossover, mutation sampling and probability draws
pub mod genetics;
/// Strictly increasing entity ids
pub mod identity;
/// Offspring and founder construction
pub mod lifecycle;
/// Run counters and structured logging
pub mod metrics;
/// Neighbourhood geometry and nearest-target search
pub mod movement;

pub use agent::{Action, AgentFate, AgentLogic};
pub use environment::{Environment, FoodGrowth, Surroundings};
pub use error::SimError;
pub use identity::IdentityAllocator;
pub use metrics::{init_logging, Metrics};
