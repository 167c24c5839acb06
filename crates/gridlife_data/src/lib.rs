//! Plain data types shared by every gridlife crate.
//!
//! Nothing in here knows how to simulate; behaviour lives in `gridlife_core`
//! as extension traits over these types.

pub mod data;

pub use data::entity::{Agent, Located, Position, DEFAULT_METABOLISM};
pub use data::environment::{DeathCause, LiveEvent, PopulationStats};
pub use data::genotype::{Gene, GeneKind, Genome};
pub use data::terrain::{Food, Obstacle};
