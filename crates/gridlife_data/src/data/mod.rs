//! Core data structures for the gridlife simulation.

pub mod entity;
pub mod environment;
pub mod genotype;
pub mod terrain;
