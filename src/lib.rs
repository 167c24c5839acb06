//! Headless driver for the gridlife simulation.
//!
//! The engine lives in `gridlife_core`; this crate seeds a [`model::world::World`]
//! from configuration and runs it.

pub mod model;
