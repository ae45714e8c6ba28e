//! Simulation engine for GRAVENHOLD.
//!
//! Owns the hecs ECS world and the player, runs systems in a fixed order
//! each tick, and produces a HUD snapshot for the presentation layer.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use gravenhold_core as core;
