//! Dungeon layer for GRAVENHOLD.
//!
//! Owns the tile grid, the one-shot procedural generator, and the
//! fog-of-war reveal mask. Everything here is built once at startup
//! (the fog mask is the only part mutated afterward).

pub mod fog;
pub mod generator;
pub mod grid;

pub use fog::FogMask;
pub use generator::{generate, Decoration, DungeonPlan, Room};
pub use grid::{Tile, TileGrid};
