//! Enemy AI for GRAVENHOLD.
//!
//! Pure steering functions and per-kind stat profiles. No ECS dependency:
//! the simulation feeds plain data in and applies the returned update.

pub mod profiles;
pub mod steering;

pub use gravenhold_core as core;

#[cfg(test)]
mod tests;
