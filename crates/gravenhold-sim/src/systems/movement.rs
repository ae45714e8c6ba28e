//! Player movement: input acceleration, damping, and integration.
//!
//! The ultimate dash overrides input-driven movement entirely; its
//! velocity lock lives in the combat system.

use glam::Vec2;

use gravenhold_core::components::Player;
use gravenhold_core::constants::{PLAYER_ACCEL, PLAYER_DAMPING};

/// Apply the movement axis to the player's velocity. The axis is combined
/// into a magnitude-normalized direction so diagonals aren't faster, and
/// damping is applied every tick whether or not there is input.
pub fn apply_input(player: &mut Player, axis: Vec2) {
    if player.ult.active {
        return;
    }
    if axis != Vec2::ZERO {
        player.velocity += axis.normalize() * PLAYER_ACCEL;
    }
    player.velocity *= PLAYER_DAMPING;
}

/// Integrate velocity into position.
pub fn integrate(player: &mut Player) {
    player.position += player.velocity;
}
