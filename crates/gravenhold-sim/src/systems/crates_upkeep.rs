//! Ambient crate respawning.
//!
//! Keeps the destructible-crate population near its cap: while under it,
//! each tick rolls a small chance to place one more crate somewhere the
//! player isn't.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gravenhold_core::components::Prop;
use gravenhold_core::constants::{CRATE_CAP, CRATE_RESPAWN_CHANCE};
use gravenhold_core::enums::PropKind;

use gravenhold_dungeon::generator::Room;

use crate::world_setup;

pub fn run(world: &mut World, rng: &mut ChaCha8Rng, rooms: &[Room], player_pos: Vec2) {
    let live = {
        let mut query = world.query::<&Prop>();
        query
            .iter()
            .filter(|(_, prop)| prop.active && prop.kind == PropKind::Crate)
            .count()
    };
    if live < CRATE_CAP && rng.gen_bool(CRATE_RESPAWN_CHANCE) {
        world_setup::try_spawn_crate(world, rng, rooms, player_pos);
    }
}
