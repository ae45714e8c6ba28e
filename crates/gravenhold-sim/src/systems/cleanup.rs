//! Cleanup system: despawns entities marked dead during the pass.
//!
//! Systems never remove entities mid-iteration; they push handles into a
//! shared buffer that is drained here, once, at the end of the tick.

use hecs::{Entity, World};

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        // An entity can be marked twice in one tick (e.g. a projectile
        // expiring as it hits); the second despawn is a harmless miss.
        let _ = world.despawn(entity);
    }
}
