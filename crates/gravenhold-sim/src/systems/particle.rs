//! Cosmetic particle integration and expiry.

use hecs::World;

use gravenhold_core::components::{Particle, Position};

pub fn run(world: &mut World, despawn_buffer: &mut Vec<hecs::Entity>) {
    for (entity, (particle, pos)) in world.query_mut::<(&mut Particle, &mut Position)>() {
        pos.0 += particle.velocity;
        particle.life = particle.life.saturating_sub(1);
        if particle.life == 0 {
            despawn_buffer.push(entity);
        }
    }
}
