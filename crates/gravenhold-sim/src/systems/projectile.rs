//! Projectile update: integration, lifetimes, and first-hit destruction.
//!
//! Fireballs wobble perpendicular to travel as they age; arrows fly
//! straight. Any projectile dies on its first qualifying collision (wall
//! tile, active crate, valid target) or on lifetime expiry.

use glam::Vec2;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use gravenhold_core::components::{Enemy, Player, Position, Projectile, Prop};
use gravenhold_core::constants::*;
use gravenhold_core::enums::{ProjectileKind, PropKind};
use gravenhold_core::types::Aabb;

use gravenhold_dungeon::grid::TileGrid;

use crate::world_setup;

/// Advance every projectile one tick. Returns true if a hostile hit
/// dropped the player to zero hp.
pub fn run(
    world: &mut World,
    player: &mut Player,
    grid: &TileGrid,
    rng: &mut ChaCha8Rng,
    despawn_buffer: &mut Vec<hecs::Entity>,
) -> bool {
    integrate(world);

    // Fireball trails are cosmetic; spawned after the borrow ends.
    let trails: Vec<Vec2> = {
        let mut query = world.query::<(&Projectile, &Position)>();
        query
            .iter()
            .filter(|(_, (proj, _))| proj.kind == ProjectileKind::Fireball)
            .map(|(_, (_, pos))| pos.0 + Vec2::splat(4.0))
            .collect()
    };
    for pos in trails {
        world_setup::spawn_particles(world, rng, pos, COLOR_EMBER, 1);
    }

    let shots: Vec<(hecs::Entity, Vec2, ProjectileKind, bool, u32, f32)> = {
        let mut query = world.query::<(&Projectile, &Position)>();
        query
            .iter()
            .map(|(entity, (proj, pos))| {
                (
                    entity,
                    pos.0,
                    proj.kind,
                    proj.hostile,
                    proj.life,
                    proj.extent(),
                )
            })
            .collect()
    };

    let mut player_down = false;
    for (entity, pos, kind, hostile, life, extent) in shots {
        let rect = Aabb::from_pos(pos, Vec2::splat(extent));

        let mut hit = grid.is_wall_at_world(pos);

        let mut broken: Vec<Vec2> = Vec::new();
        for (_entity, (prop, prop_pos)) in world.query_mut::<(&mut Prop, &Position)>() {
            if prop.active
                && prop.kind == PropKind::Crate
                && rect.overlaps(&Aabb::from_pos(prop_pos.0, prop.size))
            {
                hit = true;
                prop.hp -= PROJECTILE_CRATE_DAMAGE;
                if prop.hp <= 0.0 {
                    prop.active = false;
                    broken.push(prop_pos.0);
                }
            }
        }
        world_setup::crate_breaks(world, rng, &broken);

        if hostile {
            if rect.overlaps(&player.aabb()) {
                player.hp -= ARROW_DAMAGE;
                if player.hp <= 0.0 {
                    player.hp = 0.0;
                    player_down = true;
                }
                hit = true;
            }
        } else {
            let damage = match kind {
                ProjectileKind::Fireball => FIREBALL_DAMAGE,
                // No friendly arrows exist today; kept for uniformity.
                ProjectileKind::Arrow => 20.0,
            };
            let mut bursts: Vec<Vec2> = Vec::new();
            for (_entity, (enemy, enemy_pos)) in world.query_mut::<(&mut Enemy, &Position)>() {
                if rect.overlaps(&Aabb::from_pos(enemy_pos.0, enemy.size)) {
                    enemy.hp -= damage;
                    hit = true;
                    bursts.push(enemy_pos.0);
                }
            }
            for pos in bursts {
                world_setup::spawn_particles(world, rng, pos, COLOR_HIT_FLASH, 2);
            }
        }

        if life == 0 || hit {
            despawn_buffer.push(entity);
        }
    }

    player_down
}

/// Move projectiles and burn lifetime. The fireball's wobble scales with
/// its age and runs perpendicular to the travel direction.
fn integrate(world: &mut World) {
    for (_entity, (proj, pos)) in world.query_mut::<(&mut Projectile, &mut Position)>() {
        proj.life = proj.life.saturating_sub(1);
        match proj.kind {
            ProjectileKind::Fireball => {
                let age = (FIREBALL_LIFE_TICKS - proj.life) as f32;
                let wobble = (age * 0.3).cos() * 0.1;
                pos.0.x += proj.velocity.x - proj.velocity.y * 0.5 * wobble;
                pos.0.y += proj.velocity.y + proj.velocity.x * 0.5 * wobble;
            }
            ProjectileKind::Arrow => {
                pos.0 += proj.velocity;
            }
        }
    }
}
