//! Enemy update: steering, movement, collision, contact damage, and the
//! corpse pass that converts dead enemies into kill credit and loot.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gravenhold_core::components::{Enemy, Player, Position};
use gravenhold_core::constants::*;
use gravenhold_core::enums::{EnemyKind, ItemKind, ProjectileKind};
use gravenhold_core::types::Aabb;

use gravenhold_ai::steering::{self, SteerContext};
use gravenhold_dungeon::grid::TileGrid;

use crate::systems::collision::{self, SolidFilter};
use crate::systems::wave_director::WaveState;
use crate::world_setup;

/// Advance every enemy one tick. Returns true if contact damage dropped
/// the player to zero hp.
pub fn run(world: &mut World, player: &mut Player, grid: &TileGrid) -> bool {
    let mut crate_rects = Vec::new();
    collision::collect_crate_rects(world, &mut crate_rects);

    let mut arrows: Vec<(Vec2, Vec2)> = Vec::new();
    let mut player_down = false;

    for (_entity, (enemy, pos)) in world.query_mut::<(&mut Enemy, &mut Position)>() {
        let update = steering::evaluate(&SteerContext {
            behavior: enemy.behavior,
            position: pos.0,
            player_pos: player.position,
            base_speed: enemy.base_speed,
            light_radius: player.light_radius,
        });
        enemy.behavior = update.behavior;

        if update.fire_arrow {
            let center = pos.0 + enemy.size * 0.5;
            let to_player = player.position - pos.0;
            let dir = to_player.normalize_or_zero();
            arrows.push((center, dir * ARROW_SPEED));
        }

        if let Some(velocity) = update.velocity {
            if velocity != Vec2::ZERO {
                pos.0 += velocity;
                match enemy.kind() {
                    // Bats fly over everything; ghosts pass walls but not crates.
                    EnemyKind::Bat => {}
                    EnemyKind::Ghost => collision::resolve(
                        &mut pos.0,
                        enemy.size,
                        grid,
                        &crate_rects,
                        SolidFilter::CRATES_ONLY,
                    ),
                    _ => collision::resolve(
                        &mut pos.0,
                        enemy.size,
                        grid,
                        &crate_rects,
                        SolidFilter::ALL,
                    ),
                }
            }
        }

        // Contact damage applies regardless of steering distance.
        if Aabb::from_pos(pos.0, enemy.size).overlaps(&player.aabb()) {
            player.hp -= ENEMY_CONTACT_DAMAGE;
            if player.hp <= 0.0 {
                player.hp = 0.0;
                player_down = true;
            }
        }
    }

    for (pos, velocity) in arrows {
        world_setup::spawn_projectile(world, pos, ProjectileKind::Arrow, velocity, true);
    }

    player_down
}

/// Corpse pass: every enemy at or below zero hp yields kill credit, a
/// particle burst, and loot, then is marked for despawn. Removal happens
/// in the cleanup system, never mid-iteration.
pub fn process_deaths(
    world: &mut World,
    player: &mut Player,
    wave: &mut WaveState,
    rng: &mut ChaCha8Rng,
    despawn_buffer: &mut Vec<hecs::Entity>,
) {
    let mut deaths: Vec<(hecs::Entity, Vec2)> = Vec::new();
    {
        let mut query = world.query::<(&Enemy, &Position)>();
        for (entity, (enemy, pos)) in query.iter() {
            if enemy.hp <= 0.0 {
                deaths.push((entity, pos.0));
            }
        }
    }

    for (entity, pos) in deaths {
        player.kills += 1;
        wave.record_kill();
        world_setup::spawn_particles(world, rng, pos, COLOR_BLOOD, 8);
        world_setup::spawn_item(world, pos, ItemKind::Gold, KILL_GOLD_VALUE);
        if rng.gen_bool(KILL_BLOOD_CHANCE) {
            world_setup::spawn_item(world, pos + Vec2::splat(5.0), ItemKind::Blood, 1.0);
        }
        despawn_buffer.push(entity);
    }
}
